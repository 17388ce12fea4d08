use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

use super::map_intent_to_commands;

fn recording_state() -> AppState {
    let mut state = AppState::new();
    state.session.start(0);
    state
}

#[test]
fn toggle_while_idle_maps_to_start() {
    let state = AppState::new();

    let commands =
        map_intent_to_commands(&state, AppIntent::ToggleRecordingRequested { segment_id: 3 });

    assert_eq!(commands, vec![AppCommand::StartRecording { segment_id: 3 }]);
}

#[test]
fn toggle_while_recording_maps_to_finalize() {
    let state = recording_state();

    let commands =
        map_intent_to_commands(&state, AppIntent::ToggleRecordingRequested { segment_id: 3 });

    assert_eq!(commands, vec![AppCommand::FinalizeRecording]);
}

#[test]
fn fixed_tick_while_idle_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FixedTick {
            cursor: Vec2::ONE,
            segment_id: 0,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn fixed_tick_while_recording_observes_segment_before_sampling() {
    let state = recording_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FixedTick {
            cursor: Vec2::ONE,
            segment_id: 1,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::ObserveSegment { segment_id: 1 }
    ));
    assert!(matches!(commands[1], AppCommand::SampleTick { .. }));
}

#[test]
fn undo_while_recording_cancels_then_removes_last_curve() {
    let state = recording_state();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(
        commands,
        vec![AppCommand::CancelRecording, AppCommand::RemoveLastCurve]
    );
}

#[test]
fn undo_while_idle_removes_last_curve() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(commands, vec![AppCommand::RemoveLastCurve]);
}

#[test]
fn sum_while_recording_cancels_first() {
    let state = recording_state();

    let commands = map_intent_to_commands(&state, AppIntent::SumCurvesRequested);

    assert_eq!(
        commands,
        vec![AppCommand::CancelRecording, AppCommand::SumCurves]
    );
}

#[test]
fn clear_while_idle_maps_to_single_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ClearCurvesRequested);

    assert_eq!(commands, vec![AppCommand::ClearCurves]);
}

#[test]
fn cancel_while_idle_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::CancelRecordingRequested);

    assert!(commands.is_empty());
}

#[test]
fn regenerate_keeps_running_recording() {
    let state = recording_state();

    let commands = map_intent_to_commands(&state, AppIntent::RegenerateVisualsRequested);

    assert_eq!(commands, vec![AppCommand::RegenerateVisuals]);
}
