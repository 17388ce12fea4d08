//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Pro Intent entsteht höchstens ein Zustandswechsel der Aufnahme und
/// höchstens eine Store-Mutation.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let recording = state.is_recording();

    match intent {
        AppIntent::ToggleRecordingRequested { segment_id } => {
            if recording {
                vec![AppCommand::FinalizeRecording]
            } else {
                vec![AppCommand::StartRecording { segment_id }]
            }
        }
        AppIntent::CancelRecordingRequested => {
            if recording {
                vec![AppCommand::CancelRecording]
            } else {
                vec![]
            }
        }
        AppIntent::FixedTick { cursor, segment_id } => {
            if recording {
                vec![
                    AppCommand::ObserveSegment { segment_id },
                    AppCommand::SampleTick { cursor },
                ]
            } else {
                vec![]
            }
        }
        AppIntent::UndoRequested => with_cancel(recording, AppCommand::RemoveLastCurve),
        AppIntent::ClearCurvesRequested => with_cancel(recording, AppCommand::ClearCurves),
        AppIntent::SumCurvesRequested => with_cancel(recording, AppCommand::SumCurves),
        AppIntent::RegenerateVisualsRequested => vec![AppCommand::RegenerateVisuals],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}

fn with_cancel(recording: bool, command: AppCommand) -> Vec<AppCommand> {
    if recording {
        vec![AppCommand::CancelRecording, command]
    } else {
        vec![command]
    }
}

#[cfg(test)]
mod tests;
