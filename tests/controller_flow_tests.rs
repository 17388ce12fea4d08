use approx::assert_relative_eq;
use glam::Vec2;
use terrain_sketch::{AppCommand, AppController, AppIntent, AppState, TerrainOptions};

mod controller_flow;

/// Optionen ohne Glättung und ohne Drosselung: jeder Tick wird ein Rohpunkt.
fn raw_options() -> TerrainOptions {
    TerrainOptions {
        enable_smoothing: false,
        points_per_second: 50.0,
        fixed_tick_rate_hz: 50.0,
        ..TerrainOptions::default()
    }
}

fn tick(controller: &mut AppController, state: &mut AppState, x: f32, y: f32, segment_id: u64) {
    controller
        .handle_intent(
            state,
            AppIntent::FixedTick {
                cursor: Vec2::new(x, y),
                segment_id,
            },
        )
        .expect("FixedTick sollte ohne Fehler durchlaufen");
}

fn toggle(controller: &mut AppController, state: &mut AppState, segment_id: u64) {
    controller
        .handle_intent(state, AppIntent::ToggleRecordingRequested { segment_id })
        .expect("Toggle sollte ohne Fehler durchlaufen");
}

/// Nimmt eine vollständige Geste im Segment 0 auf.
fn record_gesture(controller: &mut AppController, state: &mut AppState, points: &[(f32, f32)]) {
    toggle(controller, state, 0);
    for &(x, y) in points {
        tick(controller, state, x, y, 0);
    }
    toggle(controller, state, 0);
}

#[test]
fn test_toggle_records_throttled_smoothed_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.options.frames_per_point(), 2);

    toggle(&mut controller, &mut state, 0);
    assert!(state.is_recording());

    for i in 0..4 {
        tick(&mut controller, &mut state, i as f32, 0.5, 0);
    }
    // Ticks 0 und 2 werden gesampelt
    assert_eq!(state.session.raw_samples().len(), 2);
    assert_eq!(state.preview().len(), 5);

    toggle(&mut controller, &mut state, 0);

    assert!(!state.is_recording());
    assert!(state.preview().is_empty());
    assert_eq!(state.curve_count(), 1);
    let curve = &state.curves.curves()[0];
    assert_eq!(curve.len(), 5);
    assert_eq!(curve.first(), Vec2::new(0.0, 0.5));
    assert_eq!(curve.last(), Vec2::new(2.0, 0.5));
}

#[test]
fn test_segment_change_finalizes_and_stays_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());

    toggle(&mut controller, &mut state, 4);
    tick(&mut controller, &mut state, 0.0, 0.0, 4);
    tick(&mut controller, &mut state, 1.0, 1.0, 4);
    tick(&mut controller, &mut state, 2.0, 9.0, 5);

    assert!(!state.is_recording());
    assert_eq!(state.curve_count(), 1);
    assert_eq!(
        state.curves.curves()[0].points(),
        &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
        "Der Tick mit neuem Segment darf keinen Punkt mehr liefern"
    );

    // Kein automatischer Neustart
    tick(&mut controller, &mut state, 3.0, 0.0, 5);
    assert!(!state.is_recording());
    assert_eq!(state.curve_count(), 1);
}

#[test]
fn test_single_sample_gesture_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());

    record_gesture(&mut controller, &mut state, &[(1.0, 1.0)]);

    assert!(!state.is_recording());
    assert_eq!(state.curve_count(), 0);
    assert!(state.scene().objects().is_empty());
}

#[test]
fn test_undo_while_recording_drops_gesture_and_last_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());
    record_gesture(&mut controller, &mut state, &[(0.0, 0.0), (1.0, 1.0)]);
    record_gesture(&mut controller, &mut state, &[(0.0, 1.0), (1.0, 2.0)]);

    toggle(&mut controller, &mut state, 0);
    tick(&mut controller, &mut state, 0.0, 2.0, 0);
    tick(&mut controller, &mut state, 1.0, 2.0, 0);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");

    assert!(!state.is_recording());
    assert!(state.scene().preview().is_none());
    assert_eq!(state.curve_count(), 1);
    assert_eq!(state.curves.curves()[0].first(), Vec2::new(0.0, 0.0));
    assert_eq!(state.scene().objects().len(), 1);
}

#[test]
fn test_sum_replaces_curves_with_composite() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());
    record_gesture(&mut controller, &mut state, &[(0.0, 1.0), (1.0, 0.0)]);
    record_gesture(&mut controller, &mut state, &[(0.0, 1.0), (1.0, 1.0)]);

    controller
        .handle_intent(&mut state, AppIntent::SumCurvesRequested)
        .expect("Summe sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve_count(), 1);
    let sum = state.curves.curves()[0].points();
    assert_eq!(sum.len(), 2);
    assert_relative_eq!(sum[0].y, 2.0);
    assert_relative_eq!(sum[1].y, 1.0);

    let objects = state.scene().objects();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name, "Curve_0");
}

#[test]
fn test_sum_while_recording_cancels_gesture_first() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());
    record_gesture(&mut controller, &mut state, &[(0.0, 1.0), (2.0, 1.0)]);
    record_gesture(&mut controller, &mut state, &[(1.0, 1.0), (3.0, 1.0)]);

    toggle(&mut controller, &mut state, 0);
    tick(&mut controller, &mut state, 0.0, 50.0, 0);
    tick(&mut controller, &mut state, 1.0, 50.0, 0);

    controller
        .handle_intent(&mut state, AppIntent::SumCurvesRequested)
        .expect("Summe sollte ohne Fehler durchlaufen");

    assert!(!state.is_recording());
    assert_eq!(state.curve_count(), 1);
    // Grid {0, 1, 2, 3}, außerhalb des Bereichs wird geklemmt
    let ys: Vec<f32> = state.curves.curves()[0].points().iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![2.0, 2.0, 2.0, 2.0]);
}

#[test]
fn test_options_changed_rebuilds_scene_style() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());
    record_gesture(&mut controller, &mut state, &[(0.0, 0.0), (1.0, 1.0)]);
    assert!(state.scene().objects()[0].edge.is_some());

    let options = TerrainOptions {
        add_collider: false,
        line_width: 0.8,
        ..raw_options()
    };
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("Optionen sollten übernommen werden");

    let object = &state.scene().objects()[0];
    assert!(object.edge.is_none());
    assert_relative_eq!(object.width, 0.8);
    assert_eq!(state.curve_count(), 1);
}

#[test]
fn test_options_changed_mid_gesture_refreshes_scene_preview() {
    let mut controller = AppController::new();
    let smoothed = TerrainOptions {
        enable_smoothing: true,
        ..raw_options()
    };
    let mut state = AppState::with_options(smoothed.clone());

    toggle(&mut controller, &mut state, 0);
    tick(&mut controller, &mut state, 0.0, 0.0, 0);
    tick(&mut controller, &mut state, 1.0, 1.0, 0);
    assert_eq!(state.preview().len(), 5);

    let options = TerrainOptions {
        enable_smoothing: false,
        line_width: 1.0,
        ..smoothed
    };
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("Optionen sollten übernommen werden");

    assert!(state.is_recording());
    assert_eq!(state.preview().len(), 2);
    let preview = state
        .scene()
        .preview()
        .expect("Laufende Aufnahme braucht eine Vorschau");
    assert_eq!(preview.strip, state.preview());
    assert_relative_eq!(preview.width, 1.0);
}

#[test]
fn test_save_options_into_missing_directory_returns_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir()
        .join("terrain_sketch_missing_dir")
        .join("nested")
        .join("terrain_sketch.toml");

    let result = controller.handle_intent(&mut state, AppIntent::SaveOptionsRequested { path });

    assert!(result.is_err());
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::SaveOptions { .. })
    ));
}

#[test]
fn test_command_log_records_mapped_commands_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(raw_options());

    toggle(&mut controller, &mut state, 2);
    tick(&mut controller, &mut state, 0.0, 0.0, 2);
    controller
        .handle_intent(&mut state, AppIntent::ClearCurvesRequested)
        .expect("Leeren sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::StartRecording { segment_id: 2 },
            AppCommand::ObserveSegment { segment_id: 2 },
            AppCommand::SampleTick {
                cursor: Vec2::new(0.0, 0.0)
            },
            AppCommand::CancelRecording,
            AppCommand::ClearCurves,
        ]
    );
}
