//! Szene-Objekte bleiben über alle Store-Mutationen mit der Kurvenliste synchron.

use glam::Vec2;
use terrain_sketch::{curve_color, AppController, AppIntent, AppState, TerrainOptions};

fn raw_state() -> AppState {
    AppState::with_options(TerrainOptions {
        enable_smoothing: false,
        points_per_second: 50.0,
        fixed_tick_rate_hz: 50.0,
        ..TerrainOptions::default()
    })
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn gesture(controller: &mut AppController, state: &mut AppState, y: f32) {
    send(controller, state, AppIntent::ToggleRecordingRequested { segment_id: 0 });
    for x in [0.0, 1.0, 2.0] {
        send(
            controller,
            state,
            AppIntent::FixedTick {
                cursor: Vec2::new(x, y),
                segment_id: 0,
            },
        );
    }
    send(controller, state, AppIntent::ToggleRecordingRequested { segment_id: 0 });
}

fn assert_in_sync(state: &AppState) {
    let objects = state.scene().objects();
    assert_eq!(objects.len(), state.curve_count());
    for (i, (object, curve)) in objects.iter().zip(state.curves.curves()).enumerate() {
        assert_eq!(object.name, format!("Curve_{i}"));
        assert_eq!(object.color, curve_color(i));
        assert_eq!(object.strip, curve.points());
    }
}

#[test]
fn test_scene_tracks_every_mutation() {
    let mut controller = AppController::new();
    let mut state = raw_state();

    for y in [0.0, 1.0, 2.0] {
        gesture(&mut controller, &mut state, y);
        assert_in_sync(&state);
    }

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_in_sync(&state);

    send(&mut controller, &mut state, AppIntent::RegenerateVisualsRequested);
    assert_in_sync(&state);

    send(&mut controller, &mut state, AppIntent::SumCurvesRequested);
    assert_in_sync(&state);

    send(&mut controller, &mut state, AppIntent::ClearCurvesRequested);
    assert_in_sync(&state);
    assert_eq!(state.curve_count(), 0);
}

#[test]
fn test_color_slot_reused_after_undo() {
    let mut controller = AppController::new();
    let mut state = raw_state();
    gesture(&mut controller, &mut state, 0.0);
    gesture(&mut controller, &mut state, 1.0);
    let second_color = state.scene().objects()[1].color;

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    gesture(&mut controller, &mut state, 5.0);

    assert_eq!(state.scene().objects()[1].color, second_color);
    assert_eq!(state.curves.curves()[1].first(), Vec2::new(0.0, 5.0));
}

#[test]
fn test_edge_is_local_to_first_point() {
    let mut controller = AppController::new();
    let mut state = raw_state();
    gesture(&mut controller, &mut state, 3.0);

    let object = &state.scene().objects()[0];
    let edge = object.edge.as_ref().expect("Kante ist standardmäßig aktiv");
    assert_eq!(edge.origin, Vec2::new(0.0, 3.0));
    assert_eq!(edge.local_points[0], Vec2::ZERO);
    let world: Vec<Vec2> = edge.world_points().collect();
    assert_eq!(world, object.strip);
}
