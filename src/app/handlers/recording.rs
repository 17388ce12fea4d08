//! Handler für den Aufnahme-Lebenszyklus (Start, Sample, Abschluss, Abbruch).

use crate::app::recording::{GestureOutcome, SegmentId};
use crate::app::AppState;
use glam::Vec2;

/// Startet eine Aufnahme im aktuellen Segment.
pub fn start(state: &mut AppState, segment_id: SegmentId) {
    if state.session.start(segment_id) {
        log::info!("Aufnahme gestartet (Segment {})", segment_id);
    }
}

/// Schließt die laufende Aufnahme ab.
pub fn finalize(state: &mut AppState) {
    let outcome = state.session.finalize(&mut state.curves);
    log_outcome(outcome);
}

/// Verwirft die laufende Aufnahme.
pub fn cancel(state: &mut AppState) {
    if state.session.cancel(&mut state.curves) {
        log::info!("Aufnahme verworfen");
    }
}

/// Prüft auf Segmentwechsel; ein Wechsel schließt die Aufnahme ab.
pub fn observe_segment(state: &mut AppState, segment_id: SegmentId) {
    if let Some(outcome) = state.session.observe_segment(segment_id, &mut state.curves) {
        log_outcome(outcome);
    }
}

/// Nimmt die Cursor-Position auf, falls der Tick laut Drosselung fällig ist.
pub fn sample_tick(state: &mut AppState, cursor: Vec2) {
    if !state.session.is_recording() {
        return;
    }
    let frames_per_point = state.options.frames_per_point();
    if state.session.advance_tick(frames_per_point) {
        state.session.add_sample(cursor, &mut state.curves);
    }
}

fn log_outcome(outcome: GestureOutcome) {
    match outcome {
        GestureOutcome::Stored { index } => log::info!("Aufnahme beendet: Kurve {}", index),
        GestureOutcome::Discarded | GestureOutcome::NotRecording => {}
    }
}
