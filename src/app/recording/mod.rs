//! Aufnahme-Zustandsautomat für die aktuell gezeichnete Kurve.
//!
//! `Idle` → `start()` → `Recording` → `finalize()` / `cancel()` /
//! Segmentwechsel → `Idle`. Rohsamples bleiben getrennt von der geglätteten
//! Vorschau erhalten.

mod session;


pub use session::{GestureOutcome, RecordingSession, RecordingState, SegmentId};
