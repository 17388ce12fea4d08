//! Application-Layer: Controller, State, Events, Aufnahme und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod recording;
/// Application State
///
/// Hält Aufnahme-Session, Kurven-Store samt Szene und Optionen.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use recording::{GestureOutcome, RecordingSession, RecordingState, SegmentId};
pub use state::AppState;
