//! Terrain-Sketch Library.
//!
//! Nimmt Cursor-Bewegungen als geordnete Kurven auf, glättet sie per
//! Catmull-Rom und fasst mehrere Kurven auf einem gemeinsamen x-Grid zu
//! einer Summenkurve zusammen.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, GestureOutcome, RecordingSession,
    RecordingState, SegmentId,
};
pub use core::{Curve, CurveSink, CurveStore};
pub use render::{CurveObject, CurveScene, EdgeShape, SceneStyle};
pub use shared::spline_geometry::{sample_linear, smooth_catmull_rom};
pub use shared::{curve_color, TerrainOptions};
