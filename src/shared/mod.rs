//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält Geometrie, Farbzyklus und Optionen, die zwischen `app`, `core`
//! und `render` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod color;
pub mod options;
pub mod spline_geometry;

pub use color::curve_color;
pub use options::TerrainOptions;
pub use options::{GRID_DEDUP_EPSILON, SMOOTH_SUBDIVISIONS};
