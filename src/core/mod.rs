//! Core-Domänentypen: Kurve, Kurven-Store und Kollaborateur-Schnittstelle.

pub mod curve;
pub mod curve_store;
pub mod sink;

pub use curve::Curve;
pub use curve_store::CurveStore;
pub use sink::CurveSink;
