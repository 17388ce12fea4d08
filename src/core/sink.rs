//! Schnittstelle zu den Kollaborateuren, die pro Kurve Objekte halten.

use super::Curve;
use glam::Vec2;

/// Capability für Darstellung/Kollision gespeicherter Kurven.
///
/// Der `CurveStore` ruft die Methoden synchron nach jeder Mutation auf.
/// Nach jedem Aufruf muss `object_count()` der Anzahl gespeicherter Kurven
/// entsprechen; die Live-Vorschau zählt nicht mit.
pub trait CurveSink {
    /// Eine Kurve wurde mit Anzeige-Index `index` angehängt.
    fn on_curve_added(&mut self, index: usize, curve: &Curve);

    /// Die Kurve mit Index `index` (immer die letzte) wurde entfernt.
    fn on_curve_removed(&mut self, index: usize);

    /// Alle Kurven wurden ersetzt. Alte Objekte müssen vollständig abgebaut sein,
    /// bevor neue entstehen; Index = Position in `curves`.
    fn on_all_replaced(&mut self, curves: &[Curve]);

    /// Alle Kurven wurden entfernt.
    fn on_all_cleared(&mut self);

    /// Live-Vorschau der laufenden Aufnahme (Farbe des nächsten Index).
    fn on_preview_updated(&mut self, _index: usize, _points: &[Vec2]) {}

    /// Live-Vorschau verworfen (Aufnahme beendet oder abgebrochen).
    fn on_preview_cleared(&mut self) {}

    /// Anzahl der gehaltenen Kurven-Objekte (ohne Vorschau).
    fn object_count(&self) -> usize;
}
