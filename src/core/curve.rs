//! Eine fertig aufgezeichnete, unveränderliche Kurve.

use glam::Vec2;

/// Geordnete Punktfolge einer abgeschlossenen Aufnahme (mindestens 2 Punkte).
///
/// Kurven entstehen nur crate-intern (Finalisieren einer Aufnahme oder
/// Summierung) und werden danach nicht mehr verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Vec2>,
}

impl Curve {
    /// Minimale Punktanzahl einer gespeicherten Kurve.
    pub const MIN_POINTS: usize = 2;

    /// Erstellt eine Kurve. `None` bei weniger als [`Self::MIN_POINTS`] Punkten.
    pub(crate) fn from_points(points: Vec<Vec2>) -> Option<Self> {
        if points.len() < Self::MIN_POINTS {
            return None;
        }
        Some(Self { points })
    }

    /// Read-only Sicht auf alle Punkte in Aufnahme-Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false` für gespeicherte Kurven.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Erster Punkt der Kurve.
    pub fn first(&self) -> Vec2 {
        self.points[0]
    }

    /// Letzter Punkt der Kurve.
    pub fn last(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Kleinster und größter x-Wert `(min, max)`.
    pub fn x_range(&self) -> (f32, f32) {
        self.points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            })
    }
}
