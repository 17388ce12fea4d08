//! Headless-Szene: hält pro gespeicherter Kurve ein Darstellungs-/Kollisionsobjekt.
//!
//! `CurveScene` ist der Standard-`CurveSink`. Sie erzeugt reine Daten
//! (Streifen, Farbe, Kante); eine Engine kann diese 1:1 übernehmen.

mod types;

pub use types::{CurveObject, EdgeShape, SceneStyle};

use crate::core::{Curve, CurveSink};
use glam::Vec2;

/// Objekte aller gespeicherten Kurven plus optionaler Live-Vorschau.
#[derive(Debug, Clone, Default)]
pub struct CurveScene {
    style: SceneStyle,
    objects: Vec<CurveObject>,
    preview: Option<CurveObject>,
}

impl CurveScene {
    /// Erstellt eine leere Szene mit dem gegebenen Stil.
    pub fn new(style: SceneStyle) -> Self {
        Self {
            style,
            objects: Vec::new(),
            preview: None,
        }
    }

    /// Aktueller Stil.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Setzt einen neuen Stil. Bestehende Objekte bleiben bis zum nächsten Neuaufbau.
    pub fn set_style(&mut self, style: SceneStyle) {
        self.style = style;
    }

    /// Alle Objekte in Anzeige-Reihenfolge.
    pub fn objects(&self) -> &[CurveObject] {
        &self.objects
    }

    /// Live-Vorschau der laufenden Aufnahme.
    pub fn preview(&self) -> Option<&CurveObject> {
        self.preview.as_ref()
    }
}

impl CurveSink for CurveScene {
    fn on_curve_added(&mut self, index: usize, curve: &Curve) {
        self.objects
            .push(CurveObject::build(index, curve.points(), &self.style));
    }

    fn on_curve_removed(&mut self, index: usize) {
        if let Some(pos) = self.objects.iter().rposition(|o| o.index == index) {
            self.objects.remove(pos);
        } else {
            log::warn!("Kein Szene-Objekt für Kurve {} gefunden", index);
        }
    }

    fn on_all_replaced(&mut self, curves: &[Curve]) {
        self.objects.clear();
        self.objects.extend(
            curves
                .iter()
                .enumerate()
                .map(|(i, c)| CurveObject::build(i, c.points(), &self.style)),
        );
    }

    fn on_all_cleared(&mut self) {
        self.objects.clear();
    }

    fn on_preview_updated(&mut self, index: usize, points: &[Vec2]) {
        self.preview = Some(CurveObject::build(index, points, &self.style));
    }

    fn on_preview_cleared(&mut self) {
        self.preview = None;
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }
}
