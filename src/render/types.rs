//! Szene-Typen: ein Objekt pro Kurve (Streifen + begehbare Kante).

use crate::shared::{curve_color, TerrainOptions};
use glam::Vec2;

/// Darstellungs-Parameter, die für alle Kurven-Objekte gleich sind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    /// Streifenbreite in Welteinheiten
    pub line_width: f32,
    /// Begehbare Kante erzeugen
    pub add_collider: bool,
    /// Radius der begehbaren Kante
    pub collider_edge_radius: f32,
}

impl SceneStyle {
    /// Übernimmt die Darstellungs-Werte aus den Laufzeit-Optionen.
    pub fn from_options(options: &TerrainOptions) -> Self {
        Self {
            line_width: options.line_width,
            add_collider: options.add_collider,
            collider_edge_radius: options.collider_edge_radius,
        }
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self::from_options(&TerrainOptions::default())
    }
}

/// Begehbare Kante im lokalen Koordinatensystem des Objekts.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    /// Ursprung des Objekts in Weltkoordinaten (erster Kurvenpunkt)
    pub origin: Vec2,
    /// Kantenpunkte relativ zu `origin`
    pub local_points: Vec<Vec2>,
    /// Kantenradius
    pub radius: f32,
}

impl EdgeShape {
    /// Kantenpunkte zurück in Weltkoordinaten.
    pub fn world_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.local_points.iter().map(move |p| *p + self.origin)
    }
}

/// Objekt einer gespeicherten Kurve (oder der Live-Vorschau).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveObject {
    /// Objektname, z.B. `Curve_3`
    pub name: String,
    /// Anzeige-Index der Kurve
    pub index: usize,
    /// RGBA-Farbe aus dem Farbzyklus
    pub color: [f32; 4],
    /// Streifenbreite
    pub width: f32,
    /// Streifenpunkte in Weltkoordinaten
    pub strip: Vec<Vec2>,
    /// Begehbare Kante (nur wenn aktiviert)
    pub edge: Option<EdgeShape>,
}

impl CurveObject {
    /// Baut das Objekt für `points` mit Anzeige-Index `index`.
    pub fn build(index: usize, points: &[Vec2], style: &SceneStyle) -> Self {
        let edge = if style.add_collider {
            let origin = points.first().copied().unwrap_or(Vec2::ZERO);
            Some(EdgeShape {
                origin,
                local_points: points.iter().map(|p| *p - origin).collect(),
                radius: style.collider_edge_radius,
            })
        } else {
            None
        };

        Self {
            name: format!("Curve_{index}"),
            index,
            color: curve_color(index),
            width: style.line_width,
            strip: points.to_vec(),
            edge,
        }
    }
}
