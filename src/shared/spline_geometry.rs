//! Reine Geometrie-Funktionen: Catmull-Rom-Glättung und lineares Sampling.
//!
//! Layer-neutral: wird von `app` (Aufnahme, Summierung) und `render` genutzt,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;
use std::iter::FusedIterator;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Lazy Catmull-Rom-Glättung über einer geordneten Punktfolge.
///
/// Zwischen je zwei Rohpunkten werden `subdivisions` Zwischenpunkte eingefügt
/// (t = j / (k + 1), j = 1..=k). Rohpunkte selbst werden exakt übernommen,
/// jeder genau einmal. Am Rand dient der Randpunkt als sein eigener Nachbar.
///
/// Der Iterator ist endlich und per `Clone` neu startbar.
#[derive(Debug, Clone)]
pub struct CatmullRomSmooth<'a> {
    points: &'a [Vec2],
    subdivisions: usize,
    /// Aktuelles Segment (p1 = points[segment])
    segment: usize,
    /// Schritt im Segment: 0 = p1 selbst, 1..=k = Zwischenpunkte
    step: usize,
    /// Bei weniger als 2 Punkten: Identität
    passthrough: bool,
}

impl<'a> CatmullRomSmooth<'a> {
    fn remaining(&self) -> usize {
        let n = self.points.len();
        if self.passthrough {
            return n - self.segment;
        }
        if self.segment >= n {
            return 0;
        }
        if self.segment == n - 1 {
            return 1;
        }
        let per_segment = self.subdivisions + 1;
        (n - 1 - self.segment) * per_segment - self.step + 1
    }
}

impl Iterator for CatmullRomSmooth<'_> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        let n = self.points.len();
        if self.segment >= n {
            return None;
        }
        if self.passthrough || self.segment == n - 1 {
            let p = self.points[self.segment];
            self.segment += 1;
            return Some(p);
        }

        let i = self.segment;
        let p1 = self.points[i];
        let out = if self.step == 0 {
            p1
        } else {
            let p0 = if i == 0 { p1 } else { self.points[i - 1] };
            let p2 = self.points[i + 1];
            let p3 = self.points.get(i + 2).copied().unwrap_or(p2);
            let t = self.step as f32 / (self.subdivisions + 1) as f32;
            catmull_rom_point(p0, p1, p2, p3, t)
        };

        self.step += 1;
        if self.step > self.subdivisions {
            self.step = 0;
            self.segment += 1;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CatmullRomSmooth<'_> {}
impl FusedIterator for CatmullRomSmooth<'_> {}

/// Glättet `points` per Catmull-Rom mit `subdivisions` Zwischenpunkten je Segment.
///
/// Ausgabelänge: `(n - 1) * (subdivisions + 1) + 1` für n ≥ 2.
/// Für n < 2 wird die Eingabe unverändert geliefert.
pub fn smooth_catmull_rom(points: &[Vec2], subdivisions: usize) -> CatmullRomSmooth<'_> {
    CatmullRomSmooth {
        points,
        subdivisions,
        segment: 0,
        step: 0,
        passthrough: points.len() < 2,
    }
}

/// Erwartete Länge der geglätteten Folge für `n` Rohpunkte.
pub fn smoothed_len(n: usize, subdivisions: usize) -> usize {
    if n < 2 {
        n
    } else {
        (n - 1) * (subdivisions + 1) + 1
    }
}

/// Prüft ob die Punkte aufsteigend nach x sortiert sind.
pub fn is_sorted_by_x(points: &[Vec2]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}

/// Liefert den y-Wert der Polyline an Position `x` (stückweise linear).
///
/// Unsortierte Eingaben werden **in-place** nach x sortiert, bevor gesucht wird.
/// Außerhalb des x-Bereichs wird auf den y-Wert des nächsten Endpunkts geklemmt.
/// Leere Eingabe liefert 0.
pub fn sample_linear(points: &mut [Vec2], x: f32) -> f32 {
    if points.is_empty() {
        return 0.0;
    }
    if !is_sorted_by_x(points) {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    let first = points[0];
    let last = points[points.len() - 1];
    if x <= first.x {
        return first.y;
    }
    if x >= last.x {
        return last.y;
    }

    // Lineare Suche reicht für die erwarteten Punktzahlen
    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        if x >= a.x && x <= b.x {
            let dx = b.x - a.x;
            if dx <= f32::EPSILON {
                return a.y;
            }
            let t = (x - a.x) / dx;
            return a.y + (b.y - a.y) * t;
        }
    }
    last.y
}
