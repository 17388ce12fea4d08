//! Farbzyklus für gespeicherte Kurven.

use super::options::CURVE_HUE_STEP;

/// Wandelt HSV (alle Komponenten in [0, 1]) in RGBA mit Alpha 1 um.
pub fn hsv_to_rgba(h: f32, s: f32, v: f32) -> [f32; 4] {
    let h6 = h.rem_euclid(1.0) * 6.0;
    // rem_euclid kann auf 1.0 runden; 6.0 ist wieder Rot
    let h6 = if h6 >= 6.0 { 0.0 } else { h6 };
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [r, g, b, 1.0]
}

/// Farbton einer Kurve mit Anzeige-Index `index`.
pub fn curve_hue(index: usize) -> f32 {
    (index as f32 * CURVE_HUE_STEP).rem_euclid(1.0)
}

/// Deterministische Farbe einer Kurve: `hsv((index * 0.25) mod 1, 1, 1)`.
pub fn curve_color(index: usize) -> [f32; 4] {
    hsv_to_rgba(curve_hue(index), 1.0, 1.0)
}
