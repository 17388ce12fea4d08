//! Use-Case: Alle gespeicherten Kurven zu einer Summenkurve zusammenfassen.
//!
//! 1. Gemeinsames x-Grid aus allen Kurvenpunkten (sortiert, dedupliziert).
//! 2. Jede Kurve wird stückweise linear an jedem Grid-x gesampelt.
//! 3. Die Summe ersetzt den gesamten Store-Inhalt.

use crate::core::{Curve, CurveSink, CurveStore};
use crate::shared::spline_geometry::sample_linear;
use crate::shared::GRID_DEDUP_EPSILON;
use glam::Vec2;

/// Baut das gemeinsame x-Grid aller Kurven.
///
/// Sortiert alle x-Werte aufsteigend und verwirft Werte, die höchstens
/// `epsilon` über dem zuletzt übernommenen liegen (der erste einer Folge bleibt).
pub fn build_unified_grid(curves: &[Curve], epsilon: f32) -> Vec<f32> {
    let mut xs: Vec<f32> = curves
        .iter()
        .flat_map(|c| c.points().iter().map(|p| p.x))
        .collect();
    xs.sort_by(f32::total_cmp);

    let mut grid: Vec<f32> = Vec::with_capacity(xs.len());
    for x in xs {
        match grid.last() {
            Some(&prev) if (x - prev).abs() <= epsilon => {}
            _ => grid.push(x),
        }
    }
    grid
}

/// Summiert alle Kurven auf dem gemeinsamen Grid.
///
/// `None` bei weniger als zwei Kurven oder wenn das Grid zu einem einzigen
/// x-Wert zusammenfällt.
pub fn sum_curves(curves: &[Curve]) -> Option<Curve> {
    if curves.len() < 2 {
        return None;
    }

    let grid = build_unified_grid(curves, GRID_DEDUP_EPSILON);

    // Arbeitskopien: sample_linear sortiert unsortierte Kurven in-place
    let mut working: Vec<Vec<Vec2>> = curves.iter().map(|c| c.points().to_vec()).collect();

    let summed: Vec<Vec2> = grid
        .iter()
        .map(|&x| {
            let y = working
                .iter_mut()
                .map(|points| sample_linear(points, x))
                .sum();
            Vec2::new(x, y)
        })
        .collect();

    Curve::from_points(summed)
}

/// Ersetzt den Store-Inhalt durch die Summe aller Kurven.
///
/// No-op bei weniger als zwei Kurven. Gibt `true` zurück, wenn ersetzt wurde.
pub fn sum_all<S: CurveSink>(store: &mut CurveStore<S>) -> bool {
    if store.len() < 2 {
        log::debug!("Summieren: nichts zu tun ({} Kurve(n))", store.len());
        return false;
    }

    let source_count = store.len();
    let Some(summed) = sum_curves(store.curves()) else {
        log::debug!("Summieren: Grid zu klein, Store bleibt unverändert");
        return false;
    };

    log::info!(
        "{} Kurven zu einer Summenkurve mit {} Punkten zusammengefasst",
        source_count,
        summed.len()
    );
    store.replace_all(vec![summed]);
    true
}
