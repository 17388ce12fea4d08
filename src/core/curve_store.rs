//! Geordnete Sammlung fertiger Kurven mit Undo und Farb-Index-Vergabe.

use super::{Curve, CurveSink};
use glam::Vec2;

/// Speicher aller fertigen Kurven.
///
/// Reihenfolge = Anzeige-Reihenfolge = Farbzyklus-Reihenfolge.
/// Jede Mutation benachrichtigt den `CurveSink` synchron, sodass Liste und
/// Kollaborateur-Objekte nie auseinanderlaufen.
pub struct CurveStore<S: CurveSink> {
    curves: Vec<Curve>,
    /// Nächster zu vergebender Anzeige-Index (bestimmt die Farbe)
    next_index: usize,
    sink: S,
}

impl<S: CurveSink> CurveStore<S> {
    /// Erstellt einen leeren Store mit dem gegebenen Kollaborateur.
    pub fn new(sink: S) -> Self {
        Self {
            curves: Vec::new(),
            next_index: 0,
            sink,
        }
    }

    /// Hängt eine Kurve an und gibt den vergebenen Anzeige-Index zurück.
    pub fn append(&mut self, curve: Curve) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        self.sink.on_curve_added(index, &curve);
        self.curves.push(curve);
        self.debug_check_sync();
        index
    }

    /// Entfernt die zuletzt angehängte Kurve. No-op bei leerem Store.
    ///
    /// Der Index-Zähler fällt auf die neue Anzahl zurück, damit die nächste
    /// Kurve den freigewordenen Farbplatz wiederverwendet.
    pub fn remove_last(&mut self) -> Option<Curve> {
        let removed = self.curves.pop()?;
        let index = self.curves.len();
        self.sink.on_curve_removed(index);
        self.next_index = self.curves.len();
        self.debug_check_sync();
        Some(removed)
    }

    /// Entfernt alle Kurven und setzt den Index-Zähler auf 0.
    pub fn clear(&mut self) {
        self.curves.clear();
        self.next_index = 0;
        self.sink.on_all_cleared();
        self.debug_check_sync();
    }

    /// Ersetzt den gesamten Inhalt; Indizes werden ab 0 neu vergeben.
    pub(crate) fn replace_all(&mut self, curves: Vec<Curve>) {
        self.curves = curves;
        self.next_index = self.curves.len();
        self.sink.on_all_replaced(&self.curves);
        self.debug_check_sync();
    }

    /// Baut alle Kollaborateur-Objekte neu auf, ohne die Kurven zu ändern.
    pub fn regenerate_visuals(&mut self) {
        self.next_index = self.curves.len();
        self.sink.on_all_replaced(&self.curves);
        self.debug_check_sync();
    }

    /// Reicht die Live-Vorschau der laufenden Aufnahme an den Kollaborateur weiter.
    pub fn show_preview(&mut self, points: &[Vec2]) {
        self.sink.on_preview_updated(self.next_index, points);
    }

    /// Verwirft die Live-Vorschau.
    pub fn clear_preview(&mut self) {
        self.sink.on_preview_cleared();
    }

    /// Read-only Snapshot aller Kurven.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Anzahl gespeicherter Kurven.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Gibt `true` zurück, wenn keine Kurven gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Index, den die nächste angehängte Kurve erhält.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Read-only Zugriff auf den Kollaborateur.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutabler Zugriff für Einstellungen, die keine Objekte anlegen oder entfernen.
    pub(crate) fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn debug_check_sync(&self) {
        debug_assert_eq!(
            self.sink.object_count(),
            self.curves.len(),
            "CurveSink-Objekte und Kurven-Liste laufen auseinander"
        );
    }
}
