//! State-Definitionen und Übergänge der Aufnahme-Session.

use crate::core::{Curve, CurveSink, CurveStore};
use crate::shared::spline_geometry::smooth_catmull_rom;
use crate::shared::TerrainOptions;
use glam::Vec2;

/// Kennung eines Segments (eine Strecke der Hin-und-her-Bewegung).
pub type SegmentId = u64;

/// Öffentlich sichtbarer Zustand der Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    /// Keine Aufnahme aktiv
    #[default]
    Idle,
    /// Samples werden gesammelt
    Recording,
}

/// Ergebnis eines Aufnahme-Abschlusses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Kurve wurde mit diesem Anzeige-Index gespeichert
    Stored { index: usize },
    /// Zu wenige Samples, nichts gespeichert
    Discarded,
    /// Es lief keine Aufnahme
    NotRecording,
}

/// Daten der laufenden Geste (nur im Zustand `Recording` vorhanden).
#[derive(Debug, Clone)]
struct ActiveGesture {
    /// Segment beim Start der Aufnahme
    start_segment: SegmentId,
    /// Rohsamples in Aufnahme-Reihenfolge
    raw: Vec<Vec2>,
    /// Aus `raw` abgeleitete Vorschau
    preview: Vec<Vec2>,
    /// Fixed-Ticks seit Start (für die Sample-Drosselung)
    ticks: u64,
}

/// Sammelt Rohsamples der aktuellen Geste und übergibt sie fertig geglättet an den Store.
#[derive(Debug, Clone, Default)]
pub struct RecordingSession {
    active: Option<ActiveGesture>,
    /// Catmull-Rom-Unterteilungen; `None` = Rohpunkte übernehmen
    smoothing: Option<usize>,
}

impl RecordingSession {
    /// Erstellt eine Session im Zustand `Idle`.
    pub fn new(smoothing: Option<usize>) -> Self {
        Self {
            active: None,
            smoothing,
        }
    }

    /// Erstellt eine Session mit der Glättung aus den Optionen.
    pub fn from_options(options: &TerrainOptions) -> Self {
        Self::new(options.smoothing())
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> RecordingState {
        if self.active.is_some() {
            RecordingState::Recording
        } else {
            RecordingState::Idle
        }
    }

    /// Gibt `true` zurück, solange eine Geste aufgenommen wird.
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// Segment, in dem die laufende Aufnahme begann.
    pub fn start_segment(&self) -> Option<SegmentId> {
        self.active.as_ref().map(|g| g.start_segment)
    }

    /// Rohsamples der laufenden Geste (leer wenn `Idle`).
    pub fn raw_samples(&self) -> &[Vec2] {
        self.active.as_ref().map(|g| g.raw.as_slice()).unwrap_or(&[])
    }

    /// Geglättete Vorschau der laufenden Geste (leer wenn `Idle`).
    pub fn preview(&self) -> &[Vec2] {
        self.active.as_ref().map(|g| g.preview.as_slice()).unwrap_or(&[])
    }

    /// Aktuelle Glättungs-Einstellung.
    pub fn smoothing(&self) -> Option<usize> {
        self.smoothing
    }

    /// Ändert die Glättung; eine laufende Vorschau wird neu berechnet.
    pub fn set_smoothing(&mut self, smoothing: Option<usize>) {
        self.smoothing = smoothing;
        if let Some(gesture) = self.active.as_mut() {
            gesture.preview = project(&gesture.raw, smoothing);
        }
    }

    /// Startet eine neue Aufnahme. Nur aus `Idle` gültig.
    pub fn start(&mut self, segment_id: SegmentId) -> bool {
        if self.active.is_some() {
            log::warn!("Aufnahme-Start ignoriert: Aufnahme läuft bereits");
            return false;
        }
        self.active = Some(ActiveGesture {
            start_segment: segment_id,
            raw: Vec::new(),
            preview: Vec::new(),
            ticks: 0,
        });
        log::debug!("Aufnahme gestartet in Segment {}", segment_id);
        true
    }

    /// Zählt einen Fixed-Tick und meldet, ob in diesem Tick gesampelt wird.
    ///
    /// Der erste Tick nach `start()` sampelt immer, danach jeder
    /// `frames_per_point`-te.
    pub fn advance_tick(&mut self, frames_per_point: u32) -> bool {
        let Some(gesture) = self.active.as_mut() else {
            return false;
        };
        let due = gesture.ticks % u64::from(frames_per_point.max(1)) == 0;
        gesture.ticks += 1;
        due
    }

    /// Hängt ein Rohsample an und reicht die neu berechnete Vorschau an den Store weiter.
    pub fn add_sample<S: CurveSink>(&mut self, point: Vec2, store: &mut CurveStore<S>) -> bool {
        let Some(gesture) = self.active.as_mut() else {
            log::warn!("Sample ignoriert: keine Aufnahme aktiv");
            return false;
        };
        if !point.is_finite() {
            log::warn!("Nicht-endliches Sample ignoriert: {:?}", point);
            return false;
        }
        gesture.raw.push(point);
        gesture.preview = project(&gesture.raw, self.smoothing);
        store.show_preview(&gesture.preview);
        true
    }

    /// Schließt die Aufnahme ab und übergibt die Kurve an den Store.
    ///
    /// Gesten mit weniger als zwei Samples werden stillschweigend verworfen.
    pub fn finalize<S: CurveSink>(&mut self, store: &mut CurveStore<S>) -> GestureOutcome {
        let Some(gesture) = self.active.take() else {
            log::warn!("Finalisieren ignoriert: keine Aufnahme aktiv");
            return GestureOutcome::NotRecording;
        };
        store.clear_preview();

        match Curve::from_points(project(&gesture.raw, self.smoothing)) {
            Some(curve) => {
                let points = curve.len();
                let index = store.append(curve);
                log::debug!(
                    "Kurve {} übergeben ({} Rohsamples, {} Punkte)",
                    index,
                    gesture.raw.len(),
                    points
                );
                GestureOutcome::Stored { index }
            }
            None => {
                log::debug!("Geste mit {} Sample(s) verworfen", gesture.raw.len());
                GestureOutcome::Discarded
            }
        }
    }

    /// Prüft pro Tick, ob der Segment-Treiber in ein neues Segment gewechselt ist.
    ///
    /// Bei einem Wechsel wird finalisiert; die Session bleibt danach `Idle`.
    /// Gibt das Ergebnis zurück, falls finalisiert wurde.
    pub fn observe_segment<S: CurveSink>(
        &mut self,
        segment_id: SegmentId,
        store: &mut CurveStore<S>,
    ) -> Option<GestureOutcome> {
        let start = self.start_segment()?;
        if segment_id == start {
            return None;
        }
        log::debug!(
            "Segmentwechsel {} → {}: Aufnahme wird abgeschlossen",
            start,
            segment_id
        );
        Some(self.finalize(store))
    }

    /// Bricht die Aufnahme ohne Kurve ab.
    pub fn cancel<S: CurveSink>(&mut self, store: &mut CurveStore<S>) -> bool {
        if self.active.take().is_none() {
            log::warn!("Abbruch ignoriert: keine Aufnahme aktiv");
            return false;
        }
        store.clear_preview();
        log::debug!("Aufnahme abgebrochen");
        true
    }
}

/// Projiziert Rohsamples auf die Ausgabe-Punktfolge (geglättet oder roh).
fn project(raw: &[Vec2], smoothing: Option<usize>) -> Vec<Vec2> {
    match smoothing {
        Some(subdivisions) => smooth_catmull_rom(raw, subdivisions).collect(),
        None => raw.to_vec(),
    }
}
