//! Application State: zentrale Datenhaltung.

use super::recording::{RecordingSession, RecordingState};
use super::CommandLog;
use crate::core::CurveStore;
use crate::render::{CurveScene, SceneStyle};
use crate::shared::TerrainOptions;
use glam::Vec2;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aufnahme der aktuell gezeichneten Kurve
    pub session: RecordingSession,
    /// Alle fertigen Kurven samt Szene-Objekten
    pub curves: CurveStore<CurveScene>,
    /// Laufzeit-Optionen (Sampling, Glättung, Darstellung)
    pub options: TerrainOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(TerrainOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: TerrainOptions) -> Self {
        let options = options.validated();
        Self {
            session: RecordingSession::from_options(&options),
            curves: CurveStore::new(CurveScene::new(SceneStyle::from_options(&options))),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt zurück, ob gerade eine Geste aufgenommen wird
    pub fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    /// Zustand der Aufnahme-Session
    pub fn recording_state(&self) -> RecordingState {
        self.session.state()
    }

    /// Anzahl fertiger Kurven (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Live-Vorschau der laufenden Geste (leer im Leerlauf)
    pub fn preview(&self) -> &[Vec2] {
        self.session.preview()
    }

    /// Szene mit allen Kurven-Objekten
    pub fn scene(&self) -> &CurveScene {
        self.curves.sink()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
