use crate::app::recording::SegmentId;
use crate::shared::TerrainOptions;

/// Eingaben aus Host/Input-Schicht ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Aufnahme-Taste: startet im Leerlauf, schließt eine laufende Aufnahme ab
    ToggleRecordingRequested { segment_id: SegmentId },
    /// Laufende Aufnahme ohne Kurve verwerfen
    CancelRecordingRequested,
    /// Fester Sampling-Tick mit aktueller Cursor-Position und Segment-Kennung
    FixedTick {
        cursor: glam::Vec2,
        segment_id: SegmentId,
    },
    /// Letzte Kurve entfernen (bzw. laufende Geste verwerfen)
    UndoRequested,
    /// Alle Kurven entfernen
    ClearCurvesRequested,
    /// Alle Kurven zu einer Summenkurve zusammenfassen
    SumCurvesRequested,
    /// Kollaborateur-Objekte neu aufbauen (z.B. nach Neuladen der Szene)
    RegenerateVisualsRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: TerrainOptions },
    /// Optionen speichern
    SaveOptionsRequested { path: std::path::PathBuf },
}
