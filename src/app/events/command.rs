use crate::app::recording::SegmentId;
use crate::shared::TerrainOptions;

/// Mutierende Commands, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Aufnahme im angegebenen Segment starten
    StartRecording { segment_id: SegmentId },
    /// Laufende Aufnahme abschließen
    FinalizeRecording,
    /// Laufende Aufnahme verwerfen
    CancelRecording,
    /// Segment-Kennung des aktuellen Ticks prüfen (Wechsel → Abschluss)
    ObserveSegment { segment_id: SegmentId },
    /// Gedrosseltes Sampling der Cursor-Position
    SampleTick { cursor: glam::Vec2 },
    /// Letzte Kurve entfernen
    RemoveLastCurve,
    /// Alle Kurven entfernen
    ClearCurves,
    /// Alle Kurven summieren
    SumCurves,
    /// Kollaborateur-Objekte neu aufbauen
    RegenerateVisuals,
    /// Neue Optionen anwenden
    ApplyOptions { options: TerrainOptions },
    /// Optionen als TOML speichern
    SaveOptions { path: std::path::PathBuf },
}
