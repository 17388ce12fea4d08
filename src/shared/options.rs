//! Zentrale Konfiguration für die Kurven-Aufnahme.
//!
//! `TerrainOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Aufnahme ────────────────────────────────────────────────────────

/// Ziel-Samplerate während der Aufnahme (Punkte pro Sekunde).
pub const POINTS_PER_SECOND: f32 = 25.0;
/// Rate des externen Fixed-Ticks (Hz).
pub const FIXED_TICK_RATE_HZ: f32 = 50.0;

// ── Glättung ────────────────────────────────────────────────────────

/// Catmull-Rom-Zwischenpunkte pro Rohsegment.
pub const SMOOTH_SUBDIVISIONS: usize = 3;
/// Erlaubter Bereich für `smooth_subdivisions`.
pub const SMOOTH_SUBDIVISIONS_RANGE: std::ops::RangeInclusive<usize> = 1..=8;

// ── Summierung ──────────────────────────────────────────────────────

/// Toleranz, unterhalb der zwei x-Werte im Summen-Grid als gleich gelten.
pub const GRID_DEDUP_EPSILON: f32 = 1e-4;

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbton-Schritt pro Kurven-Index (4 Farben pro Zyklus).
pub const CURVE_HUE_STEP: f32 = 0.25;
/// Breite des gezeichneten Kurvenstreifens in Welteinheiten.
pub const LINE_WIDTH: f32 = 0.3;
/// Radius der begehbaren Kante in Welteinheiten.
pub const COLLIDER_EDGE_RADIUS: f32 = 0.05;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `terrain_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainOptions {
    /// Ziel-Samplerate während der Aufnahme
    pub points_per_second: f32,
    /// Rate des Fixed-Ticks, aus dem gesampelt wird
    pub fixed_tick_rate_hz: f32,
    /// Catmull-Rom-Glättung aktiv (sonst Rohpunkte)
    pub enable_smoothing: bool,
    /// Zwischenpunkte pro Rohsegment (1..=8)
    pub smooth_subdivisions: usize,
    /// Streifenbreite in Welteinheiten
    pub line_width: f32,
    /// Begehbare Kante pro Kurve erzeugen
    pub add_collider: bool,
    /// Radius der begehbaren Kante
    pub collider_edge_radius: f32,
}

impl Default for TerrainOptions {
    fn default() -> Self {
        Self {
            points_per_second: POINTS_PER_SECOND,
            fixed_tick_rate_hz: FIXED_TICK_RATE_HZ,
            enable_smoothing: true,
            smooth_subdivisions: SMOOTH_SUBDIVISIONS,
            line_width: LINE_WIDTH,
            add_collider: true,
            collider_edge_radius: COLLIDER_EDGE_RADIUS,
        }
    }
}

impl TerrainOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("terrain_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("terrain_sketch.toml")
    }

    /// Klemmt ungültige Werte in ihren erlaubten Bereich.
    pub fn validated(mut self) -> Self {
        self.smooth_subdivisions = self.smooth_subdivisions.clamp(
            *SMOOTH_SUBDIVISIONS_RANGE.start(),
            *SMOOTH_SUBDIVISIONS_RANGE.end(),
        );
        if self.points_per_second.is_nan() || self.points_per_second <= 0.0 {
            self.points_per_second = POINTS_PER_SECOND;
        }
        if self.fixed_tick_rate_hz.is_nan() || self.fixed_tick_rate_hz <= 0.0 {
            self.fixed_tick_rate_hz = FIXED_TICK_RATE_HZ;
        }
        self.line_width = self.line_width.max(0.0);
        self.collider_edge_radius = self.collider_edge_radius.max(0.0);
        self
    }

    /// Anzahl Fixed-Ticks pro aufgenommenem Punkt (mindestens 1).
    ///
    /// `max(1, round(fixed_tick_rate_hz / points_per_second))`
    pub fn frames_per_point(&self) -> u32 {
        let ratio = (self.fixed_tick_rate_hz / self.points_per_second).round();
        if ratio.is_finite() && ratio >= 1.0 {
            ratio as u32
        } else {
            1
        }
    }

    /// Effektive Glättung: `None` wenn deaktiviert.
    pub fn smoothing(&self) -> Option<usize> {
        self.enable_smoothing.then_some(self.smooth_subdivisions)
    }
}
