//! Terrain-Sketch.
//!
//! Headless Demo: ein Hin-und-Her-Sweep liefert Segment-Kennung und Cursor-x,
//! die Aufnahme wird per Toggle gestartet und an Segmentgrenzen abgeschlossen.

use glam::Vec2;
use terrain_sketch::{AppController, AppIntent, AppState, SegmentId, TerrainOptions};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Terrain-Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = TerrainOptions::config_path();
        let options = TerrainOptions::load_from_file(&config_path);

        let mut app = SketchApp::new(options);
        app.run_demo();

        log::info!(
            "Demo beendet: {} Kurve(n), {} Commands, {} Aufnahme-Übergänge",
            app.state.curve_count(),
            app.state.command_log.len(),
            app.state.command_log.recording_transitions()
        );
        let curves = app.state.curves.curves();
        for (object, curve) in app.state.scene().objects().iter().zip(curves) {
            let (min_x, max_x) = curve.x_range();
            log::info!(
                "{}: {} Punkte, x = {:.2}..{:.2}",
                object.name,
                curve.len(),
                min_x,
                max_x
            );
        }
        Ok(())
    }
}

/// Bewegt den Cursor zwischen zwei Endpunkten hin und her.
///
/// Jede abgeschlossene Strecke erhöht den Leg-Zähler, der als Segment-Kennung dient.
struct SweepDriver {
    left: f32,
    right: f32,
    speed: f32,
    x: f32,
    heading_right: bool,
    legs: SegmentId,
}

impl SweepDriver {
    const ARRIVAL_TOLERANCE: f32 = 0.01;

    fn new(left: f32, right: f32, seconds_per_sweep: f32) -> Self {
        let seconds_per_sweep = seconds_per_sweep.max(0.01);
        Self {
            left,
            right,
            speed: (right - left).abs() / seconds_per_sweep,
            x: left,
            heading_right: true,
            legs: 0,
        }
    }

    fn step(&mut self, dt: f32) {
        let target = if self.heading_right { self.right } else { self.left };
        let max_step = self.speed * dt;
        let delta = target - self.x;
        self.x = if delta.abs() <= max_step {
            target
        } else {
            self.x + max_step * delta.signum()
        };

        if (target - self.x).abs() < Self::ARRIVAL_TOLERANCE {
            self.heading_right = !self.heading_right;
            self.legs += 1;
        }
    }

    fn segment(&self) -> SegmentId {
        self.legs
    }
}

struct SketchApp {
    state: AppState,
    controller: AppController,
    sweep: SweepDriver,
    ticks: u32,
}

impl SketchApp {
    fn new(options: TerrainOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            sweep: SweepDriver::new(-8.0, 8.0, 4.0),
            ticks: 0,
        }
    }

    fn dt(&self) -> f32 {
        1.0 / self.state.options.fixed_tick_rate_hz
    }

    /// Zwei Gesten über den ersten Sweep, eine dritte bis zur Umkehr, dann Summe.
    fn run_demo(&mut self) {
        self.toggle();
        self.advance_seconds(1.5, |t| (t * 2.0).sin() * 1.5);
        self.toggle();

        self.advance_seconds(0.3, |_| 0.0);

        self.toggle();
        self.advance_seconds(1.5, |t| 0.8 * t - 1.0);
        self.toggle();

        // Läuft bis über die Umkehr: Segmentwechsel schließt die Geste ab
        self.toggle();
        self.advance_seconds(2.0, |t| (t * 3.0).cos());
        if self.state.is_recording() {
            self.toggle();
        }

        self.dispatch(AppIntent::SumCurvesRequested);
    }

    fn toggle(&mut self) {
        let segment_id = self.sweep.segment();
        self.dispatch(AppIntent::ToggleRecordingRequested { segment_id });
    }

    fn advance_seconds(&mut self, seconds: f32, height: impl Fn(f32) -> f32) {
        let dt = self.dt();
        let steps = (seconds / dt).round() as u32;
        for _ in 0..steps {
            self.sweep.step(dt);
            self.ticks += 1;
            let t = self.ticks as f32 * dt;
            let cursor = Vec2::new(self.sweep.x, height(t));
            let segment_id = self.sweep.segment();
            self.dispatch(AppIntent::FixedTick { cursor, segment_id });
        }
    }

    fn dispatch(&mut self, intent: AppIntent) {
        if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
            log::error!("Intent fehlgeschlagen: {:#}", e);
        }
    }
}
