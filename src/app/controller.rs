//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Aufnahme ===
            AppCommand::StartRecording { segment_id } => {
                handlers::recording::start(state, segment_id)
            }
            AppCommand::FinalizeRecording => handlers::recording::finalize(state),
            AppCommand::CancelRecording => handlers::recording::cancel(state),
            AppCommand::ObserveSegment { segment_id } => {
                handlers::recording::observe_segment(state, segment_id)
            }
            AppCommand::SampleTick { cursor } => handlers::recording::sample_tick(state, cursor),

            // === Kurven-Store ===
            AppCommand::RemoveLastCurve => handlers::curves::remove_last(state),
            AppCommand::ClearCurves => handlers::curves::clear(state),
            AppCommand::SumCurves => handlers::curves::sum(state),
            AppCommand::RegenerateVisuals => handlers::curves::regenerate(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }
}
