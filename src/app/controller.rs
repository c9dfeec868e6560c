//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
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
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddAnchor { curve, position } => {
                handlers::editing::add_anchor(state, curve, position)
            }
            AppCommand::DeleteAnchor { curve, index } => {
                handlers::editing::delete_anchor(state, curve, index)
            }
            AppCommand::SelectCurve { index } => handlers::editing::select_curve(state, index),
            AppCommand::SetEditMode { enabled } => handlers::editing::set_edit_mode(state, enabled),
            AppCommand::ApplyCurveSettings { curve, settings } => {
                handlers::editing::apply_curve_settings(state, curve, settings)
            }
            AppCommand::ClearCurve { curve } => handlers::editing::clear_curve(state, curve),

            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadCurves { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveCurves { path } => handlers::file_io::save(state, path)?,

            // === Anwendungssteuerung ===
            AppCommand::ShowAbout => handlers::dialog::show_about(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
