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
            // === Linien ===
            AppCommand::CommitLine { start, end } => handlers::lines::commit(state, start, end),
            AppCommand::ChangeLineLength { line_id, input } => {
                handlers::lines::change_length(state, &line_id, &input)?
            }
            AppCommand::ChangeLineWidth { line_id, width } => {
                handlers::lines::change_width(state, &line_id, width)?
            }
            AppCommand::ChangeBandOrientation {
                line_id,
                orientation,
            } => handlers::lines::change_orientation(state, &line_id, orientation)?,
            AppCommand::RemoveLine { line_id } => handlers::lines::remove(state, &line_id),
            AppCommand::ReallocateAllLines => handlers::lines::reallocate_all(state),
            AppCommand::ClearDrawing => handlers::lines::clear_drawing(state),

            // === Einstellungen ===
            AppCommand::ToggleSnapSize => handlers::settings::toggle_snap_size(state),
            AppCommand::SetDefaultBlockWidth { width } => {
                handlers::settings::set_default_block_width(state, width)
            }
            AppCommand::SetLineAppearance { appearance } => {
                handlers::settings::set_line_appearance(state, appearance)
            }
            AppCommand::ApplyOptions { options } => {
                handlers::settings::apply_options(state, options)
            }
            AppCommand::SaveOptions { path } => handlers::settings::save_options(state, path)?,
            AppCommand::DismissWarning => handlers::settings::dismiss_warning(state),
        }

        Ok(())
    }
}
