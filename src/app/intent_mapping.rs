//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::PlannerOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LineDrawCommitted { start, end } => vec![AppCommand::CommitLine { start, end }],
        AppIntent::LineLengthSubmitted { line_id, input } => {
            vec![AppCommand::ChangeLineLength { line_id, input }]
        }
        AppIntent::LineWidthChangeRequested { line_id, width } => {
            vec![AppCommand::ChangeLineWidth { line_id, width }]
        }
        AppIntent::BandOrientationChangeRequested {
            line_id,
            orientation,
        } => vec![AppCommand::ChangeBandOrientation {
            line_id,
            orientation,
        }],
        AppIntent::LineRemoveRequested { line_id } => vec![AppCommand::RemoveLine { line_id }],
        AppIntent::AllocateAllRequested => vec![AppCommand::ReallocateAllLines],
        AppIntent::SnapToggleRequested => vec![AppCommand::ToggleSnapSize],
        AppIntent::DefaultBlockWidthChanged { width } => vec![AppCommand::SetDefaultBlockWidth {
            width: state.widths().clamp(width),
        }],
        AppIntent::LineAppearanceChanged { appearance } => {
            vec![AppCommand::SetLineAppearance { appearance }]
        }
        AppIntent::OptionsChanged { options } => with_reallocation(state, options),
        AppIntent::OptionsResetRequested => with_reallocation(state, PlannerOptions::default()),
        AppIntent::OptionsSaveRequested { path } => vec![AppCommand::SaveOptions { path }],
        AppIntent::NewDrawingRequested => vec![AppCommand::ClearDrawing],
        AppIntent::WarningDismissed => vec![AppCommand::DismissWarning],
    }
}

/// Neue Optionen ändern Katalog und Breiten: bestehende Linien neu belegen.
fn with_reallocation(state: &AppState, options: PlannerOptions) -> Vec<AppCommand> {
    let mut commands = vec![AppCommand::ApplyOptions { options }];
    if !state.lines.is_empty() {
        commands.push(AppCommand::ReallocateAllLines);
    }
    commands
}
