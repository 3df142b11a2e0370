//! Handler für Raster, Standard-Breite, Darstellung und Optionen.

use std::path::PathBuf;

use crate::app::AppState;
use crate::core::LineAppearance;
use crate::shared::options::SECONDARY_SNAP_SIZE_MM;
use crate::shared::PlannerOptions;

/// Schaltet zwischen konfiguriertem und feinem Raster um.
pub fn toggle_snap_size(state: &mut AppState) {
    state.snap_size = if state.snap_size == state.options.snap_size_mm {
        SECONDARY_SNAP_SIZE_MM
    } else {
        state.options.snap_size_mm
    };
    log::info!("Raster: {} mm", state.snap_size);
}

/// Setzt die Breite für neue Linien, geklemmt auf die Breiten-Tabelle.
pub fn set_default_block_width(state: &mut AppState, width: u32) {
    let width = state.widths().clamp(width);
    state.default_block_width = width;
    state.status_message = Some(format!("Breite für neue Linien: {width} mm"));
    log::info!("Standard-Breite: {} mm", width);
}

/// Setzt Farbe und Stil für neue Linien.
pub fn set_line_appearance(state: &mut AppState, appearance: LineAppearance) {
    state.appearance = appearance;
    log::info!("Linien-Darstellung: {:?}", appearance);
}

/// Übernimmt neue Optionen (ohne Persistenz).
pub fn apply_options(state: &mut AppState, options: PlannerOptions) {
    state.set_options(options);
    log::info!("Optionen übernommen");
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save_options(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(PlannerOptions::config_path);
    state.options.save_to_file(&path)
}

/// Schließt die aktuelle Warnung.
pub fn dismiss_warning(state: &mut AppState) {
    state.warning = None;
}
