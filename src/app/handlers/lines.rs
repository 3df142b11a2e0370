//! Handler für Zeichnen und Bearbeiten von Linien.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::BandOrientation;

fn ensure_line(state: &AppState, line_id: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        state.lines.contains_key(line_id),
        "Linie {line_id} nicht gefunden"
    );
    Ok(())
}

/// Übernimmt eine gezeichnete Linie.
pub fn commit(state: &mut AppState, start: DVec2, end: DVec2) {
    use_cases::drawing::commit_line(state, start, end);
}

/// Ändert die Länge einer Linie aus Rohtext.
pub fn change_length(state: &mut AppState, line_id: &str, input: &str) -> anyhow::Result<()> {
    ensure_line(state, line_id)?;
    use_cases::line_edit::change_line_length(state, line_id, input);
    Ok(())
}

/// Ändert die Block-Breite einer Linie.
pub fn change_width(state: &mut AppState, line_id: &str, width: u32) -> anyhow::Result<()> {
    ensure_line(state, line_id)?;
    use_cases::line_edit::change_line_width(state, line_id, width);
    Ok(())
}

/// Ändert die Band-Seite einer Linie.
pub fn change_orientation(
    state: &mut AppState,
    line_id: &str,
    orientation: BandOrientation,
) -> anyhow::Result<()> {
    ensure_line(state, line_id)?;
    use_cases::line_edit::change_band_orientation(state, line_id, orientation);
    Ok(())
}

/// Entfernt eine Linie.
pub fn remove(state: &mut AppState, line_id: &str) {
    use_cases::line_edit::remove_line(state, line_id);
}

/// Belegt alle Linien neu.
pub fn reallocate_all(state: &mut AppState) {
    use_cases::line_edit::reallocate_all_lines(state);
}

/// Verwirft alle Linien und abgeleiteten Entitäten.
pub fn clear_drawing(state: &mut AppState) {
    state.lines.clear();
    state.derived.clear();
    state.warning = None;
    state.status_message = Some("Neue Zeichnung begonnen".to_string());
    log::info!("Zeichnung zurückgesetzt");
}
