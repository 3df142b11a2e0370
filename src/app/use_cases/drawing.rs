//! Use-Case: gezeichnete Linie übernehmen.

use glam::DVec2;

use crate::app::state::{AppState, EditorWarning};
use crate::core::{calculate_line_length, validate_line_length_value, ScaffoldLine};
use crate::shared::snap_point_to_grid;

use super::band_update::update_line_band;

/// Präfix für neue Linien-IDs.
pub const LINE_ID_PREFIX: &str = "line";

/// Rastert beide Endpunkte, prüft die Länge und legt die Linie samt Band an.
///
/// Gibt die ID der neuen Linie zurück. Eine ungültige Länge verwirft die
/// Linie und hinterlässt eine Eingabe-Warnung.
pub fn commit_line(state: &mut AppState, start: DVec2, end: DVec2) -> Option<String> {
    let start = snap_point_to_grid(start, state.snap_size);
    let end = snap_point_to_grid(end, state.snap_size);
    let length = calculate_line_length(start, end).round();

    if let Err(err) = validate_line_length_value(&length.to_string(), state.snap_size) {
        log::warn!("Linie verworfen ({} mm): {}", length, err);
        state.status_message = Some(err.to_string());
        state.warning = Some(EditorWarning::input(None, err.to_string()));
        return None;
    }

    let id = state.id_source.next_id(LINE_ID_PREFIX);
    let line = ScaffoldLine::new(id.clone(), start, end)
        .with_appearance(state.appearance)
        .with_block_width(state.default_block_width);

    state.status_message = Some(match update_line_band(state, &line) {
        Ok(summary) => {
            log::info!("Linie {} angelegt ({} mm)", id, length);
            format!("Linie {id} mit Innenband angelegt ({length} mm): {summary}")
        }
        Err(_) => format!("Linie {id} angelegt, Innenband konnte nicht erzeugt werden"),
    });
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ids::SequentialLineIds;
    use crate::core::{LengthInputError, LineOrientation};

    fn state() -> AppState {
        AppState::new().with_id_source(SequentialLineIds::new())
    }

    #[test]
    fn test_commit_snaps_and_allocates() {
        let mut state = state();
        let id = commit_line(&mut state, DVec2::new(10.0, -20.0), DVec2::new(3590.0, 40.0));

        assert_eq!(id.as_deref(), Some("line-1"));
        let line = state.line("line-1").expect("Linie erwartet");
        assert_eq!(line.start, DVec2::new(0.0, 0.0));
        assert_eq!(line.end, DVec2::new(3600.0, 0.0));
        assert_eq!(line.orientation, LineOrientation::Horizontal);
        assert_eq!(line.block_width, Some(600));
        assert_eq!(state.derived.blocks().count(), 2);
        assert!(state.warning.is_none());
    }

    #[test]
    fn test_commit_rejects_too_short_line() {
        let mut state = state();
        let id = commit_line(&mut state, DVec2::ZERO, DVec2::new(100.0, 0.0));

        assert!(id.is_none());
        assert!(state.lines.is_empty());
        assert_eq!(
            state.warning,
            Some(EditorWarning::input(
                None,
                LengthInputError::NotPositive.to_string()
            ))
        );
    }
}
