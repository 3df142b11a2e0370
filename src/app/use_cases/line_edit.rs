//! Use-Cases zum Bearbeiten bestehender Linien: Länge, Breite, Band-Seite,
//! Entfernen und Sammelbelegung.
//!
//! Jede erfolgreiche Änderung erzeugt den abgeleiteten Satz der Linie neu.

use crate::app::state::{AppState, EditorWarning};
use crate::core::{
    recalculate_line_with_length, validate_line_length_value, BandOrientation, BandSettings,
    FailureReason, LineFailure, ScaffoldLine,
};
use crate::engine::resolve_offset;

use super::band_update::{apply_band_update, generate_band_for_line, update_line_band};

fn find_line(state: &mut AppState, line_id: &str) -> Option<ScaffoldLine> {
    let line = state.line(line_id).cloned();
    if line.is_none() {
        log::warn!("Linie {} existiert nicht", line_id);
        state.warning = Some(EditorWarning::input(Some(line_id), "Linie nicht gefunden"));
    }
    line
}

fn reject(state: &mut AppState, line_id: &str, message: String) -> bool {
    log::warn!("Linie {}: {}", line_id, message);
    state.status_message = Some(message.clone());
    state.warning = Some(EditorWarning::input(Some(line_id), message));
    false
}

/// Validiert `input` als neue Länge und skaliert die Linie um ihren Mittelpunkt.
pub fn change_line_length(state: &mut AppState, line_id: &str, input: &str) -> bool {
    let Some(line) = find_line(state, line_id) else {
        return false;
    };

    let length = match validate_line_length_value(input, state.snap_size) {
        Ok(length) => length,
        Err(err) => return reject(state, line_id, err.to_string()),
    };

    let recalculated =
        match recalculate_line_with_length(&line, f64::from(length), state.snap_size) {
            Ok(recalculated) => recalculated,
            Err(err) => return reject(state, line_id, err.to_string()),
        };

    match update_line_band(state, &recalculated) {
        Ok(summary) => {
            state.status_message = Some(format!(
                "Länge von Linie {line_id} auf {length} mm geändert: {summary}"
            ));
            true
        }
        Err(failure) => {
            state.status_message = Some(failure.to_string());
            false
        }
    }
}

/// Setzt die Block-Breite, sofern die Linie die Mindestlänge `Breite + 150` erfüllt.
pub fn change_line_width(state: &mut AppState, line_id: &str, width: u32) -> bool {
    let Some(line) = find_line(state, line_id) else {
        return false;
    };

    let widths = state.widths();
    let check = if widths.is_supported(width) {
        widths.check(&line, width)
    } else {
        Err(LineFailure::new(line_id, FailureReason::InvalidWidth))
    };
    if let Err(failure) = check {
        let minimum = state.widths().minimum_length_for(width);
        log::warn!("{} (Mindestlänge {} mm)", failure, minimum);
        state.status_message = Some(format!(
            "Linie {line_id} erfüllt die Mindestlänge {minimum} mm für {width} mm Breite nicht"
        ));
        state.warning = Some(EditorWarning::Line(failure));
        return false;
    }

    match update_line_band(state, &line.with_block_width(width)) {
        Ok(_) => {
            state.status_message = Some(format!("Breite von Linie {line_id}: {width} mm"));
            true
        }
        Err(failure) => {
            state.status_message = Some(failure.to_string());
            false
        }
    }
}

/// Übernimmt eine neue Band-Seite; die Polarität wird daraus neu abgeleitet.
///
/// Ohne Änderung von Seite und Polarität bleibt der Satz unangetastet.
pub fn change_band_orientation(
    state: &mut AppState,
    line_id: &str,
    orientation: BandOrientation,
) -> bool {
    let Some(line) = find_line(state, line_id) else {
        return false;
    };

    let current = line.band_settings.unwrap_or_default();
    let current_polarity = current.polarity.unwrap_or_default();
    let requested = BandSettings {
        polarity: Some(current_polarity),
        orientation: Some(orientation),
    };
    let width = f64::from(state.allocator.width_for(&line));
    let desired = match resolve_offset(&line, width, Some(&requested)) {
        Ok(resolved) => resolved,
        Err(err) => {
            let failure = LineFailure::new(line_id, FailureReason::from(&err));
            log::warn!("{}", failure);
            state.warning = Some(EditorWarning::Line(failure));
            return false;
        }
    };

    let message = format!("Innenband von Linie {line_id}: Seite {orientation:?}");
    if desired.polarity == current_polarity && current.orientation == Some(orientation) {
        log::debug!("Linie {}: Band-Seite unverändert", line_id);
        state.warning = None;
        state.status_message = Some(message);
        return true;
    }

    let updated = line.with_band_settings(BandSettings {
        polarity: Some(desired.polarity),
        orientation: Some(orientation),
    });
    let generated = update_line_band(state, &updated).is_ok();
    if generated {
        state.status_message = Some(message);
    }
    generated
}

/// Entfernt eine Linie samt aller generierten Entitäten.
pub fn remove_line(state: &mut AppState, line_id: &str) -> bool {
    if state.lines.shift_remove(line_id).is_none() {
        log::debug!("Linie {} bereits entfernt", line_id);
        return false;
    }
    state.derived.clear_line(line_id);
    if state
        .warning
        .as_ref()
        .is_some_and(|w| w.line_id() == Some(line_id))
    {
        state.warning = None;
    }
    log::info!("Linie {} entfernt", line_id);
    true
}

/// Belegt alle Linien neu und sammelt die Fehlschläge.
pub fn reallocate_all_lines(state: &mut AppState) -> Vec<LineFailure> {
    if state.lines.is_empty() {
        let message = "Keine Linien zum Belegen vorhanden";
        log::warn!("{}", message);
        state.status_message = Some(message.to_string());
        state.warning = Some(EditorWarning::input(None, message));
        return Vec::new();
    }

    let snapshot: Vec<ScaffoldLine> = state.lines.values().cloned().collect();
    let mut failures = Vec::new();
    let mut summaries = Vec::new();
    for line in &snapshot {
        let outcome = generate_band_for_line(line, &state.allocator);
        match apply_band_update(state, outcome, false) {
            Ok(summary) => summaries.push(format!("{}: {}", line.id, summary)),
            Err(failure) => failures.push(failure),
        }
    }

    log::info!(
        "{} Linien belegt, {} fehlgeschlagen",
        summaries.len(),
        failures.len()
    );
    state.status_message = Some(summaries.join(" / "));
    state.warning = (!failures.is_empty()).then(|| EditorWarning::Batch(failures.clone()));
    failures
}
