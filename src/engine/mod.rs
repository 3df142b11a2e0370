//! Rechenkern: Spannen-Planung, Projektion, Innenband und Orchestrierung.
//!
//! Reine Funktionen ohne geteilten Zustand; identische Eingaben liefern
//! bit-identische Ergebnisse.

mod allocation;
mod inner_band;
mod line_projection;
mod span_planner;

pub use allocation::{
    allocate_line_resources, compute_span_checksum, round_length, Allocation, SpanAllocator,
};
pub use inner_band::{
    build_band_geometry, build_resolved_band, compute_inward_normal, resolve_offset,
    BandGeometry, ResolvedOffset, SpanPolygon,
};
pub use line_projection::{
    project_segments_onto_line, project_segments_with_tolerance, ProjectedSegment,
};
pub use span_planner::{plan_spans, span_summary, SpanCatalog, SpanPlan};

/// Formatiert mm-Werte auf 0.001 gerundet, ohne überflüssige Nachkommastellen
/// (`1800.0` → `"1800"`, `1800.25` → `"1800.25"`).
pub(crate) fn format_mm(value: f64) -> String {
    let rounded = round_length(value);
    // -0 vermeiden
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}
