//! Scaffold Span Planner Library.
//! Spannen-Aufteilung und Innenband-Geometrie als Library exportiert für Tests
//! und Wiederverwendung.

pub mod app;
pub mod core;
pub mod engine;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorWarning, LineBand, SequentialLineIds,
};
pub use core::{
    BandOrientation, BandSettings, FailureReason, LineFailure, LineOrientation, Polarity,
    ScaffoldLine, WidthTable,
};
pub use engine::{
    allocate_line_resources, build_band_geometry, compute_inward_normal, plan_spans,
    project_segments_onto_line, Allocation, BandGeometry, SpanAllocator, SpanPlan,
};
pub use shared::PlannerOptions;
