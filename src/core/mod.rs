//! Core-Domänentypen: Linien, abgeleitete Entitäten, Breiten und Fehler.

mod entities;
mod error;
mod line;
pub mod line_geometry;
pub mod validation;
mod width;

pub use entities::{create_span_id, LineSpan, MarkerRole, SpanBlock, SpanMarker};
pub use error::{BandError, FailureReason, LineFailure, PlanError, ProjectionError};
pub use line::{
    calculate_line_length, infer_orientation, BandOrientation, BandSettings, LineAppearance,
    LineColor, LineOrientation, LineStyle, Polarity, ScaffoldLine,
};
pub use line_geometry::{recalculate_line_with_length, LineGeometryError};
pub use validation::{validate_line_length_value, LengthInputError};
pub use width::WidthTable;
