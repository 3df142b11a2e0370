//! Geteilte, layer-neutrale Bausteine.
//!
//! Konfiguration und Raster-Hilfen, die von `engine` und `app` gleichermaßen
//! genutzt werden, ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod options;
mod snap;

pub use options::{PenaltyWeight, PlannerOptions};
pub use options::{
    DEFAULT_BLOCK_WIDTH, LENGTH_TOLERANCE_MM, MINIMUM_SPAN_LENGTH_MM, NEAR_ZERO,
    SECONDARY_SNAP_SIZE_MM,
};
pub use snap::{snap_point_to_grid, snap_to_grid};
