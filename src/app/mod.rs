//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod derived_store;
pub mod events;
pub mod handlers;
pub mod ids;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet Linien, abgeleitete Entitäten und Editor-Einstellungen.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use derived_store::{DerivedEntities, LineDerived};
pub use events::{AppCommand, AppIntent};
pub use ids::{ClockLineIds, LineIdSource, SequentialLineIds};
pub use state::{AppState, EditorWarning};
pub use use_cases::band_update::{BandOutcome, LineBand};
