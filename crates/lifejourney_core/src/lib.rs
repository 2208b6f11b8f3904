//! Core domain logic for LifeJourney.
//! This crate owns the journey aggregate and every query over it.

pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{
    normalize_tag, normalize_tags, EventCategory, EventId, EventPatch, EventValidationError,
    Impact, LifeEvent, ParseLabelError, Sentiment,
};
pub use model::journey::Journey;
pub use model::stats::{LifeStats, YearSummary};
pub use service::journey_store::JourneyStore;
pub use service::shared::SharedJourneyStore;
pub use snapshot::{
    export_document, export_json, import_document, import_json, JourneyDocument, SnapshotError,
    SnapshotResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
