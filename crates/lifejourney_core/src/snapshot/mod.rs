//! Journey serialization and validated ingestion.
//!
//! # Responsibility
//! - Map `JourneyStore` to and from the JSON journey document.
//! - Act as the only validation boundary for externally supplied events.
//!
//! # Invariants
//! - Imported events are validated before any of them reach the store.
//! - Imported events are put in date order by the store's stable sort, the
//!   same one `add_event` applies.

mod json;

pub use json::{
    export_document, export_json, import_document, import_json, JourneyDocument, SnapshotError,
    SnapshotResult,
};
