//! JSON journey document codec.

use crate::model::event::{EventValidationError, LifeEvent};
use crate::model::journey::{age_in_year, Journey};
use crate::service::journey_store::JourneyStore;
use chrono::{Datelike, Local};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors from journey document import/export.
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    /// Event at `index` (document order) failed ingestion checks.
    InvalidEvent {
        index: usize,
        source: EventValidationError,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid journey document: {err}"),
            Self::InvalidEvent { index, source } => {
                write!(f, "invalid event at index {index}: {source}")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidEvent { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Wire shape of a journey.
///
/// `current_age` is optional on input; when absent it is derived from the
/// local clock at import time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyDocument {
    pub name: String,
    pub birth_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_age: Option<i32>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub philosophy: Option<String>,
    #[serde(default)]
    pub events: Vec<LifeEvent>,
}

impl From<&Journey> for JourneyDocument {
    fn from(journey: &Journey) -> Self {
        Self {
            name: journey.name.clone(),
            birth_year: journey.birth_year,
            current_age: Some(journey.current_age),
            summary: journey.summary.clone(),
            goals: journey.goals.clone(),
            philosophy: journey.philosophy.clone(),
            events: journey.events.clone(),
        }
    }
}

/// Parses and validates a JSON journey document into a store.
///
/// # Errors
/// - `Json` when the text is not a well-formed document.
/// - `InvalidEvent` for the first event failing `LifeEvent::validate()`.
pub fn import_json(input: &str) -> SnapshotResult<JourneyStore> {
    let started_at = Instant::now();
    let document: JourneyDocument = match serde_json::from_str(input) {
        Ok(document) => document,
        Err(err) => {
            error!(
                "event=snapshot_import module=snapshot status=error error_code=json at={}:{}",
                err.line(),
                err.column()
            );
            return Err(err.into());
        }
    };

    match import_document(document) {
        Ok(store) => {
            info!(
                "event=snapshot_import module=snapshot status=ok duration_ms={} events={}",
                started_at.elapsed().as_millis(),
                store.events().len()
            );
            Ok(store)
        }
        Err(err) => {
            error!("event=snapshot_import module=snapshot status=error error_code=event_invalid");
            Err(err)
        }
    }
}

/// Validates a decoded document and builds a store from it.
pub fn import_document(document: JourneyDocument) -> SnapshotResult<JourneyStore> {
    for (index, event) in document.events.iter().enumerate() {
        event
            .validate()
            .map_err(|source| SnapshotError::InvalidEvent { index, source })?;
    }

    let current_age = document
        .current_age
        .unwrap_or_else(|| age_in_year(document.birth_year, Local::now().year()));
    let mut journey = Journey::new(
        document.name,
        document.birth_year,
        current_age,
        document.summary,
    );
    journey.goals = document.goals;
    journey.philosophy = document.philosophy;
    journey.events = document.events;

    Ok(JourneyStore::from_journey(journey))
}

pub fn export_document(store: &JourneyStore) -> JourneyDocument {
    JourneyDocument::from(store.journey())
}

/// Serializes the store as pretty-printed JSON.
pub fn export_json(store: &JourneyStore) -> SnapshotResult<String> {
    let json = serde_json::to_string_pretty(&export_document(store))?;
    info!(
        "event=snapshot_export module=snapshot status=ok events={} bytes={}",
        store.events().len(),
        json.len()
    );
    Ok(json)
}
