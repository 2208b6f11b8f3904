//! Journey aggregate root.
//!
//! # Invariants
//! - `current_age` is a construction-time snapshot and is never refreshed.
//! - `events` is kept in non-decreasing `date` order by `JourneyStore`.

use crate::model::event::LifeEvent;
use serde::Serialize;

/// One person's profile plus every recorded event.
///
/// Only `JourneyStore` can build or mutate a journey; callers get `&Journey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Journey {
    pub name: String,
    pub birth_year: i32,
    pub current_age: i32,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub philosophy: Option<String>,
    pub events: Vec<LifeEvent>,
}

impl Journey {
    pub(crate) fn new(
        name: impl Into<String>,
        birth_year: i32,
        current_age: i32,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_year,
            current_age,
            summary: summary.into(),
            goals: None,
            philosophy: None,
            events: Vec::new(),
        }
    }
}

/// Age snapshot used at construction time.
pub fn age_in_year(birth_year: i32, current_year: i32) -> i32 {
    current_year - birth_year
}
