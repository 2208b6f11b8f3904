//! Read models derived from a journey.
//!
//! Both types borrow events from the store that produced them, so they cannot
//! outlive (or observe) a later mutation.

use crate::model::event::{EventCategory, LifeEvent, Sentiment};
use serde::Serialize;

/// Aggregate statistics over every event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeStats<'a> {
    pub total_events: usize,
    pub positive_events: usize,
    pub negative_events: usize,
    pub mixed_events: usize,
    /// `positive_events / total_events * 100`, or `0.0` for an empty journey.
    pub positive_percentage: f64,
    /// `negative_events / total_events * 100`, or `0.0` for an empty journey.
    pub negative_percentage: f64,
    /// Highest tally; ties go to the category that reached the max first.
    pub most_common_category: EventCategory,
    pub high_impact_events: Vec<&'a LifeEvent>,
}

/// Per-year view with an overall sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary<'a> {
    pub year: i32,
    pub events: Vec<&'a LifeEvent>,
    pub positive_count: usize,
    pub negative_count: usize,
    pub sentiment: Sentiment,
}
