//! Journey store: single source of truth for one person's events.
//!
//! # Responsibility
//! - Own the `Journey` aggregate and every mutation on it.
//! - Answer filter and aggregate queries over the current event order.
//!
//! # Invariants
//! - Events are in non-decreasing `date` order after `add_event` and after any
//!   `update_event` whose patch sets `date`. The sort is stable.
//! - Lookups, updates and deletes on unknown ids never fail.
//! - Queries return borrowed views; nothing is copied out of the store.
//!
//! # See also
//! - `service::shared` for the lock-guarded wrapper.

use crate::model::event::{EventCategory, EventPatch, Impact, LifeEvent, Sentiment};
use crate::model::journey::{age_in_year, Journey};
use crate::model::stats::{LifeStats, YearSummary};
use crate::service::analytics::{compute_statistics, summarize_year};
use chrono::{Datelike, Local};
use log::debug;
use std::collections::BTreeSet;

/// In-memory store for one journey.
#[derive(Debug, Clone)]
pub struct JourneyStore {
    journey: Journey,
}

impl JourneyStore {
    /// Creates an empty journey; `current_age` is taken from the local clock once.
    pub fn new(name: impl Into<String>, birth_year: i32, summary: impl Into<String>) -> Self {
        Self::with_current_year(name, birth_year, summary, Local::now().year())
    }

    /// Same as `new` with an explicit "current" year.
    pub fn with_current_year(
        name: impl Into<String>,
        birth_year: i32,
        summary: impl Into<String>,
        current_year: i32,
    ) -> Self {
        Self {
            journey: Journey::new(
                name,
                birth_year,
                age_in_year(birth_year, current_year),
                summary,
            ),
        }
    }

    pub(crate) fn from_journey(mut journey: Journey) -> Self {
        journey.events.sort_by_key(|event| event.date);
        Self { journey }
    }

    /// Appends one event and restores date order.
    ///
    /// Duplicate ids are accepted.
    pub fn add_event(&mut self, event: LifeEvent) {
        self.journey.events.push(event);
        self.sort_events();
        debug!(
            "event=event_add module=journey status=ok total={}",
            self.journey.events.len()
        );
    }

    pub fn events(&self) -> &[LifeEvent] {
        &self.journey.events
    }

    pub fn events_by_sentiment(&self, sentiment: Sentiment) -> Vec<&LifeEvent> {
        self.filter_events(|event| event.sentiment == sentiment)
    }

    pub fn events_by_category(&self, category: EventCategory) -> Vec<&LifeEvent> {
        self.filter_events(|event| event.category == category)
    }

    pub fn events_by_year(&self, year: i32) -> Vec<&LifeEvent> {
        self.filter_events(|event| event.year == year)
    }

    pub fn events_by_impact(&self, impact: Impact) -> Vec<&LifeEvent> {
        self.filter_events(|event| event.impact == impact)
    }

    pub fn statistics(&self) -> LifeStats<'_> {
        compute_statistics(&self.journey.events)
    }

    pub fn year_summary(&self, year: i32) -> YearSummary<'_> {
        summarize_year(&self.journey.events, year)
    }

    /// Distinct event years, ascending.
    pub fn years_with_events(&self) -> Vec<i32> {
        self.journey
            .events
            .iter()
            .map(|event| event.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.journey.summary = summary.into();
    }

    pub fn set_goals(&mut self, goals: Vec<String>) {
        self.journey.goals = Some(goals);
    }

    pub fn set_philosophy(&mut self, philosophy: impl Into<String>) {
        self.journey.philosophy = Some(philosophy.into());
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    /// Lessons across events in event order; events without lessons are skipped.
    pub fn all_lessons(&self) -> Vec<&str> {
        self.journey
            .events
            .iter()
            .filter_map(|event| event.lessons.as_ref())
            .flatten()
            .map(String::as_str)
            .collect()
    }

    pub fn all_positives(&self) -> Vec<&str> {
        self.journey
            .events
            .iter()
            .flat_map(|event| event.positives.iter().map(String::as_str))
            .collect()
    }

    pub fn all_negatives(&self) -> Vec<&str> {
        self.journey
            .events
            .iter()
            .flat_map(|event| event.negatives.iter().map(String::as_str))
            .collect()
    }

    /// First event in current order with a matching id.
    pub fn event_by_id(&self, id: &str) -> Option<&LifeEvent> {
        self.journey
            .events
            .iter()
            .find(|event| event.id.as_str() == id)
    }

    pub fn contains_event(&self, id: &str) -> bool {
        self.event_by_id(id).is_some()
    }

    /// Merges `patch` into the first event with `id`.
    ///
    /// Unknown ids are a no-op. A patch that sets `date` re-sorts the journey;
    /// `year` is only changed if the patch carries it.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) {
        let Some(event) = self
            .journey
            .events
            .iter_mut()
            .find(|event| event.id.as_str() == id)
        else {
            debug!("event=event_update module=journey status=skipped reason=not_found");
            return;
        };

        let resort = patch.touches_date();
        patch.apply_to(event);
        if resort {
            self.sort_events();
        }
        debug!(
            "event=event_update module=journey status=ok resorted={}",
            resort
        );
    }

    /// Removes every event with `id`.
    pub fn delete_event(&mut self, id: &str) {
        let before = self.journey.events.len();
        self.journey.events.retain(|event| event.id.as_str() != id);
        debug!(
            "event=event_delete module=journey status=ok removed={} total={}",
            before - self.journey.events.len(),
            self.journey.events.len()
        );
    }

    fn filter_events(&self, predicate: impl Fn(&LifeEvent) -> bool) -> Vec<&LifeEvent> {
        self.journey
            .events
            .iter()
            .filter(|event| predicate(*event))
            .collect()
    }

    fn sort_events(&mut self) {
        self.journey.events.sort_by_key(|event| event.date);
    }
}

#[cfg(test)]
mod tests {
    use super::JourneyStore;
    use crate::model::event::{EventCategory, EventPatch, Impact, LifeEvent, Sentiment};
    use chrono::NaiveDate;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn current_age_is_snapshot_of_construction_year() {
        let store = JourneyStore::with_current_year("Ada", 1990, "", 2024);
        assert_eq!(store.journey().current_age, 34);
    }

    #[test]
    fn same_date_events_keep_insertion_order() {
        let mut store = JourneyStore::with_current_year("Ada", 1990, "", 2024);
        for id in ["a", "b", "c"] {
            store.add_event(LifeEvent::new(
                id,
                id,
                "",
                date("2021-07-04"),
                EventCategory::Family,
                Sentiment::Positive,
                Impact::Low,
            ));
        }
        let ids: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_without_date_does_not_reorder() {
        let mut store = JourneyStore::with_current_year("Ada", 1990, "", 2024);
        store.add_event(LifeEvent::new(
            "early",
            "early",
            "",
            date("2010-01-01"),
            EventCategory::Education,
            Sentiment::Positive,
            Impact::Low,
        ));
        store.add_event(LifeEvent::new(
            "late",
            "late",
            "",
            date("2012-01-01"),
            EventCategory::Career,
            Sentiment::Positive,
            Impact::Low,
        ));

        store.update_event(
            "early",
            EventPatch {
                impact: Some(Impact::High),
                ..EventPatch::default()
            },
        );
        assert_eq!(store.events()[0].id.as_str(), "early");
        assert_eq!(store.events()[0].impact, Impact::High);
    }
}
