//! Pure aggregate computations over an ordered event slice.
//!
//! # Invariants
//! - Inputs are assumed to be in date order; tie-breaks depend on it.
//! - Empty input never divides by zero.

use crate::model::event::{EventCategory, Impact, LifeEvent, Sentiment};
use crate::model::stats::{LifeStats, YearSummary};
use std::collections::HashMap;

pub(crate) fn compute_statistics(events: &[LifeEvent]) -> LifeStats<'_> {
    let total_events = events.len();
    let positive_events = count_sentiment(events.iter(), Sentiment::Positive);
    let negative_events = count_sentiment(events.iter(), Sentiment::Negative);
    let mixed_events = count_sentiment(events.iter(), Sentiment::Mixed);

    LifeStats {
        total_events,
        positive_events,
        negative_events,
        mixed_events,
        positive_percentage: percentage(positive_events, total_events),
        negative_percentage: percentage(negative_events, total_events),
        most_common_category: most_common_category(events),
        high_impact_events: events
            .iter()
            .filter(|event| event.impact == Impact::High)
            .collect(),
    }
}

pub(crate) fn summarize_year(events: &[LifeEvent], year: i32) -> YearSummary<'_> {
    let events_in_year: Vec<&LifeEvent> = events
        .iter()
        .filter(|event| event.year == year)
        .collect();
    let positive_count = count_sentiment(events_in_year.iter().copied(), Sentiment::Positive);
    let negative_count = count_sentiment(events_in_year.iter().copied(), Sentiment::Negative);

    YearSummary {
        year,
        events: events_in_year,
        positive_count,
        negative_count,
        sentiment: Sentiment::from_counts(positive_count, negative_count),
    }
}

/// Tallies categories in order; a category wins only by strictly exceeding the
/// current best, so the first one to reach the max keeps it.
pub(crate) fn most_common_category(events: &[LifeEvent]) -> EventCategory {
    let mut tally: HashMap<EventCategory, usize> = HashMap::new();
    let mut best: Option<(EventCategory, usize)> = None;

    for event in events {
        let count = tally.entry(event.category).or_insert(0);
        *count += 1;
        let leads = best.map_or(true, |(_, best_count)| *count > best_count);
        if leads {
            best = Some((event.category, *count));
        }
    }

    best.map(|(category, _)| category)
        .unwrap_or(EventCategory::Other)
}

/// Scales before dividing so that complementary shares never sum above 100.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

fn count_sentiment<'a>(
    events: impl Iterator<Item = &'a LifeEvent>,
    sentiment: Sentiment,
) -> usize {
    events.filter(|event| event.sentiment == sentiment).count()
}
