//! Plain-text views over journey read models.

use lifejourney_core::{Journey, LifeEvent, LifeStats, YearSummary};
use std::fmt::Write;

pub fn summary(journey: &Journey, stats: &LifeStats<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (born {}, age {})",
        journey.name, journey.birth_year, journey.current_age
    );
    if !journey.summary.is_empty() {
        let _ = writeln!(out, "{}", journey.summary);
    }
    if let Some(philosophy) = journey.philosophy.as_deref() {
        let _ = writeln!(out, "Philosophy: {philosophy}");
    }
    if let Some(goals) = journey.goals.as_deref() {
        let _ = writeln!(out, "Goals:");
        for goal in goals {
            let _ = writeln!(out, "  - {goal}");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Events:        {}", stats.total_events);
    let _ = writeln!(
        out,
        "Positive:      {} ({:.1}%)",
        stats.positive_events, stats.positive_percentage
    );
    let _ = writeln!(
        out,
        "Negative:      {} ({:.1}%)",
        stats.negative_events, stats.negative_percentage
    );
    let _ = writeln!(out, "Mixed:         {}", stats.mixed_events);
    let _ = writeln!(out, "Top category:  {}", stats.most_common_category);
    let _ = write!(out, "High impact:   {}", stats.high_impact_events.len());
    out
}

pub fn event_line(event: &LifeEvent) -> String {
    format!(
        "{}  [{}] {} ({}, {} impact) #{}",
        event.date, event.category, event.title, event.sentiment, event.impact, event.id
    )
}

pub fn event_list<'a>(events: impl Iterator<Item = &'a LifeEvent>) -> String {
    let lines: Vec<String> = events.map(event_line).collect();
    if lines.is_empty() {
        return "no events".to_string();
    }
    lines.join("\n")
}

pub fn event_detail(event: &LifeEvent) -> String {
    let mut out = event_line(event);
    if !event.description.is_empty() {
        let _ = write!(out, "\n{}", event.description);
    }
    push_section(&mut out, "Positives", event.positives.iter().map(String::as_str));
    push_section(&mut out, "Negatives", event.negatives.iter().map(String::as_str));
    if let Some(lessons) = event.lessons.as_ref() {
        push_section(&mut out, "Lessons", lessons.iter().map(String::as_str));
    }
    if let Some(tags) = event.tags.as_ref().filter(|tags| !tags.is_empty()) {
        let joined: Vec<&str> = tags.iter().map(String::as_str).collect();
        let _ = write!(out, "\nTags: {}", joined.join(", "));
    }
    out
}

pub fn year(summary: &YearSummary<'_>) -> String {
    let header = format!(
        "{}: {} ({} positive, {} negative)",
        summary.year, summary.sentiment, summary.positive_count, summary.negative_count
    );
    if summary.events.is_empty() {
        return format!("{header}\nno events");
    }
    format!(
        "{header}\n{}",
        event_list(summary.events.iter().copied())
    )
}

pub fn years(years: &[i32]) -> String {
    if years.is_empty() {
        return "no events".to_string();
    }
    years
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn bullets(items: &[&str]) -> String {
    if items.is_empty() {
        return "nothing recorded".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_section<'a>(out: &mut String, title: &str, items: impl Iterator<Item = &'a str>) {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "\n{title}:");
    for item in items {
        let _ = write!(out, "\n  - {item}");
    }
}
