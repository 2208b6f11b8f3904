//! Life event domain model.
//!
//! # Responsibility
//! - Define the canonical `LifeEvent` record and its label enums.
//! - Provide construction helpers that keep `year` derived from `date`.
//! - Provide `EventPatch`, the explicit field-merge used by partial updates.
//!
//! # Invariants
//! - Constructors derive `year` from `date`; `EventPatch` never recomputes it.
//! - Tags are a sorted set, so iteration order is deterministic.
//! - `validate()` is an ingestion check only; the store never calls it.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Opaque event identity.
///
/// Uniqueness is not enforced anywhere in core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random id (UUID v4 text form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Error returned when a label string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl Display for ParseLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl Error for ParseLabelError {}

/// Closed classification of an event's life domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Career,
    Education,
    Relationship,
    Health,
    PersonalGrowth,
    Family,
    Travel,
    Achievement,
    Challenge,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 10] = [
        EventCategory::Career,
        EventCategory::Education,
        EventCategory::Relationship,
        EventCategory::Health,
        EventCategory::PersonalGrowth,
        EventCategory::Family,
        EventCategory::Travel,
        EventCategory::Achievement,
        EventCategory::Challenge,
        EventCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Education => "education",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::PersonalGrowth => "personal-growth",
            Self::Family => "family",
            Self::Travel => "travel",
            Self::Achievement => "achievement",
            Self::Challenge => "challenge",
            Self::Other => "other",
        }
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseLabelError {
                kind: "category",
                value: value.to_string(),
            })
    }
}

/// Coarse valence of an event (or of a whole year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
        }
    }

    /// Derives an overall label from positive/negative tallies.
    ///
    /// Ties (including `0 == 0`) resolve to `Mixed`.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Mixed,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ParseLabelError {
                kind: "sentiment",
                value: value.to_string(),
            }),
        }
    }
}

/// How strongly an event altered the owner's life.
///
/// Ordinal in meaning, but exposed only as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Impact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseLabelError {
                kind: "impact",
                value: value.to_string(),
            }),
        }
    }
}

/// Ingestion-time validation failures for `LifeEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    BlankId,
    BlankTitle { id: EventId },
    YearMismatch { id: EventId, year: i32, date: NaiveDate },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "event id must not be blank"),
            Self::BlankTitle { id } => write!(f, "event `{id}` has a blank title"),
            Self::YearMismatch { id, year, date } => write!(
                f,
                "event `{id}` has year {year} but date {date} is in {}",
                date.year()
            ),
        }
    }
}

impl Error for EventValidationError {}

/// One dated, categorized occurrence in a life journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// Calendar date, ISO `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    /// Redundant with `date`; kept consistent by whoever builds the event.
    pub year: i32,
    pub category: EventCategory,
    pub sentiment: Sentiment,
    pub impact: Impact,
    #[serde(default)]
    pub positives: Vec<String>,
    #[serde(default)]
    pub negatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
}

impl LifeEvent {
    /// Creates an event with empty reflection lists and `year` derived from `date`.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        category: EventCategory,
        sentiment: Sentiment,
        impact: Impact,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            date,
            year: date.year(),
            category,
            sentiment,
            impact,
            positives: Vec::new(),
            negatives: Vec::new(),
            lessons: None,
            tags: None,
        }
    }

    /// Quick-capture helper: generated id and `Impact::Medium`.
    pub fn quick(
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        category: EventCategory,
        sentiment: Sentiment,
    ) -> Self {
        Self::new(
            EventId::generate(),
            title,
            description,
            date,
            category,
            sentiment,
            Impact::Medium,
        )
    }

    pub fn with_positives<I, S>(mut self, positives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positives = positives.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_negatives<I, S>(mut self, negatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negatives = negatives.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lessons<I, S>(mut self, lessons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lessons = Some(lessons.into_iter().map(Into::into).collect());
        self
    }

    /// Sets tags after normalization; blank tags are dropped.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = Some(normalize_tags(tags));
        self
    }

    /// Checks data-provider preconditions.
    ///
    /// # Errors
    /// - `BlankId` / `BlankTitle` for whitespace-only identity or title.
    /// - `YearMismatch` when `year` disagrees with `date`.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(EventValidationError::BlankId);
        }
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle {
                id: self.id.clone(),
            });
        }
        if self.year != self.date.year() {
            return Err(EventValidationError::YearMismatch {
                id: self.id.clone(),
                year: self.year,
                date: self.date,
            });
        }
        Ok(())
    }
}

/// Partial update for one event.
///
/// `None` means "leave unchanged". Identity is not patchable. The optional
/// lists nest one more level: `Some(None)` clears `lessons` or `tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub category: Option<EventCategory>,
    pub sentiment: Option<Sentiment>,
    pub impact: Option<Impact>,
    pub positives: Option<Vec<String>>,
    pub negatives: Option<Vec<String>>,
    pub lessons: Option<Option<Vec<String>>>,
    pub tags: Option<Option<BTreeSet<String>>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn touches_date(&self) -> bool {
        self.date.is_some()
    }

    /// Overwrites exactly the fields set on this patch.
    pub fn apply_to(self, event: &mut LifeEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(year) = self.year {
            event.year = year;
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(sentiment) = self.sentiment {
            event.sentiment = sentiment;
        }
        if let Some(impact) = self.impact {
            event.impact = impact;
        }
        if let Some(positives) = self.positives {
            event.positives = positives;
        }
        if let Some(negatives) = self.negatives {
            event.negatives = negatives;
        }
        if let Some(lessons) = self.lessons {
            event.lessons = lessons;
        }
        if let Some(tags) = self.tags {
            event.tags = tags;
        }
    }
}

/// Trims, lowercases and collapses inner whitespace of one tag.
///
/// Returns `None` for blank input.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(WHITESPACE_RE.replace_all(trimmed, " ").to_lowercase())
}

/// Normalizes and deduplicates a tag list into a sorted set.
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, EventCategory, Sentiment};

    #[test]
    fn normalize_tag_collapses_whitespace_and_lowercases() {
        assert_eq!(
            normalize_tag("  Personal \t  Growth ").as_deref(),
            Some("personal growth")
        );
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn category_parse_accepts_snake_and_kebab_labels() {
        assert_eq!(
            "personal_growth".parse::<EventCategory>().unwrap(),
            EventCategory::PersonalGrowth
        );
        assert_eq!(
            "Personal-Growth".parse::<EventCategory>().unwrap(),
            EventCategory::PersonalGrowth
        );
        let err = "hobby".parse::<EventCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category `hobby`");
    }

    #[test]
    fn sentiment_from_counts_resolves_ties_to_mixed() {
        assert_eq!(Sentiment::from_counts(0, 0), Sentiment::Mixed);
        assert_eq!(Sentiment::from_counts(2, 2), Sentiment::Mixed);
        assert_eq!(Sentiment::from_counts(3, 1), Sentiment::Positive);
        assert_eq!(Sentiment::from_counts(0, 1), Sentiment::Negative);
    }
}
