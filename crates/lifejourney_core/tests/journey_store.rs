use chrono::NaiveDate;
use lifejourney_core::{EventCategory, EventPatch, Impact, JourneyStore, LifeEvent, Sentiment};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn event(
    id: &str,
    on: &str,
    category: EventCategory,
    sentiment: Sentiment,
    impact: Impact,
) -> LifeEvent {
    LifeEvent::new(
        id,
        format!("title {id}"),
        format!("about {id}"),
        date(on),
        category,
        sentiment,
        impact,
    )
}

fn low(id: &str, on: &str, category: EventCategory, sentiment: Sentiment) -> LifeEvent {
    event(id, on, category, sentiment, Impact::Low)
}

fn empty_store() -> JourneyStore {
    JourneyStore::with_current_year("Jordan", 1995, "starting out", 2025)
}

fn populated_store() -> JourneyStore {
    let mut store = empty_store();
    store.add_event(
        event("3", "2021-03-01", EventCategory::Travel, Sentiment::Mixed, Impact::Medium)
            .with_positives(["sunsets"])
            .with_negatives(["jet lag", "lost bag"]),
    );
    store.add_event(
        event("1", "2019-09-01", EventCategory::Education, Sentiment::Positive, Impact::High)
            .with_positives(["new friends", "new skills"])
            .with_lessons(["show up"]),
    );
    store.add_event(
        event("2", "2020-05-15", EventCategory::Challenge, Sentiment::Negative, Impact::High)
            .with_negatives(["stress"])
            .with_lessons(["ask for help", "rest matters"]),
    );
    store.add_event(event(
        "4",
        "2021-11-20",
        EventCategory::Career,
        Sentiment::Positive,
        Impact::Low,
    ));
    store
}

fn ids(events: &[&LifeEvent]) -> Vec<String> {
    events.iter().map(|event| event.id.to_string()).collect()
}

#[test]
fn new_store_starts_empty_with_profile() {
    let store = empty_store();
    let journey = store.journey();
    assert_eq!(journey.name, "Jordan");
    assert_eq!(journey.birth_year, 1995);
    assert_eq!(journey.current_age, 30);
    assert_eq!(journey.summary, "starting out");
    assert_eq!(journey.goals, None);
    assert_eq!(journey.philosophy, None);
    assert!(store.events().is_empty());
}

#[test]
fn add_event_keeps_date_order_after_every_insert() {
    let mut store = empty_store();
    for (id, on) in [
        ("a", "2022-01-01"),
        ("b", "2018-06-30"),
        ("c", "2020-02-29"),
        ("d", "2018-06-30"),
        ("e", "2001-12-31"),
    ] {
        store.add_event(event(id, on, EventCategory::Other, Sentiment::Mixed, Impact::Low));
        assert!(store
            .events()
            .windows(2)
            .all(|pair| pair[0].date <= pair[1].date));
    }

    let order: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["e", "b", "d", "c", "a"]);
}

#[test]
fn every_event_appears_in_exactly_its_own_filters() {
    let store = populated_store();

    for event in store.events() {
        let id = event.id.as_str();
        for category in EventCategory::ALL {
            let hit = store
                .events_by_category(category)
                .iter()
                .any(|e| e.id.as_str() == id);
            assert_eq!(hit, category == event.category);
        }
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Mixed] {
            let hit = store
                .events_by_sentiment(sentiment)
                .iter()
                .any(|e| e.id.as_str() == id);
            assert_eq!(hit, sentiment == event.sentiment);
        }
        for impact in [Impact::Low, Impact::Medium, Impact::High] {
            let hit = store
                .events_by_impact(impact)
                .iter()
                .any(|e| e.id.as_str() == id);
            assert_eq!(hit, impact == event.impact);
        }
        for year in store.years_with_events().into_iter().chain([1900, 2100]) {
            let hit = store
                .events_by_year(year)
                .iter()
                .any(|e| e.id.as_str() == id);
            assert_eq!(hit, year == event.year);
        }
    }
}

#[test]
fn filters_preserve_order_and_return_empty_on_miss() {
    let store = populated_store();
    assert_eq!(ids(&store.events_by_year(2021)), vec!["3", "4"]);
    assert_eq!(ids(&store.events_by_impact(Impact::High)), vec!["1", "2"]);
    assert!(store.events_by_category(EventCategory::Family).is_empty());
    assert!(store.events_by_year(1900).is_empty());
}

#[test]
fn statistics_on_empty_store_degrade_gracefully() {
    let store = empty_store();
    let stats = store.statistics();
    assert_eq!(stats.total_events, 0);
    assert_eq!(stats.positive_events, 0);
    assert_eq!(stats.negative_events, 0);
    assert_eq!(stats.mixed_events, 0);
    assert_eq!(stats.positive_percentage, 0.0);
    assert_eq!(stats.negative_percentage, 0.0);
    assert_eq!(stats.most_common_category, EventCategory::Other);
    assert!(stats.high_impact_events.is_empty());
}

#[test]
fn statistics_counts_and_percentages() {
    let store = populated_store();
    let stats = store.statistics();
    assert_eq!(stats.total_events, 4);
    assert_eq!(stats.positive_events, 2);
    assert_eq!(stats.negative_events, 1);
    assert_eq!(stats.mixed_events, 1);
    assert_eq!(stats.positive_percentage, 50.0);
    assert_eq!(stats.negative_percentage, 25.0);
    assert!(stats.positive_percentage + stats.negative_percentage <= 100.0);
    assert_eq!(ids(&stats.high_impact_events), vec!["1", "2"]);
}

#[test]
fn percentages_stay_within_bounds_for_uneven_splits() {
    let mut store = empty_store();
    for day in 1..=2u32 {
        let (id, on) = (format!("p{day}"), format!("2020-01-{day:02}"));
        store.add_event(low(&id, &on, EventCategory::Career, Sentiment::Positive));
    }
    for day in 1..=9u32 {
        let (id, on) = (format!("n{day}"), format!("2020-02-{day:02}"));
        store.add_event(low(&id, &on, EventCategory::Health, Sentiment::Negative));
    }

    let stats = store.statistics();
    assert_eq!(stats.total_events, 11);
    assert!(stats.positive_percentage >= 0.0);
    assert!(stats.negative_percentage <= 100.0);
    assert!(stats.positive_percentage + stats.negative_percentage <= 100.0);
}

#[test]
fn most_common_category_tie_goes_to_first_to_reach_max() {
    let mut store = empty_store();
    store.add_event(low("1", "2020-01-01", EventCategory::Career, Sentiment::Positive));
    store.add_event(low("2", "2020-02-01", EventCategory::Career, Sentiment::Positive));
    store.add_event(low("3", "2020-03-01", EventCategory::Travel, Sentiment::Positive));
    store.add_event(low("4", "2020-04-01", EventCategory::Travel, Sentiment::Positive));

    assert_eq!(store.statistics().most_common_category, EventCategory::Career);
}

#[test]
fn year_summary_derives_sentiment_label() {
    let mut store = empty_store();
    store.add_event(low("p1", "2018-01-01", EventCategory::Career, Sentiment::Positive));
    store.add_event(low("p2", "2018-02-01", EventCategory::Career, Sentiment::Positive));
    store.add_event(low("n1", "2018-03-01", EventCategory::Health, Sentiment::Negative));
    store.add_event(low("n2", "2018-04-01", EventCategory::Health, Sentiment::Negative));
    store.add_event(low("m1", "2019-01-01", EventCategory::Travel, Sentiment::Mixed));
    store.add_event(low("p3", "2020-01-01", EventCategory::Travel, Sentiment::Positive));

    let tie = store.year_summary(2018);
    assert_eq!(tie.year, 2018);
    assert_eq!(tie.events.len(), 4);
    assert_eq!(tie.positive_count, 2);
    assert_eq!(tie.negative_count, 2);
    assert_eq!(tie.sentiment, Sentiment::Mixed);

    assert_eq!(store.year_summary(2019).sentiment, Sentiment::Mixed);
    assert_eq!(store.year_summary(2020).sentiment, Sentiment::Positive);

    let empty = store.year_summary(1999);
    assert!(empty.events.is_empty());
    assert_eq!(empty.sentiment, Sentiment::Mixed);
}

#[test]
fn years_with_events_are_distinct_and_ascending() {
    let store = populated_store();
    assert_eq!(store.years_with_events(), vec![2019, 2020, 2021]);
    assert!(empty_store().years_with_events().is_empty());
}

#[test]
fn profile_setters_mutate_journey() {
    let mut store = empty_store();
    store.set_summary("a decade in review");
    store.set_goals(vec!["run a marathon".to_string(), "learn piano".to_string()]);
    store.set_philosophy("one day at a time");

    let journey = store.journey();
    assert_eq!(journey.summary, "a decade in review");
    assert_eq!(
        journey.goals.as_deref(),
        Some(&["run a marathon".to_string(), "learn piano".to_string()][..])
    );
    assert_eq!(journey.philosophy.as_deref(), Some("one day at a time"));
}

#[test]
fn flatten_operations_follow_event_then_list_order() {
    let store = populated_store();
    assert_eq!(store.all_positives(), vec!["new friends", "new skills", "sunsets"]);
    assert_eq!(store.all_negatives(), vec!["stress", "jet lag", "lost bag"]);
    assert_eq!(
        store.all_lessons(),
        vec!["show up", "ask for help", "rest matters"]
    );

    let expected: usize = store.events().iter().map(|e| e.positives.len()).sum();
    assert_eq!(store.all_positives().len(), expected);
}

#[test]
fn event_by_id_returns_first_match_or_none() {
    let mut store = empty_store();
    store.add_event(low("dup", "2010-01-01", EventCategory::Family, Sentiment::Positive));
    store.add_event(low("dup", "2009-01-01", EventCategory::Health, Sentiment::Negative));

    assert_eq!(store.events().len(), 2);
    let found = store.event_by_id("dup").unwrap();
    assert_eq!(found.category, EventCategory::Health);
    assert!(store.contains_event("dup"));
    assert!(store.event_by_id("missing").is_none());
    assert_eq!(store.events_by_category(EventCategory::Family).len(), 1);
}

#[test]
fn update_changes_only_provided_fields() {
    let mut store = populated_store();
    let before = store.event_by_id("2").unwrap().clone();

    store.update_event(
        "2",
        EventPatch {
            title: Some("X".to_string()),
            ..EventPatch::default()
        },
    );

    let after = store.event_by_id("2").unwrap();
    assert_eq!(after.title, "X");
    let mut expected = before;
    expected.title = "X".to_string();
    assert_eq!(*after, expected);
}

#[test]
fn update_patches_only_first_duplicate_in_date_order() {
    let mut store = empty_store();
    store.add_event(low("dup", "2012-06-01", EventCategory::Family, Sentiment::Positive));
    store.add_event(low("dup", "2011-06-01", EventCategory::Health, Sentiment::Negative));

    store.update_event(
        "dup",
        EventPatch {
            title: Some("patched".to_string()),
            ..EventPatch::default()
        },
    );

    let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["patched", "title dup"]);
    assert_eq!(store.events()[0].category, EventCategory::Health);
}

#[test]
fn update_on_missing_id_is_noop() {
    let mut store = populated_store();
    let before = store.events().to_vec();
    store.update_event(
        "missing",
        EventPatch {
            sentiment: Some(Sentiment::Negative),
            ..EventPatch::default()
        },
    );
    assert_eq!(store.events(), before.as_slice());
}

#[test]
fn update_with_date_resorts_but_keeps_year() {
    let mut store = populated_store();
    store.update_event(
        "4",
        EventPatch {
            date: Some(date("2018-01-01")),
            ..EventPatch::default()
        },
    );

    assert_eq!(store.events()[0].id.as_str(), "4");
    assert_eq!(store.events()[0].year, 2021);
    assert!(store
        .events()
        .windows(2)
        .all(|pair| pair[0].date <= pair[1].date));
}

#[test]
fn delete_removes_every_matching_event() {
    let mut store = populated_store();
    store.add_event(low("1", "2024-01-01", EventCategory::Other, Sentiment::Mixed));
    assert_eq!(store.events().len(), 5);

    store.delete_event("1");
    assert_eq!(store.events().len(), 3);
    assert!(store.event_by_id("1").is_none());
}

#[test]
fn delete_missing_id_leaves_events_unchanged() {
    let mut store = populated_store();
    let before = store.events().to_vec();
    store.delete_event("nope");
    store.delete_event("nope");
    assert_eq!(store.events(), before.as_slice());
}

#[test]
fn end_to_end_two_event_scenario() {
    let mut store = empty_store();
    store.add_event(event(
        "A",
        "2020-01-01",
        EventCategory::Career,
        Sentiment::Positive,
        Impact::High,
    ));
    store.add_event(low("B", "2019-01-01", EventCategory::Education, Sentiment::Negative));

    let order: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["B", "A"]);

    let stats = store.statistics();
    assert_eq!(stats.total_events, 2);
    assert_eq!(stats.positive_percentage, 50.0);
    assert_eq!(stats.negative_percentage, 50.0);
    assert_eq!(stats.most_common_category, EventCategory::Education);
}
