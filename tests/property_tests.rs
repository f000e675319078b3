use proptest::prelude::*;
use tui_inbrief_app::config::AppConfig;
use tui_inbrief_app::internal::models::TimelineEvent;
use tui_inbrief_app::internal::timeline::{DisplayEntry, group};

/// Build a chronological event sequence within one month from sorted
/// (day, hour, minute) triples.
fn events_from(parts: &[(u8, u8, u8)]) -> Vec<TimelineEvent> {
    parts
        .iter()
        .map(|(day, hour, minute)| TimelineEvent {
            datetime: format!("2024-03-{day:02}T{hour:02}:{minute:02}"),
            text: format!("day {day} at {hour:02}:{minute:02}"),
        })
        .collect()
}

proptest! {
    #[test]
    fn group_preserves_row_count_and_order(
        mut parts in prop::collection::vec((1u8..=28, 0u8..24, 0u8..60), 1..40)
    ) {
        parts.sort();
        let events = events_from(&parts);
        let entries = group(&events);

        let rows: Vec<String> = entries
            .iter()
            .filter_map(|entry| match entry {
                DisplayEntry::EventRow { text, .. } => Some(text.clone()),
                DisplayEntry::DateHeader { .. } => None,
            })
            .collect();

        let expected: Vec<String> = events.iter().map(|e| e.text.clone()).collect();
        prop_assert_eq!(rows, expected);
    }

    #[test]
    fn group_emits_one_header_per_distinct_day(
        mut parts in prop::collection::vec((1u8..=28, 0u8..24, 0u8..60), 1..40)
    ) {
        parts.sort();
        let distinct_days = parts
            .iter()
            .map(|(day, _, _)| *day)
            .collect::<std::collections::BTreeSet<_>>()
            .len();

        let events = events_from(&parts);
        let headers = group(&events)
            .iter()
            .filter(|entry| matches!(entry, DisplayEntry::DateHeader { .. }))
            .count();

        prop_assert_eq!(headers, distinct_days);
    }

    #[test]
    fn group_marks_exactly_the_final_row_last(
        mut parts in prop::collection::vec((1u8..=28, 0u8..24, 0u8..60), 1..40)
    ) {
        parts.sort();
        let events = events_from(&parts);
        let entries = group(&events);

        let last_flags: Vec<bool> = entries
            .iter()
            .filter_map(|entry| match entry {
                DisplayEntry::EventRow { is_last_in_story, .. } => Some(*is_last_in_story),
                DisplayEntry::DateHeader { .. } => None,
            })
            .collect();

        prop_assert_eq!(last_flags.iter().filter(|last| **last).count(), 1);
        prop_assert!(
            matches!(
                entries.last(),
                Some(DisplayEntry::EventRow { is_last_in_story: true, .. })
            ),
            "last entry must be an EventRow with is_last_in_story = true"
        );
    }

    #[test]
    fn group_never_panics_on_arbitrary_input(
        raw in prop::collection::vec(("\\PC*", "\\PC*"), 0..20)
    ) {
        let events: Vec<TimelineEvent> = raw
            .into_iter()
            .map(|(datetime, text)| TimelineEvent { datetime, text })
            .collect();

        let entries = group(&events);
        // Even for garbage datetimes, every event still gets its row.
        let rows = entries
            .iter()
            .filter(|entry| matches!(entry, DisplayEntry::EventRow { .. }))
            .count();
        prop_assert_eq!(rows, events.len());
    }

    #[test]
    fn test_config_parsing_resilience(s in "\\PC*") {
        // Fuzz the config loader with random strings
        // It should return an Err, but not panic
        let _ = ron::from_str::<AppConfig>(&s);
    }
}
