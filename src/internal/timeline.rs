use crate::internal::models::TimelineEvent;
use crate::utils::datetime::{format_date_label, format_time_label, parse_event_datetime};

/// A single renderable entry in a story's timeline: either a date header
/// introducing a new calendar day, or one event row.
///
/// Entries are derived fresh from a story's events on every render and are
/// never cached across stories.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEntry {
    DateHeader {
        label: String,
    },
    EventRow {
        time: String,
        text: String,
        /// Set on the final row only, so the renderer can omit the trailing
        /// connector. Carries no other meaning.
        is_last_in_story: bool,
    },
}

/// Group an ordered event sequence into date-labeled display entries.
///
/// Pure and deterministic: identical input produces identical output. Events
/// are walked in the given order and never re-sorted; a `DateHeader` is
/// emitted before the first event and whenever an event's calendar date
/// differs from the previously emitted event's date. Events sharing an
/// identical datetime stay adjacent under a single header.
///
/// An event whose datetime does not parse keeps its raw string as both the
/// header label and time label; the backend contract makes this a boundary
/// violation, not something repaired here.
pub fn group(events: &[TimelineEvent]) -> Vec<DisplayEntry> {
    let mut entries = Vec::with_capacity(events.len() + 4);
    let mut previous_date = None;

    for (idx, event) in events.iter().enumerate() {
        let parsed = parse_event_datetime(&event.datetime).ok();
        let date = parsed.map(|dt| dt.date());

        if idx == 0 || date != previous_date {
            let label = match parsed {
                Some(dt) => format_date_label(dt.date()),
                None => event.datetime.clone(),
            };
            entries.push(DisplayEntry::DateHeader { label });
        }

        let time = match parsed {
            Some(dt) => format_time_label(dt.time()),
            None => event.datetime.clone(),
        };
        entries.push(DisplayEntry::EventRow {
            time,
            text: event.text.clone(),
            is_last_in_story: idx + 1 == events.len(),
        });

        previous_date = date;
    }

    entries
}
