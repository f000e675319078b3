use jiff::civil::Date;
use serde::Deserialize;

/// A titled narrative with a summary and an ordered timeline of events, as
/// delivered by the story backend. Stories are immutable once received.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Story {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub date: Option<Date>,
}

/// One timestamped textual entry within a story's timeline. The backend
/// delivers events in chronological ascending order; that order is preserved
/// verbatim everywhere downstream.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimelineEvent {
    pub datetime: String,
    pub text: String,
}

/// Lifecycle of the one story-collection fetch.
///
/// Exactly one variant is active at a time. `Loading` transitions to `Ready`
/// on success or `Error` on failure; the only way back to `Loading` is an
/// explicit refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Error(String),
    Ready(Vec<Story>),
}

impl FetchState {
    /// The story list when the fetch has completed, `None` otherwise.
    pub fn stories(&self) -> Option<&[Story]> {
        match self {
            FetchState::Ready(stories) => Some(stories),
            _ => None,
        }
    }
}
