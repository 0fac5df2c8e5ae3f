use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EventStatus {
    Upcoming,
    Finished,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Finished => "Finished",
        }
    }
}

/// A community recycling event as shown on the events screen.
///
/// `status` is derived from `date` against the current day on every
/// display pass; it is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Calendar date as the backend sends it: `dd/mm/yyyy`.
    pub date: String,
    pub status: EventStatus,
    pub image_ref: String,
}
