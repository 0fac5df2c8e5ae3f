//! Date-driven classification and display ordering of events.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::models::{Event, EventStatus};

/// The backend sends calendar dates as `dd/mm/yyyy`.
pub const EVENT_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EVENT_DATE_FORMAT).ok()
}

/// Classify each event against `today` and put the list into display order.
///
/// An event strictly before `today` becomes `Finished`; everything else
/// becomes `Upcoming`. Events whose date fails to parse keep whatever
/// status they already carried and compare as if they were dated `today`.
///
/// Display order: the `Upcoming` block first, then `Finished`; within each
/// block by year descending, then by full date descending (farthest future
/// first among upcoming, most recently finished first among finished).
/// Events that compare equal keep their input order.
///
/// Pure function of its inputs; re-running with the same `today` yields
/// the same list.
pub fn classify_events(events: Vec<Event>, today: NaiveDate) -> Vec<Event> {
    let mut entries: Vec<(usize, Option<NaiveDate>, Event)> = events
        .into_iter()
        .enumerate()
        .map(|(index, mut event)| {
            let parsed = parse_event_date(&event.date);
            if let Some(date) = parsed {
                event.status = if date < today {
                    EventStatus::Finished
                } else {
                    EventStatus::Upcoming
                };
            }
            (index, parsed, event)
        })
        .collect();

    entries.sort_by(|(index_a, date_a, a), (index_b, date_b, b)| {
        status_rank(a.status)
            .cmp(&status_rank(b.status))
            .then_with(|| {
                let date_a = date_a.unwrap_or(today);
                let date_b = date_b.unwrap_or(today);
                compare_dates_descending(date_a, date_b)
            })
            // Explicit tiebreak on the original position; equal dates must
            // keep their input order regardless of the sort used.
            .then_with(|| index_a.cmp(index_b))
    });

    entries.into_iter().map(|(_, _, event)| event).collect()
}

fn status_rank(status: EventStatus) -> u8 {
    match status {
        EventStatus::Upcoming => 0,
        EventStatus::Finished => 1,
    }
}

fn compare_dates_descending(a: NaiveDate, b: NaiveDate) -> Ordering {
    b.year()
        .cmp(&a.year())
        .then_with(|| b.cmp(&a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64, date: &str, status: EventStatus) -> Event {
        Event {
            id,
            title: format!("event {id}"),
            description: String::new(),
            date: date.to_string(),
            status,
            image_ref: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn partitions_by_date_against_today() {
        let events = vec![
            event(1, "31/05/2025", EventStatus::Upcoming),
            event(2, "01/06/2025", EventStatus::Finished),
            event(3, "02/06/2025", EventStatus::Finished),
        ];

        let classified = classify_events(events, today());
        let by_id = |id: i64| classified.iter().find(|e| e.id == id).unwrap().status;

        assert_eq!(by_id(1), EventStatus::Finished);
        // Same-day events are not yet finished.
        assert_eq!(by_id(2), EventStatus::Upcoming);
        assert_eq!(by_id(3), EventStatus::Upcoming);
    }

    #[test]
    fn orders_upcoming_before_finished_with_ties_kept_in_input_order() {
        // A and B tie on 10/01/2026, C is already finished.
        let events = vec![
            event(1, "10/01/2026", EventStatus::Upcoming),
            event(2, "10/01/2026", EventStatus::Upcoming),
            event(3, "01/05/2025", EventStatus::Upcoming),
        ];

        let classified = classify_events(events, today());
        let ids: Vec<i64> = classified.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(classified[2].status, EventStatus::Finished);
    }

    #[test]
    fn upcoming_sorts_farthest_future_first_across_years() {
        let events = vec![
            event(1, "15/06/2025", EventStatus::Upcoming),
            event(2, "02/01/2026", EventStatus::Upcoming),
            event(3, "20/12/2025", EventStatus::Upcoming),
        ];

        let ids: Vec<i64> = classify_events(events, today())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn finished_sorts_most_recent_first() {
        let events = vec![
            event(1, "01/01/2024", EventStatus::Upcoming),
            event(2, "30/05/2025", EventStatus::Upcoming),
            event(3, "15/03/2025", EventStatus::Upcoming),
        ];

        let ids: Vec<i64> = classify_events(events, today())
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn unparsable_dates_keep_their_status_and_sort_as_today() {
        let events = vec![
            event(1, "10/01/2026", EventStatus::Upcoming),
            event(2, "no es una fecha", EventStatus::Upcoming),
            event(3, "31/05/2025", EventStatus::Upcoming),
        ];

        let classified = classify_events(events, today());
        let ids: Vec<i64> = classified.iter().map(|e| e.id).collect();

        // Event 2 keeps Upcoming, compares as today: after 2026 dates,
        // before anything finished.
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(classified[1].status, EventStatus::Upcoming);
        assert_eq!(classified[2].status, EventStatus::Finished);
    }

    #[test]
    fn classification_is_stable_under_reinvocation() {
        let events = vec![
            event(1, "10/01/2026", EventStatus::Upcoming),
            event(2, "10/01/2026", EventStatus::Upcoming),
            event(3, "01/05/2025", EventStatus::Upcoming),
            event(4, "garbage", EventStatus::Finished),
        ];

        let once = classify_events(events, today());
        let twice = classify_events(once.clone(), today());
        assert_eq!(once, twice);
    }
}
