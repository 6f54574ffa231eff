// File: src/model/adapter.rs
use crate::model::MenuEvent;
use chrono::{Duration, Utc};
use icalendar::{Calendar, Component, Event, EventLike};
use uuid::Uuid;

impl MenuEvent {
    /// Renders the record as a single all-day VEVENT.
    ///
    /// All-day events use the exclusive end-date convention (DTEND is the
    /// day after DTSTART) and are marked TRANSP:TRANSPARENT so they never
    /// block the calendar owner's free/busy time.
    pub fn to_vevent(&self) -> Event {
        let mut event = Event::new();
        event.uid(&Uuid::new_v4().to_string());
        event.summary(&self.title);
        if !self.description.is_empty() {
            event.description(&self.description);
        }
        event.timestamp(Utc::now());
        event.starts(self.date);
        event.ends(self.date + Duration::days(1));
        event.add_property("TRANSP", "TRANSPARENT");
        event
    }
}

/// Builds the calendar-file document for one source document's events.
/// Serialization is `Calendar::to_string`; writing the result anywhere is
/// the caller's concern.
pub fn to_calendar(events: &[MenuEvent]) -> Calendar {
    let mut calendar = Calendar::new();
    for record in events {
        calendar.push(record.to_vevent());
    }
    calendar
}
