// File: src/client/mod.rs
pub mod google;

use crate::model::MenuEvent;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

/// An event already present in the calendar store. Opaque to this crate
/// beyond identity; its mere existence on a day is what matters.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub id: String,
    pub summary: Option<String>,
}

/// The insert payload for a new all-day event. The end date follows the
/// exclusive convention: the day after the start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl EventPayload {
    pub fn from_record(record: &MenuEvent) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            start_date: record.date,
            end_date: record.date + Duration::days(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedEvent {
    pub id: String,
    pub link: Option<String>,
}

/// Minimal surface this crate needs from a remote calendar.
///
/// Both calls are synchronous and blocking; the uploader issues them
/// strictly in sequence, one event at a time.
pub trait CalendarStore {
    fn list_events(
        &self,
        calendar_id: &str,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<StoredEvent>>;

    fn insert_event(&self, calendar_id: &str, event: &EventPayload) -> Result<InsertedEvent>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Created { id: String, link: Option<String> },
    Skipped { existing: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub date: NaiveDate,
    pub outcome: UploadOutcome,
}

/// The full-day search window for a calendar date: local midnight through
/// local 23:59:59, expressed in UTC for the store.
pub fn day_window_utc(date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let to_utc = |h, m, s| -> Result<DateTime<Utc>> {
        let naive = date
            .and_hms_opt(h, m, s)
            .context("invalid wall-clock time")?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("no local representation for {naive}"))
    };
    Ok((to_utc(0, 0, 0)?, to_utc(23, 59, 59)?))
}

/// Pushes each record, skipping any day that already has events in the
/// target calendar.
///
/// Deduplication is keyed on day presence alone, never on event content: a
/// re-run can never double-post a day, but it will also never correct an
/// event that is already there. A store failure propagates and aborts the
/// remaining batch; re-running the whole batch after the fault is safe for
/// the same reason.
pub fn upload<S: CalendarStore>(
    store: &S,
    calendar_id: &str,
    events: &[MenuEvent],
) -> Result<Vec<UploadResult>> {
    let mut results = Vec::with_capacity(events.len());
    for record in events {
        let (window_start, window_end) = day_window_utc(record.date)?;
        let existing = store.list_events(calendar_id, window_start, window_end)?;
        if existing.is_empty() {
            let inserted = store.insert_event(calendar_id, &EventPayload::from_record(record))?;
            log::info!(
                "created event on {}: {}",
                record.date,
                inserted.link.as_deref().unwrap_or(&inserted.id)
            );
            results.push(UploadResult {
                date: record.date,
                outcome: UploadOutcome::Created {
                    id: inserted.id,
                    link: inserted.link,
                },
            });
        } else {
            log::info!(
                "skipping {}: {} event(s) already on the calendar",
                record.date,
                existing.len()
            );
            results.push(UploadResult {
                date: record.date,
                outcome: UploadOutcome::Skipped {
                    existing: existing.len(),
                },
            });
        }
    }
    Ok(results)
}
