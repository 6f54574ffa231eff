// File: src/client/google.rs
// Google Calendar v3 REST implementation of the calendar store. Credential
// bootstrapping lives outside this crate; the caller hands in a bearer token.
use crate::client::{CalendarStore, EventPayload, InsertedEvent, StoredEvent};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

pub struct GoogleCalendarStore {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct EventListResponse {
    #[serde(default)]
    items: Vec<WireEvent>,
}

#[derive(Debug, Deserialize)]
struct WireEvent {
    id: String,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
    #[serde(rename = "htmlLink")]
    html_link: Option<String>,
}

#[derive(Debug, Serialize)]
struct WireDate {
    date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct InsertBody<'a> {
    summary: &'a str,
    description: &'a str,
    start: WireDate,
    end: WireDate,
}

impl GoogleCalendarStore {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// The base URL is injectable so tests can point the client at a local
    /// mock server.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id)
        )
    }
}

impl CalendarStore for GoogleCalendarStore {
    fn list_events(
        &self,
        calendar_id: &str,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<StoredEvent>> {
        let response = self
            .http
            .get(self.events_url(calendar_id))
            .bearer_auth(&self.token)
            .query(&[
                (
                    "timeMin",
                    window_start.to_rfc3339_opts(SecondsFormat::Secs, true),
                ),
                (
                    "timeMax",
                    window_end.to_rfc3339_opts(SecondsFormat::Secs, true),
                ),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .context("event list request failed")?
            .error_for_status()
            .context("event list request rejected")?;
        let body: EventListResponse = response.json().context("malformed event list response")?;
        Ok(body
            .items
            .into_iter()
            .map(|event| StoredEvent {
                id: event.id,
                summary: event.summary,
            })
            .collect())
    }

    fn insert_event(&self, calendar_id: &str, event: &EventPayload) -> Result<InsertedEvent> {
        let body = InsertBody {
            summary: &event.title,
            description: &event.description,
            start: WireDate {
                date: event.start_date,
            },
            end: WireDate {
                date: event.end_date,
            },
        };
        let response = self
            .http
            .post(self.events_url(calendar_id))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .context("event insert request failed")?
            .error_for_status()
            .context("event insert request rejected")?;
        let created: InsertResponse = response.json().context("malformed insert response")?;
        Ok(InsertedEvent {
            id: created.id,
            link: created.html_link,
        })
    }
}
