use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use serde_json::Value;

/// Placeholder hour when the schedule gives none
pub const DEFAULT_TIME: &str = "--:--";
/// Placeholder title when the schedule gives none
pub const DEFAULT_DESCRIPTION: &str = "Evento sin título";
/// Placeholder country name
pub const DEFAULT_COUNTRY: &str = "Unknown";
/// Placeholder label for a stream link
pub const DEFAULT_CHANNEL_NAME: &str = "Ver enlace";

/// One streaming link attached to an event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    name: String,
    url: String,
    /// Target recovered from the `?r=` payload; `null` when it adds nothing
    decoded_url: Option<String>,
}

impl Channel {
    pub fn new(name: String, url: String, decoded_url: Option<String>) -> Self {
        Self {
            name,
            url,
            decoded_url,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn decoded_url(&self) -> Option<&str> {
        self.decoded_url.as_deref()
    }
}

/// Flattened schedule entry.
///
/// Immutable once built: `channel_count` is fixed from `channels` in
/// [`Event::new`] and no setter exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    id: Value,
    time: String,
    date: String,
    description: String,
    country: String,
    flag_url: String,
    channels: Vec<Channel>,
    channel_count: usize,
}

impl Event {
    pub fn new(
        id: Value,
        time: String,
        date: String,
        description: String,
        country: String,
        flag_url: String,
        channels: Vec<Channel>,
    ) -> Self {
        let channel_count = channels.len();
        Self {
            id,
            time,
            date,
            description,
            country,
            flag_url,
            channels,
            channel_count,
        }
    }

    /// Upstream identifier, `Value::Null` when absent
    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn flag_url(&self) -> &str {
        &self.flag_url
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Sort key: `"<date> <time>"`
    pub fn schedule_key(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

/// Document written by the event pipeline
#[derive(Debug, Serialize)]
pub struct EventsDocument {
    pub scraped_at: String,
    pub total_events: usize,
    pub events: Vec<Event>,
}

impl EventsDocument {
    pub fn new(events: Vec<Event>, scraped_at: DateTime<Local>) -> Self {
        Self {
            scraped_at: scraped_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            total_events: events.len(),
            events,
        }
    }
}
