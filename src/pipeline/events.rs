//! Event pipeline: fetch → extract → sort → report → write

use chrono::{DateTime, Local};
use serde_json::Value;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

use crate::errors::PipelineError;
use crate::models::{Event, EventsDocument};
use crate::services::schedule::{sort_events, EventExtractor, ScheduleClient};
use crate::services::writer::write_json;

/// How many events the console report lists
const REPORT_PREVIEW: usize = 5;

/// Flatten and order a raw payload into the output document
pub fn build_document(
    payload: &Value,
    extractor: &EventExtractor,
    scraped_at: DateTime<Local>,
) -> EventsDocument {
    let mut events = extractor.extract_events(payload);
    sort_events(&mut events);
    EventsDocument::new(events, scraped_at)
}

/// Run the whole event pipeline.
///
/// A failed or empty fetch stops the run before anything is written to
/// `output`. The human-readable summary goes to `report`.
pub async fn run(
    client: &ScheduleClient,
    extractor: &EventExtractor,
    output: &Path,
    report: &mut dyn Write,
) -> Result<EventsDocument, PipelineError> {
    let payload = client.fetch().await.map_err(|e| {
        error!("No data retrieved from {}: {}", client.url(), e);
        e
    })?;

    let document = build_document(&payload, extractor, Local::now());
    info!("Processed {} events", document.total_events);

    if let Err(e) = write!(report, "{}", EventsReport(&document)) {
        warn!("Failed to print report: {}", e);
    }

    write_json(output, &document).await?;
    if let Err(e) = writeln!(
        report,
        "\nSaved {} events to {}",
        document.total_events,
        output.display()
    ) {
        warn!("Failed to print report: {}", e);
    }

    Ok(document)
}

/// Console summary of a processed schedule
pub struct EventsReport<'a>(pub &'a EventsDocument);

impl fmt::Display for EventsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = &self.0.events;
        writeln!(f, "Found {} events", events.len())?;

        for event in events.iter().take(REPORT_PREVIEW) {
            writeln!(f)?;
            writeln!(f, "{}", event.description())?;
            writeln!(f, "   Date:     {} {}", event.date(), event.time())?;
            writeln!(f, "   Country:  {}", event.country())?;
            writeln!(f, "   Channels: {} available", event.channel_count())?;
        }

        if events.len() > REPORT_PREVIEW {
            writeln!(f, "\n... and {} more events", events.len() - REPORT_PREVIEW)?;
        }

        if let Some(first) = events.first().filter(|e| e.channel_count() > 0) {
            write!(f, "{}", ChannelDetails(first))?;
        }
        Ok(())
    }
}

/// Channel listing for a single event
struct ChannelDetails<'a>(&'a Event);

impl fmt::Display for ChannelDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "\n{}", rule)?;
        writeln!(f, "Channel details for: {}", self.0.description())?;
        writeln!(f, "{}", rule)?;

        for (i, channel) in self.0.channels().iter().enumerate() {
            writeln!(f, "\nChannel {}: {}", i + 1, channel.name())?;
            writeln!(f, "URL: {}", channel.url())?;
            if let Some(decoded) = channel.decoded_url().filter(|d| !d.is_empty()) {
                writeln!(f, "Decoded: {}", decoded)?;
            }
        }
        Ok(())
    }
}
