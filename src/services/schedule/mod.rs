//! Sports schedule normalization
//!
//! The upstream schedule API returns a deeply nested document:
//!
//! ```text
//! {"data": [{"id": 1, "attributes": {
//!     "diary_hour": "20:45", "date_diary": "2025-03-01", "diary_description": "...",
//!     "country": {"data": {"attributes": {"name": "...",
//!         "image": {"data": {"attributes": {"url": "/uploads/flag.png"}}}}}},
//!     "embeds": {"data": [{"attributes": {"embed_name": "...", "embed_iframe": "..."}}]}
//! }}]}
//! ```
//!
//! Flow: [`ScheduleClient::fetch`] → [`EventExtractor::extract_events`] →
//! [`sort_events`]. The payload is never trusted: any field may be missing.

pub mod client;
pub mod decoder;
pub mod extractor;
pub mod lookup;
pub mod sorter;

// Re-exports for convenience
pub use client::ScheduleClient;
pub use decoder::{decode_event_url, resolve_event_url};
pub use extractor::EventExtractor;
pub use sorter::sort_events;
