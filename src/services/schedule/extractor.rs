//! Schedule flattening
//!
//! Turns the nested upstream payload into [`Event`] records. Every lookup goes
//! through [`lookup`](super::lookup) so a missing or oddly shaped field only
//! costs that field its default, never the item or its siblings.

use serde_json::Value;

use super::decoder::resolve_event_url;
use super::lookup::{dig, dig_array, dig_str};
use crate::config::Config;
use crate::models::{
    Channel, Event, DEFAULT_CHANNEL_NAME, DEFAULT_COUNTRY, DEFAULT_DESCRIPTION, DEFAULT_TIME,
};

/// Image host path served when a country has no flag
const NO_IMAGE_PATH: &str = "/uploads/sin_imagen_d36205f0e8.png";

/// Site path used for embeds that carry no iframe URL
const EMPTY_EMBED_PATH: &str = "/embed/eventos.html?r=";

const COUNTRY_ATTRS: &[&str] = &["attributes", "country", "data", "attributes"];
const FLAG_PATH: &[&str] = &["image", "data", "attributes", "url"];

/// Builds events from raw schedule items
#[derive(Debug, Clone)]
pub struct EventExtractor {
    img_base: String,
    site_base: String,
}

impl EventExtractor {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `img_base` - Host prefixed to relative flag paths
    /// * `site_base` - Host prefixed to relative embed paths
    pub fn new(img_base: &str, site_base: &str) -> Self {
        Self {
            img_base: img_base.trim_end_matches('/').to_string(),
            site_base: site_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.img_base, &config.site_base)
    }

    /// Flag URL used when the schedule provides none
    pub fn no_image_url(&self) -> String {
        format!("{}{}", self.img_base, NO_IMAGE_PATH)
    }

    /// Extract one event per item of the top-level `data` array.
    ///
    /// A payload without `data` (or with a non-array `data`) yields no events.
    pub fn extract_events(&self, payload: &Value) -> Vec<Event> {
        dig_array(payload, &["data"])
            .iter()
            .map(|item| self.extract_event(item))
            .collect()
    }

    /// Flatten a single schedule item
    pub fn extract_event(&self, item: &Value) -> Event {
        let country_attrs = dig(item, COUNTRY_ATTRS);

        let country = country_attrs
            .and_then(|attrs| dig_str(attrs, &["name"]))
            .unwrap_or(DEFAULT_COUNTRY)
            .to_string();

        let flag_url = match country_attrs.and_then(|attrs| dig_str(attrs, FLAG_PATH)) {
            Some(path) if !path.is_empty() => format!("{}{}", self.img_base, path),
            _ => self.no_image_url(),
        };

        let channels = dig_array(item, &["attributes", "embeds", "data"])
            .iter()
            .map(|embed| self.extract_channel(embed))
            .collect();

        Event::new(
            dig(item, &["id"]).cloned().unwrap_or(Value::Null),
            text_or(item, &["attributes", "diary_hour"], DEFAULT_TIME),
            text_or(item, &["attributes", "date_diary"], ""),
            text_or(item, &["attributes", "diary_description"], DEFAULT_DESCRIPTION),
            country,
            flag_url,
            channels,
        )
    }

    fn extract_channel(&self, embed: &Value) -> Channel {
        let raw_url = dig_str(embed, &["attributes", "embed_iframe"])
            .unwrap_or_default()
            .trim();
        let url = self.resolve_embed_url(raw_url);

        let decoded = resolve_event_url(&url);
        let decoded_url = (decoded != url).then_some(decoded);

        Channel::new(
            text_or(embed, &["attributes", "embed_name"], DEFAULT_CHANNEL_NAME),
            url,
            decoded_url,
        )
    }

    /// Make an embed URL absolute
    fn resolve_embed_url(&self, raw_url: &str) -> String {
        if raw_url.starts_with('/') {
            format!("{}{}", self.site_base, raw_url)
        } else if raw_url.is_empty() {
            format!("{}{}", self.site_base, EMPTY_EMBED_PATH)
        } else {
            raw_url.to_string()
        }
    }
}

fn text_or(root: &Value, path: &[&str], default: &str) -> String {
    dig_str(root, path).unwrap_or(default).to_string()
}
