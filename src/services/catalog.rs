//! Static sports channel catalog
//!
//! The channel directory page is not machine-readable, so the list below is
//! maintained by hand. Player URLs are composed against the catalog host; the
//! embed URL behind each player needs a browser visit and is left empty.

use crate::config::Config;
use crate::models::{CatalogDocument, ChannelCatalogEntry, PlaybackHeaders, PlaybackRequirements};

/// Date the channel list was last captured
pub const EXTRACTION_DATE: &str = "2024-12-06";

const SOURCE: &str = "fast-tv.net";
const CATEGORY: &str = "Sport";
const NOTE: &str =
    "Player URLs contain the video players. Embed URLs need to be extracted from each player page.";

/// One hardcoded channel: display name, player path, logo URL
#[derive(Debug, Clone, Copy)]
pub struct ChannelSeed {
    pub name: &'static str,
    pub player_path: &'static str,
    pub logo: &'static str,
}

const fn seed(name: &'static str, player_path: &'static str, logo: &'static str) -> ChannelSeed {
    ChannelSeed {
        name,
        player_path,
        logo,
    }
}

/// Sports channels in directory order
pub const CHANNELS: &[ChannelSeed] = &[
    seed("CanalliveSport-1", "/player/CanalliveSport-1", "https://i.postimg.cc/sXNGtdFp/canallive-1.webp"),
    seed("CanalliveSport-2", "/player/CanalliveSport-2", "https://i.postimg.cc/RC2XH236/canallive-2.webp"),
    seed("CanalliveSport-3", "/player/CanalliveSport-3", "https://i.postimg.cc/rwkjhWNq/canallive-3.webp"),
    seed("CanalliveSport-4", "/player/CanalliveSport-4", "https://i.postimg.cc/k5jyXH35/Canallive-4.webp"),
    seed("Eurosport-1", "/player/Eurosport-1", "https://i.postimg.cc/nLJCvxmz/euro1-nou.webp"),
    seed("Eurosport-2", "/player/Eurosport-2", "https://i.postimg.cc/MKLBfgtM/Euro-2-nou.webp"),
    seed("SportTv-1", "/player/SportTv-1", "https://i.postimg.cc/KYsXTMbq/sport-tv-1.webp"),
    seed("SportTv-2", "/player/SportTv-2", "https://i.postimg.cc/Wzzhnrqd/sport-tv-2.webp"),
    seed("SportTv-3", "/player/SportTv-3", "https://i.postimg.cc/MGscjdXC/sport-tv-3.webp"),
    seed("Sky-Sports-Arena", "/player/Sky-Sports-Arena", "https://i.postimg.cc/Y9JfyMXW/aky-arena.webp"),
    seed("Sky-Sports-Main-Event", "/player/Sky-Sports-Main-Event", "https://i.postimg.cc/0NsCCWJk/sky-main-event.webp"),
    seed("Sky-Sports-Footbal", "/player/Sky-Sports-Footbal", "https://i.postimg.cc/1zVZpzwh/sky-fotbal-3.webp"),
    seed("Sky-Sports-F1", "/player/Sky-Sports-F1", "https://i.postimg.cc/JzGwLhTD/sky-F1.webp"),
    seed("Sport-Klub-1", "/player/Sport-Klub-1", "https://i.postimg.cc/QMJk6rnz/sport-klub-1.webp"),
    seed("Sport-Klub-2", "/player/Sport-Klub-2", "https://i.postimg.cc/D0n0y8Qv/sport-klub-2.webp"),
    seed("Sport-Klub-3", "/player/Sport-Klub-3", "https://i.postimg.cc/fTx4f8hr/sport-klub-3.webp"),
    seed("Sport-Klub-4", "/player/Sport-Klub-4", "https://i.postimg.cc/LsW0pPpP/sport-klub-4.webp"),
    seed("Sport-Klub-5", "/player/Sport-Klub-5", "https://i.postimg.cc/FKSnhRsn/sport-klub-5.webp"),
    seed("Sport-Klub-6", "/player/Sport-Klub-6", "https://i.postimg.cc/WbQb0M5W/sport-klub-6.webp"),
    seed("Sport-Klub", "/player/Sport-Klub", "https://i.postimg.cc/3wg5v45y/sport-klub-HD.webp"),
    seed("Tenis-Channel-1", "/player/Tenis-Channel-1", "https://i.postimg.cc/BbQS5gMX/Tenis-channel-1.webp"),
    seed("Tenis-Channel-2", "/player/Tenis-Channel-2", "https://i.postimg.cc/7ZYBvQZK/tenis-channel-2.webp"),
    seed("Tenis-Channel-3", "/player/Tenis-Channel-3", "https://i.postimg.cc/bwCmqHGp/tenis-channel-3.webp"),
    seed("Tenis-Channel-4", "/player/Tenis-Channel-4", "https://i.postimg.cc/NG6bKwyN/tenis-channel-4.webp"),
    seed("Tenis-Channel-5", "/player/Tenis-Channel-5", "https://i.postimg.cc/j5VQj8R0/tenis-channel-5.webp"),
    seed("Tenis-Channel-6", "/player/Tenis-Channel-6", "https://i.postimg.cc/HW94p4KR/tenis-channel-6.webp"),
    seed("Tenis-Channel-7", "/player/Tenis-Channel-7", "https://i.postimg.cc/T13y2m5v/tenis-channel-7.webp"),
    seed("Impact", "/player/Impact", "https://i.postimg.cc/6qCBmJZb/Impact-Wrestling.webp"),
    seed("Sports-TV", "/player/Sports-TV", "https://i.postimg.cc/nLkxWjdy/sports-tv-turkia.webp"),
    seed("ZiggoSport-1", "/player/ZiggoSport-1", "https://i.postimg.cc/rpLPBNJt/Ziggo-sport.webp"),
    seed("ZiggoSport-2", "/player/ZiggoSport-2", "https://i.postimg.cc/vB026FdW/ziggo-sport-2.webp"),
    seed("ZiggoSport-3", "/player/ZiggoSport-3", "https://i.postimg.cc/Hscvjhvy/ziggo-sport-3.webp"),
    seed("ZiggoSport-5", "/player/ZiggoSport-5", "https://i.postimg.cc/2jLn7vTt/ziggo-sport-5.webp"),
    seed("SportItalia", "/player/SportItalia", "https://i.postimg.cc/sf0cTbGX/sport-italia.webp"),
    seed("NBA-TV", "/player/NBA-TV", "https://i.postimg.cc/9M2LbP0D/NBA-TV.webp"),
    seed("BeinSport-Xtra-n", "/player/BeinSport-Xtra-n", "https://i.postimg.cc/7LRb3NGF/beinsport-xtra-n.webp"),
    seed("Live1", "/player/Live1", "https://i.postimg.cc/RZhMrkL1/live-1.webp"),
    seed("PrimaSport1", "/player/PrimaSport1", "https://i.postimg.cc/0jfNJS2s/prima-sport-1.webp"),
    seed("PrimaSport2", "/player/PrimaSport2", "https://i.postimg.cc/MZv9xfmC/prima-sport-2.webp"),
    seed("PrimaSport3", "/player/PrimaSport3", "https://i.postimg.cc/7L55b4tZ/prima-sport-3.webp"),
    seed("PrimaSport4", "/player/PrimaSport4", "https://i.postimg.cc/8CvTqznM/prima-sport-4.webp"),
    seed("PrimaSport5", "/player/PrimaSport5", "https://i.postimg.cc/52wPTcSj/prima-sport-5.webp"),
    seed("SporTv", "/player/SporTv", "https://i.postimg.cc/d3r3cXxr/sport-tv-brasil.webp"),
    seed("FIFA+", "/player/FIFA%2B", "https://i.postimg.cc/QdPHvchH/Fifa.png"),
    seed("RETE-8Sport", "/player/RETE-8Sport", "https://i.postimg.cc/N01tw31Z/rete8.png"),
    seed("Live3", "/player/Live3", "https://i.postimg.cc/DwTR7zNx/live3.png"),
    seed("Auto-Moto", "/player/Auto-Moto", "https://i.postimg.cc/MGXSV06W/moto-1.png"),
    seed("Live4", "/player/Live4", "https://i.postimg.cc/3xsB0XCy/live4.webp"),
    seed("Live2", "/player/Live2", "https://i.postimg.cc/Y9BQPjMS/live-2.webp"),
    seed("RaiSport", "/player/RaiSport", "https://i.postimg.cc/ZRSNvbFZ/raisport.webp"),
    seed("Bike", "/player/Bike", "https://i.postimg.cc/vZ1JCdC1/Bike.webp"),
    seed("RealMadrid-TV", "/player/RealMadrid-TV", "https://i.postimg.cc/Gh3Y5vqB/real-madrid.webp"),
    seed("Sportivo-italiano", "/player/Sportivo-italiano", "https://iili.io/Kx7bkR2.webp"),
    seed("ArenaTenis", "/player/ArenaTenis", "https://i.postimg.cc/y8836M8m/Arena-Tenis.webp"),
    seed("FIFA+2", "/player/FIFA%2B2", "https://i.postimg.cc/VLrvwTyq/Fifa.webp"),
];

/// Composes catalog entries for a player host
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    base_host: String,
    user_agent: String,
}

impl CatalogBuilder {
    /// Create a new builder
    ///
    /// # Arguments
    /// * `base_host` - Player host (e.g., "https://fast-tv.net"); a trailing `/` is dropped
    /// * `user_agent` - User-Agent the players expect
    pub fn new(base_host: &str, user_agent: &str) -> Self {
        Self {
            base_host: base_host.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.catalog_base, &config.playback_user_agent)
    }

    /// Full player URL for a relative player path
    pub fn player_url(&self, player_path: &str) -> String {
        if player_path.starts_with('/') {
            format!("{}{}", self.base_host, player_path)
        } else {
            format!("{}/{}", self.base_host, player_path)
        }
    }

    fn headers(&self) -> PlaybackHeaders {
        PlaybackHeaders {
            user_agent: self.user_agent.clone(),
            referer: self.base_host.clone(),
            origin: self.base_host.clone(),
        }
    }

    /// Expand seeds into catalog entries, keeping their order
    pub fn build_entries(&self, seeds: &[ChannelSeed]) -> Vec<ChannelCatalogEntry> {
        seeds
            .iter()
            .map(|seed| ChannelCatalogEntry {
                name: seed.name.to_string(),
                player_url: self.player_url(seed.player_path),
                logo: seed.logo.to_string(),
                embed_url: None,
                headers: self.headers(),
            })
            .collect()
    }

    /// Build the full catalog document from [`CHANNELS`]
    pub fn build_document(&self) -> CatalogDocument {
        let channels = self.build_entries(CHANNELS);
        CatalogDocument {
            source: SOURCE.to_string(),
            category: CATEGORY.to_string(),
            total_channels: channels.len(),
            extraction_date: EXTRACTION_DATE.to_string(),
            note: NOTE.to_string(),
            playback_requirements: PlaybackRequirements {
                headers_required: true,
                referer: format!("{}/", self.base_host),
                user_agent: self.user_agent.clone(),
            },
            channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const BASE: &str = "https://fast-tv.net";
    const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

    #[test]
    fn test_player_url_is_base_plus_path() {
        let builder = CatalogBuilder::new(BASE, UA);
        for (seed, entry) in CHANNELS.iter().zip(builder.build_entries(CHANNELS)) {
            assert_eq!(entry.player_url, format!("{}{}", BASE, seed.player_path));
            assert!(!entry.player_url["https://".len()..].contains("//"));
        }
    }

    #[test]
    fn test_player_url_separators() {
        let builder = CatalogBuilder::new("https://fast-tv.net/", UA);
        assert_eq!(builder.player_url("/player/Live1"), "https://fast-tv.net/player/Live1");
        assert_eq!(builder.player_url("player/Live1"), "https://fast-tv.net/player/Live1");
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let entries = CatalogBuilder::new(BASE, UA).build_entries(CHANNELS);
        assert_eq!(entries.len(), 55);
        assert_eq!(entries[0].name, "CanalliveSport-1");
        assert_eq!(entries[54].name, "FIFA+2");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        let seeds: Vec<&str> = CHANNELS.iter().map(|s| s.name).collect();
        assert_eq!(names, seeds);
    }

    #[test]
    fn test_encoded_path_kept() {
        let entries = CatalogBuilder::new(BASE, UA).build_entries(CHANNELS);
        let fifa = entries.iter().find(|e| e.name == "FIFA+").unwrap();
        assert_eq!(fifa.player_url, "https://fast-tv.net/player/FIFA%2B");
    }

    #[test]
    fn test_entry_headers_and_empty_embed() {
        let entries = CatalogBuilder::new(BASE, UA).build_entries(&CHANNELS[..1]);
        let entry = &entries[0];
        assert_eq!(entry.embed_url, None);
        assert_eq!(entry.headers.referer, BASE);
        assert_eq!(entry.headers.origin, BASE);
        assert_eq!(entry.headers.user_agent, UA);

        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value["embed_url"], Value::Null);
        assert_eq!(value["headers"]["User-Agent"], UA);
        assert_eq!(value["headers"]["Referer"], BASE);
        assert_eq!(value["headers"]["Origin"], BASE);
    }

    #[test]
    fn test_document_shape() {
        let doc = CatalogBuilder::new(BASE, UA).build_document();
        assert_eq!(doc.total_channels, doc.channels.len());

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["source"], "fast-tv.net");
        assert_eq!(value["category"], "Sport");
        assert_eq!(value["extraction_date"], "2024-12-06");
        assert_eq!(value["playback_requirements"]["headers_required"], true);
        assert_eq!(value["playback_requirements"]["referer"], "https://fast-tv.net/");
        assert_eq!(value["playback_requirements"]["user_agent"], UA);
    }
}
