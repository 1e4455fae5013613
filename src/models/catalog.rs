use serde::Serialize;

/// Headers a player needs before it will serve the stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackHeaders {
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
    #[serde(rename = "Referer")]
    pub referer: String,
    #[serde(rename = "Origin")]
    pub origin: String,
}

/// One channel of the static catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelCatalogEntry {
    pub name: String,
    pub player_url: String,
    pub logo: String,
    /// Always `None`: resolving it needs a browser visit to the player page
    pub embed_url: Option<String>,
    pub headers: PlaybackHeaders,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaybackRequirements {
    pub headers_required: bool,
    pub referer: String,
    pub user_agent: String,
}

/// Document written by the catalog pipeline
#[derive(Debug, Serialize)]
pub struct CatalogDocument {
    pub source: String,
    pub category: String,
    pub total_channels: usize,
    pub extraction_date: String,
    pub note: String,
    pub playback_requirements: PlaybackRequirements,
    pub channels: Vec<ChannelCatalogEntry>,
}
