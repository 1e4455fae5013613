//! Sports schedule normalizer and channel catalog builder.
//!
//! Two independent, single-shot pipelines:
//!
//! - **events**: fetch the raw schedule, flatten it into [`models::Event`]s,
//!   sort them and write `rojadirecta_events.json`.
//! - **catalog**: expand the hardcoded channel list into
//!   [`models::ChannelCatalogEntry`]s and write `sports_channels.json`.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod services;
