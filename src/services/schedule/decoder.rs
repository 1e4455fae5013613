//! Embedded link decoding
//!
//! Schedule embeds often point at `.../eventos.html?r=<base64>`, where the
//! payload is the real stream page. Decoding is advisory: a URL that cannot be
//! decoded is still a valid link.

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::errors::DecodeError;

/// Query marker that introduces the encoded target
const PAYLOAD_MARKER: &str = "?r=";

/// Decode the base64 target carried after the first `?r=` in `url`
pub fn decode_event_url(url: &str) -> Result<String, DecodeError> {
    let (_, payload) = url
        .split_once(PAYLOAD_MARKER)
        .ok_or(DecodeError::NoPayload)?;

    let bytes = STANDARD.decode(payload.trim())?;
    Ok(String::from_utf8(bytes)?)
}

/// Best-effort variant of [`decode_event_url`]: falls back to `url` itself
pub fn resolve_event_url(url: &str) -> String {
    match decode_event_url(url) {
        Ok(decoded) => decoded,
        Err(DecodeError::NoPayload) => url.to_string(),
        Err(e) => {
            debug!("Keeping undecoded URL {}: {}", url, e);
            url.to_string()
        }
    }
}
