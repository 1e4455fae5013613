//! Schedule API Client
//!
//! One GET against the schedule endpoint; no retries.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::errors::FetchError;

/// HTTP client for the raw schedule feed
pub struct ScheduleClient {
    http: Client,
    url: String,
    timeout_ms: u64,
}

impl ScheduleClient {
    /// Create a new schedule client
    ///
    /// # Arguments
    /// * `url` - Schedule endpoint (JSON)
    /// * `user_agent` - User-Agent sent with the request
    /// * `timeout_ms` - Whole-request timeout
    pub fn new(url: &str, user_agent: &str, timeout_ms: u64) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self::with_http(http, url, timeout_ms))
    }

    /// Create from config
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            &config.schedule_url,
            &config.user_agent,
            config.fetch_timeout_ms,
        )
    }

    /// Wrap an already configured reqwest client.
    ///
    /// `timeout_ms` is only used for error reporting; the timeout itself must
    /// be set on `http`.
    pub fn with_http(http: Client, url: &str, timeout_ms: u64) -> Self {
        Self {
            http,
            url: url.to_string(),
            timeout_ms,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw schedule payload.
    ///
    /// Falsy bodies (`null`, `false`, `0`, `""`, `{}`, `[]`) count as
    /// [`FetchError::Empty`].
    pub async fn fetch(&self) -> Result<Value, FetchError> {
        info!("Fetching schedule from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            error!("Schedule endpoint answered {}", status);
            return Err(FetchError::Http(status.as_u16()));
        }

        let text = response.text().await.map_err(|e| self.classify(e))?;
        if text.trim().is_empty() {
            return Err(FetchError::Empty);
        }

        let payload: Value = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse schedule response: {}", e);
            debug!("Response text: {}", text.chars().take(500).collect::<String>());
            FetchError::Parse(e.to_string())
        })?;

        if is_empty_payload(&payload) {
            return Err(FetchError::Empty);
        }

        info!("Schedule fetched ({} bytes)", text.len());
        Ok(payload)
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        error!("Schedule request failed: {}", e);
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_ms)
        } else if e.is_connect() {
            FetchError::Network(format!("Connection failed - server unreachable: {}", e))
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Falsy JSON counts as no data: `null`, `false`, zero, `""`, `{}` and `[]`
fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{direct_client, serve_once, serve_stalled};
    use super::*;
    use serde_json::json;

    fn client(url: &str, timeout_ms: u64) -> ScheduleClient {
        ScheduleClient::with_http(direct_client(timeout_ms), url, timeout_ms)
    }

    #[test]
    fn test_client_construction() {
        let client = ScheduleClient::new("https://a.example/diaries.json", "Agent/1.0", 10_000)
            .expect("client should build");
        assert_eq!(client.url(), "https://a.example/diaries.json");
        assert_eq!(client.timeout_ms, 10_000);
    }

    #[test]
    fn test_is_empty_payload() {
        assert!(is_empty_payload(&Value::Null));
        assert!(is_empty_payload(&json!({})));
        assert!(is_empty_payload(&json!([])));
        assert!(is_empty_payload(&json!(false)));
        assert!(is_empty_payload(&json!(0)));
        assert!(is_empty_payload(&json!(0.0)));
        assert!(is_empty_payload(&json!("")));

        assert!(!is_empty_payload(&json!({"data": []})));
        assert!(!is_empty_payload(&json!(true)));
        assert!(!is_empty_payload(&json!(1)));
        assert!(!is_empty_payload(&json!(-0.5)));
        assert!(!is_empty_payload(&json!("x")));
    }

    #[tokio::test]
    async fn test_fetch_falsy_body_is_empty() {
        for body in ["false", "0", "\"\""] {
            let url = serve_once("200 OK", body.to_string()).await;
            let err = client(&url, 5_000).fetch().await.unwrap_err();
            assert!(matches!(err, FetchError::Empty), "body {}", body);
        }
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", r#"{"data":[{"id":1}]}"#.to_string()).await;
        let payload = client(&url, 5_000).fetch().await.unwrap();
        assert_eq!(payload, json!({"data": [{"id": 1}]}));
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let url = serve_once("500 Internal Server Error", "oops".to_string()).await;
        let err = client(&url, 5_000).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Http(500)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json() {
        let url = serve_once("200 OK", "<html>nope</html>".to_string()).await;
        let err = client(&url, 5_000).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_empty_object() {
        let url = serve_once("200 OK", "{}".to_string()).await;
        let err = client(&url, 5_000).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Empty));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let url = serve_stalled(3_000).await;
        let err = client(&url, 200).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(200)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        // bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}/", addr), 2_000)
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
