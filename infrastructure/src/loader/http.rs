//! Spec download over HTTP

use agent_tools_application::LoadError;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Settings for the HTTP client used to fetch specs
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

/// Build a client with the configured agent string and timeout
pub(crate) fn build_client(settings: &HttpSettings) -> Result<Client, LoadError> {
    Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(settings.timeout)
        .build()
        .map_err(|e| LoadError::Http(e.to_string()))
}

/// `GET` `url` and decode the body as text
///
/// A charset named in `Content-Type` is honored. Without one the body is
/// read as UTF-8, replacing invalid sequences.
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String, LoadError> {
    info!("Fetching URL: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(LoadError::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();
    debug!(content_type = %content_type, "spec response received");

    match charset(&content_type) {
        Some(encoding) if !is_utf8_label(encoding) => {
            debug!(encoding, "decoding with Content-Type charset");
            response
                .text()
                .await
                .map_err(|e| LoadError::Http(format!("Failed to read response body: {e}")))
        }
        _ => {
            let body = response
                .bytes()
                .await
                .map_err(|e| LoadError::Http(format!("Failed to read response body: {e}")))?;
            Ok(decode_utf8(&body))
        }
    }
}

fn charset(content_type: &str) -> Option<&str> {
    let (_, rest) = content_type.split_once("charset=")?;
    let encoding = rest.split(';').next().unwrap_or(rest).trim().trim_matches('"');
    (!encoding.is_empty()).then_some(encoding)
}

fn is_utf8_label(encoding: &str) -> bool {
    matches!(encoding, "utf-8" | "utf8")
}

fn decode_utf8(body: &[u8]) -> String {
    match std::str::from_utf8(body) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!("Response is not valid UTF-8 ({}); using replacement characters", e);
            String::from_utf8_lossy(body).into_owned()
        }
    }
}
