//! HTTP utilities for PokeAPI REST calls

use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// HTTP client wrapper for read-only API calls
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client })
    }

    /// Make a GET request, resolving only on a 2xx JSON body
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let network = |source| Error::Network {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        let body = response.text().await.map_err(network)?;

        if !status.is_success() {
            if status.is_server_error() {
                tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            } else {
                tracing::warn!("API error: {} - {}", status, sanitize_for_log(&body));
            }
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!("Unparseable body from {}: {}", url, sanitize_for_log(&body));
            Error::MalformedResponse {
                url: url.to_string(),
                source,
            }
        })
    }
}

/// Format an API error for display
pub fn format_api_error(error: &Error) -> String {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            404 => "Resource not found.".to_string(),
            429 => "Rate limit exceeded. Please try again later.".to_string(),
            400 => "Invalid request. Check your parameters.".to_string(),
            500 | 502 | 503 | 504 => {
                "Service temporarily unavailable. Please try again.".to_string()
            }
            _ => format!("Request failed with status {}.", status),
        };
    }

    match error {
        Error::UnknownEndpoint(name) => {
            format!("Unknown endpoint '{}'. Run with --names to list them.", name)
        }
        Error::Network { .. } if error.is_timeout() => {
            "Request timed out. Check your network connection and try again.".to_string()
        }
        Error::Network { .. } => {
            "Request failed. Check your network connection and try again.".to_string()
        }
        Error::MalformedResponse { .. } => "The service returned an unexpected response.".to_string(),
        _ => error.to_string(),
    }
}
