//! Error types
//!
//! Every failure is scoped to the call that triggered it. Nothing here is
//! retried or recovered locally; callers receive the error unchanged.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The logical endpoint name is not in the endpoint table
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Connection error, timeout, or body read failure
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("API request to {url} failed: {status}")]
    Status { url: String, status: StatusCode },

    /// A 2xx body that is not JSON, or not the requested shape
    #[error("malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// HTTP status of a rejected response, if the failure came from one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Network { source, .. } => source.status(),
            _ => None,
        }
    }

    /// True when the service reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// True when the transport gave up waiting for the response
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network { source, .. } if source.is_timeout())
    }

    /// URL of the request that failed, when there was one
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Network { url, .. }
            | Error::Status { url, .. }
            | Error::MalformedResponse { url, .. } => Some(url),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_not_found() {
        let err = Error::Status {
            url: "https://pokeapi.co/api/v2/berry/nope".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.url(), Some("https://pokeapi.co/api/v2/berry/nope"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_unknown_endpoint_has_no_status() {
        let err = Error::UnknownEndpoint("bogus".to_string());
        assert!(!err.is_not_found());
        assert!(err.status().is_none());
        assert!(err.url().is_none());
        assert_eq!(err.to_string(), "unknown endpoint: bogus");
    }

    #[test]
    fn test_malformed_response_keeps_url() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = Error::MalformedResponse {
            url: "https://pokeapi.co/api/v2/".to_string(),
            source,
        };
        assert_eq!(err.url(), Some("https://pokeapi.co/api/v2/"));
        assert!(!err.is_timeout());
    }
}
