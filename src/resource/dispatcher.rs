//! Fetch/Cache Dispatcher
//!
//! Executes resolved URLs against the service, consulting and populating the
//! response cache, and assembles the result in the shape the request asked
//! for.

use super::resolver::Resolution;
use crate::api::http::HttpClient;
use crate::cache::ResponseCache;
use crate::config::PokedexConfig;
use crate::error::{Error, Result};
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Raw result of a dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    Single(Value),
    /// One body per requested URL, in request order
    Batch(Vec<Value>),
    /// The `{count, next, previous, results}` envelope, untouched
    List(Value),
}

impl Dispatched {
    /// Collapse into one JSON value; batches become an array
    pub fn into_value(self) -> Value {
        match self {
            Dispatched::Single(value) | Dispatched::List(value) => value,
            Dispatched::Batch(values) => Value::Array(values),
        }
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    http: HttpClient,
    cache: Arc<dyn ResponseCache>,
    caching: bool,
    cache_ttl: Duration,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(http: HttpClient, cache: Arc<dyn ResponseCache>, config: &PokedexConfig) -> Self {
        Self {
            http,
            cache,
            caching: config.cache,
            cache_ttl: config.cache_ttl,
            timeout: config.timeout,
        }
    }

    pub fn cache(&self) -> &Arc<dyn ResponseCache> {
        &self.cache
    }

    /// Fetch one URL, serving it from the cache when possible
    ///
    /// Only successful JSON bodies are stored; failures leave the cache as
    /// it was.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        if self.caching {
            if let Some(value) = self.cache.get(url) {
                tracing::debug!("Cache hit {}", url);
                return Ok(value);
            }
            tracing::debug!("Cache miss {}", url);
        }

        let value = self.http.get(url, self.timeout).await?;

        if self.caching {
            self.cache.set(url, value.clone(), self.cache_ttl);
            tracing::trace!("Cached {}", url);
        }

        Ok(value)
    }

    /// Fetch every URL concurrently, returning bodies in input order
    ///
    /// The first failure rejects the whole call; requests still in flight
    /// at that point are dropped.
    pub async fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Value>> {
        tracing::debug!("Fetching batch of {}", urls.len());
        try_join_all(urls.iter().map(|url| self.fetch(url.as_ref()))).await
    }

    /// Execute a resolved request
    pub async fn dispatch(&self, resolution: &Resolution) -> Result<Dispatched> {
        match resolution {
            Resolution::Single(url) => self.fetch(url).await.map(Dispatched::Single),
            Resolution::Batch(urls) => self.fetch_all(urls).await.map(Dispatched::Batch),
            Resolution::List(url) => self.fetch(url).await.map(Dispatched::List),
        }
    }

    /// Fetch one URL and decode it into a record
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.fetch(url).await?;
        decode(url, value)
    }

    /// Fetch every URL concurrently and decode each body, in input order
    pub async fn fetch_all_as<T: DeserializeOwned>(&self, urls: &[String]) -> Result<Vec<T>> {
        let values = self.fetch_all(urls).await?;
        urls.iter()
            .zip(values)
            .map(|(url, value)| decode(url, value))
            .collect()
    }
}

/// Decode a response body into a record
pub(crate) fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::MalformedResponse {
        url: url.to_string(),
        source,
    })
}
