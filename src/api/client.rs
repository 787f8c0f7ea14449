//! Pokedex Client
//!
//! Main client for the service, combining the resolver, the HTTP client, and
//! the response cache.

use super::http::HttpClient;
use crate::cache::{MemoryCache, ResponseCache};
use crate::config::PokedexConfig;
use crate::error::Result;
use crate::resource::dispatcher::{Dispatched, Dispatcher};
use crate::resource::registry::Endpoint;
use crate::resource::resolver::{Interval, Request, ResourceKey, Resolver};
use crate::types::LocationAreaEncounter;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Main Pokedex client
///
/// Cheap to clone; clones share the same cache.
#[derive(Clone)]
pub struct Pokedex {
    config: PokedexConfig,
    resolver: Resolver,
    dispatcher: Dispatcher,
}

impl Pokedex {
    /// Create a client with a fresh in-memory cache
    pub fn new(config: PokedexConfig) -> Result<Self> {
        Self::with_cache(config, Arc::new(MemoryCache::new()))
    }

    /// Create a client backed by the given cache
    pub fn with_cache(config: PokedexConfig, cache: Arc<dyn ResponseCache>) -> Result<Self> {
        let http = HttpClient::new()?;
        let resolver = Resolver::new(&config);
        let dispatcher = Dispatcher::new(http, cache, &config);

        tracing::debug!(
            "Pokedex client for {} (cache: {})",
            resolver.base_url(),
            config.cache
        );

        Ok(Self {
            config,
            resolver,
            dispatcher,
        })
    }

    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    // =========================================================================
    // Raw access
    // =========================================================================

    /// Fetch a raw path or absolute URL, bypassing the endpoint table
    pub async fn resource(&self, path: &str) -> Result<Value> {
        self.dispatcher.fetch(&self.resolver.path_url(path)).await
    }

    /// Fetch several raw paths concurrently, returning bodies in input order
    pub async fn resources<I, S>(&self, paths: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls: Vec<String> = paths
            .into_iter()
            .map(|path| self.resolver.path_url(path.as_ref()))
            .collect();
        self.dispatcher.fetch_all(&urls).await
    }

    /// Map of endpoint name to collection URL, as advertised by the service
    pub async fn get_endpoints_list(&self) -> Result<BTreeMap<String, String>> {
        self.dispatcher.fetch_as(self.resolver.base_url()).await
    }

    /// Run a request against an endpoint given by logical name
    ///
    /// Fails with [`Error::UnknownEndpoint`](crate::Error::UnknownEndpoint)
    /// before any network access when the name is not in the table.
    pub async fn get_by_endpoint_name(&self, name: &str, request: &Request) -> Result<Dispatched> {
        let resolution = self.resolver.resolve_named(name, request)?;
        self.dispatcher.dispatch(&resolution).await
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    /// Fetch one record of `endpoint`
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        key: impl Into<ResourceKey>,
    ) -> Result<T> {
        let url = self.resolver.resource_url(endpoint, &key.into());
        self.dispatcher.fetch_as(&url).await
    }

    /// Fetch several records of `endpoint` concurrently, in key order
    pub async fn get_many<T, I, K>(&self, endpoint: Endpoint, keys: I) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        let urls: Vec<String> = keys
            .into_iter()
            .map(|key| self.resolver.resource_url(endpoint, &key.into()))
            .collect();
        self.dispatcher.fetch_all_as(&urls).await
    }

    /// Fetch one page of the `endpoint` collection
    pub async fn list<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        interval: Option<Interval>,
    ) -> Result<T> {
        let url = self.resolver.list_url(endpoint, &interval.unwrap_or_default());
        self.dispatcher.fetch_as(&url).await
    }

    /// Location areas where a Pokémon can be encountered
    pub async fn get_pokemon_encounter_areas_by_name(
        &self,
        key: impl Into<ResourceKey>,
    ) -> Result<Vec<LocationAreaEncounter>> {
        let url = self
            .resolver
            .sub_resource_url(Endpoint::Pokemon, &key.into(), "encounters");
        self.dispatcher.fetch_as(&url).await
    }

    // =========================================================================
    // Cache management
    // =========================================================================

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.dispatcher.cache().clear();
    }

    /// Number of live cached responses
    pub fn cache_len(&self) -> usize {
        self.dispatcher.cache().len()
    }
}
