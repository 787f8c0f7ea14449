//! Resource Resolver
//!
//! Turns an endpoint plus a request key into the URL(s) to fetch. Pure string
//! construction: no network or cache access happens here.

use super::registry::Endpoint;
use crate::config::PokedexConfig;
use crate::error::Result;
use std::fmt;
use url::Url;

/// Identifier of a single resource: a name or a numeric id
///
/// Names are passed through as given, without case folding or escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Name(String),
    Id(i64),
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Name(name) => f.write_str(name),
            ResourceKey::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for ResourceKey {
    fn from(name: &str) -> Self {
        ResourceKey::Name(name.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(name: String) -> Self {
        ResourceKey::Name(name)
    }
}

impl From<&String> for ResourceKey {
    fn from(name: &String) -> Self {
        ResourceKey::Name(name.clone())
    }
}

macro_rules! impl_from_id {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ResourceKey {
                fn from(id: $ty) -> Self {
                    ResourceKey::Id(i64::from(id))
                }
            }
        )*
    };
}

impl_from_id!(u8, u16, u32, i32, i64);

/// Pagination override for list requests
///
/// Each unset field falls back to the configured default on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Interval {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Single(ResourceKey),
    /// One lookup per key, in order; duplicates are kept
    Batch(Vec<ResourceKey>),
    List(Interval),
}

impl Request {
    pub fn batch<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        Request::Batch(keys.into_iter().map(Into::into).collect())
    }
}

/// Shape of the result the dispatcher must assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Batch,
    List,
}

/// Resolved request: the URL(s) to fetch, in caller order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Single(String),
    Batch(Vec<String>),
    List(String),
}

impl Resolution {
    pub fn mode(&self) -> Mode {
        match self {
            Resolution::Single(_) => Mode::Single,
            Resolution::Batch(_) => Mode::Batch,
            Resolution::List(_) => Mode::List,
        }
    }

    pub fn urls(&self) -> Vec<&str> {
        match self {
            Resolution::Single(url) | Resolution::List(url) => vec![url.as_str()],
            Resolution::Batch(urls) => urls.iter().map(String::as_str).collect(),
        }
    }
}

/// Builds resource URLs from the configured origin and version path
#[derive(Debug, Clone)]
pub struct Resolver {
    base_url: String,
    /// Version path without the leading slash, e.g. `api/v2/`
    version_prefix: String,
    default_limit: u32,
    default_offset: u32,
}

impl Resolver {
    pub fn new(config: &PokedexConfig) -> Self {
        let trimmed = config.version_path.trim_matches('/');
        let version_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}/", trimmed)
        };

        Self {
            base_url: config.base_url(),
            version_prefix,
            default_limit: config.limit,
            default_offset: config.offset,
        }
    }

    /// Version root, always ending in `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a request against an endpoint
    pub fn resolve(&self, endpoint: Endpoint, request: &Request) -> Resolution {
        match request {
            Request::Single(key) => Resolution::Single(self.resource_url(endpoint, key)),
            Request::Batch(keys) => Resolution::Batch(
                keys.iter().map(|key| self.resource_url(endpoint, key)).collect(),
            ),
            Request::List(interval) => Resolution::List(self.list_url(endpoint, interval)),
        }
    }

    /// Resolve a request against an endpoint given by logical name
    pub fn resolve_named(&self, name: &str, request: &Request) -> Result<Resolution> {
        let endpoint: Endpoint = name.parse()?;
        Ok(self.resolve(endpoint, request))
    }

    /// URL of a single resource
    pub fn resource_url(&self, endpoint: Endpoint, key: &ResourceKey) -> String {
        format!("{}{}/{}", self.base_url, endpoint.path(), key)
    }

    /// URL of a collection page
    pub fn list_url(&self, endpoint: Endpoint, interval: &Interval) -> String {
        format!(
            "{}{}?limit={}&offset={}",
            self.base_url,
            endpoint.path(),
            interval.limit.unwrap_or(self.default_limit),
            interval.offset.unwrap_or(self.default_offset),
        )
    }

    /// URL of a resource's sub-collection, e.g. `pokemon/{key}/encounters`
    pub fn sub_resource_url(&self, endpoint: Endpoint, key: &ResourceKey, sub: &str) -> String {
        format!("{}/{}", self.resource_url(endpoint, key), sub)
    }

    /// URL for a raw path
    ///
    /// Absolute URLs pass through untouched. Relative paths are joined onto
    /// the version root, dropping a leading version prefix if present, so
    /// `berry/1`, `/berry/1` and `/api/v2/berry/1` all resolve alike.
    pub fn path_url(&self, path: &str) -> String {
        if let Ok(url) = Url::parse(path) {
            if url.has_host() {
                return path.to_string();
            }
        }

        let relative = path.trim_start_matches('/');
        let relative = if self.version_prefix.is_empty() {
            relative
        } else {
            relative.strip_prefix(&self.version_prefix).unwrap_or(relative)
        };

        format!("{}{}", self.base_url, relative)
    }
}
