//! Typed client for the PokeAPI REST service
//!
//! Every resource kind the service exposes is available as a typed
//! fetch-by-name (or by-id), batch, and list method on [`Pokedex`]. Responses
//! are cached per URL for the lifetime of the client unless caching is turned
//! off in [`PokedexConfig`].

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod resource;
pub mod types;

pub use api::client::Pokedex;
pub use cache::{MemoryCache, ResponseCache};
pub use config::PokedexConfig;
pub use error::{Error, Result};
pub use resource::{Endpoint, Interval, Request, ResourceKey};
