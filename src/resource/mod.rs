//! Resource access layer
//!
//! Every typed accessor is a thin instantiation of one mechanism: resolve an
//! endpoint and key to URL(s), then fetch them through the cache.
//!
//! # Architecture
//!
//! - [`registry`] - The fixed endpoint table
//! - [`resolver`] - Builds single, batch, and list URLs
//! - [`dispatcher`] - Fetches URLs through the cache and assembles results
//! - `accessors` - Typed methods on [`Pokedex`](crate::Pokedex), generated from a table
//!
//! # Example
//!
//! ```no_run
//! use pokedex::resource::{Interval, Request};
//! use pokedex::Pokedex;
//!
//! async fn first_moves(client: &Pokedex) -> pokedex::Result<serde_json::Value> {
//!     let request = Request::List(Interval::new().limit(5));
//!     let page = client.get_by_endpoint_name("move", &request).await?;
//!     Ok(page.into_value())
//! }
//! ```

mod accessors;
pub mod dispatcher;
pub mod registry;
pub mod resolver;

pub use dispatcher::{Dispatched, Dispatcher};
pub use registry::{get_all_endpoint_names, get_endpoint, Endpoint, Lookup};
pub use resolver::{Interval, Mode, Request, Resolution, ResourceKey, Resolver};
