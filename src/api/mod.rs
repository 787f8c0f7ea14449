//! Service access
//!
//! # Module Structure
//!
//! - [`client`] - Main client combining resolver, transport, and cache
//! - [`http`] - HTTP utilities for REST calls
//!
//! # Example
//!
//! ```no_run
//! use pokedex::{Pokedex, PokedexConfig};
//!
//! async fn example() -> pokedex::Result<()> {
//!     let client = Pokedex::new(PokedexConfig::default())?;
//!     let berry = client.get_berry_by_name("cheri").await?;
//!     println!("{} grows in {} hours", berry.name, berry.growth_time);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
