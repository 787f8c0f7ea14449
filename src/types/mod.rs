//! Response records
//!
//! Plain serde shapes mirroring the service's JSON. They carry no behavior
//! beyond a few read-only helpers; unknown fields are ignored on decode.

pub mod berries;
pub mod common;
pub mod contests;
pub mod encounters;
pub mod evolution;
pub mod games;
pub mod items;
pub mod languages;
pub mod locations;
pub mod machines;
pub mod moves;
pub mod pokemon;

pub use berries::*;
pub use common::*;
pub use contests::*;
pub use encounters::*;
pub use evolution::*;
pub use games::*;
pub use items::*;
pub use languages::*;
pub use locations::*;
pub use machines::*;
pub use moves::*;
pub use pokemon::*;
