//! Berries

use super::common::{Name, NamedApiResource};
use serde::{Deserialize, Serialize};

/// Small fruit that restores HP, cures status, or boosts stats when eaten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub id: u32,
    pub name: String,
    /// Hours for the tree to grow one stage
    pub growth_time: u32,
    pub max_harvest: u32,
    pub natural_gift_power: u32,
    /// Size in millimeters
    pub size: u32,
    pub smoothness: u32,
    pub soil_dryness: u32,
    pub firmness: NamedApiResource,
    pub flavors: Vec<BerryFlavorMap>,
    /// The item this berry corresponds to
    pub item: NamedApiResource,
    pub natural_gift_type: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlavorMap {
    pub potency: u32,
    pub flavor: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFirmness {
    pub id: u32,
    pub name: String,
    pub berries: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

/// Flavor that decides whether a Pokémon benefits from a berry, by nature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlavor {
    pub id: u32,
    pub name: String,
    pub berries: Vec<FlavorBerryMap>,
    pub contest_type: NamedApiResource,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorBerryMap {
    pub potency: u32,
    pub berry: NamedApiResource,
}
