//! Games: generations, Pokédexes, versions

use super::common::{Description, Name, NamedApiResource};
use serde::{Deserialize, Serialize};

/// Grouping of games by the Pokémon they introduce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    pub abilities: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub main_region: NamedApiResource,
    pub moves: Vec<NamedApiResource>,
    pub pokemon_species: Vec<NamedApiResource>,
    pub types: Vec<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}

/// In-game encyclopedia of the Pokémon of a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokedex {
    pub id: u32,
    pub name: String,
    pub is_main_series: bool,
    pub descriptions: Vec<Description>,
    pub names: Vec<Name>,
    pub pokemon_entries: Vec<PokemonEntry>,
    /// `None` for the national dex
    pub region: Option<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub entry_number: u32,
    pub pokemon_species: NamedApiResource,
}

/// A single game release, e.g. Red or Blue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub version_group: NamedApiResource,
}

/// Highly similar versions, e.g. Red and Blue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroup {
    pub id: u32,
    pub name: String,
    /// Roughly release order, with similar versions grouped together
    pub order: u32,
    pub generation: NamedApiResource,
    pub move_learn_methods: Vec<NamedApiResource>,
    pub pokedexes: Vec<NamedApiResource>,
    pub regions: Vec<NamedApiResource>,
    pub versions: Vec<NamedApiResource>,
}
