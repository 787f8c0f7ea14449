//! Locations

use super::common::{GenerationGameIndex, Name, NamedApiResource, VersionEncounterDetail};
use serde::{Deserialize, Serialize};

/// City, route, or other place that can be visited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub region: Option<NamedApiResource>,
    pub names: Vec<Name>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub areas: Vec<NamedApiResource>,
}

/// Section of a location with its own set of possible encounters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    pub location: NamedApiResource,
    pub names: Vec<Name>,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMethodRate {
    pub encounter_method: NamedApiResource,
    pub version_details: Vec<EncounterVersionDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterVersionDetails {
    pub rate: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedApiResource,
    pub version_details: Vec<VersionEncounterDetail>,
}

/// Pal Park grouping of encounters, similar to a habitat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkArea {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_encounters: Vec<PalParkEncounterSpecies>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkEncounterSpecies {
    pub base_score: u32,
    pub rate: u32,
    pub pokemon_species: NamedApiResource,
}

/// Organized area of the world, e.g. Kanto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub locations: Vec<NamedApiResource>,
    pub name: String,
    pub names: Vec<Name>,
    pub main_generation: Option<NamedApiResource>,
    pub pokedexes: Vec<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}
