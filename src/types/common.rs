//! Shapes shared by every resource kind

use serde::{Deserialize, Serialize};

/// Reference to a resource addressed only by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Reference to another resource, without embedding its body
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

impl NamedApiResource {
    /// Trailing numeric id of the referenced URL, if it has one
    pub fn id(&self) -> Option<u32> {
        trailing_id(&self.url)
    }
}

impl ApiResource {
    pub fn id(&self) -> Option<u32> {
        trailing_id(&self.url)
    }
}

fn trailing_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// One page of a collection of named resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResourceList {
    /// Total number of resources available
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}

/// One page of a collection of id-only resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub description: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub min_level: u32,
    pub max_level: u32,
    pub condition_values: Vec<NamedApiResource>,
    /// Percent chance that this encounter will occur
    pub chance: u32,
    pub method: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    /// Absent on contest effects
    pub version: Option<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationGameIndex {
    pub game_index: u32,
    pub generation: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineVersionDetail {
    pub machine: ApiResource,
    pub version_group: NamedApiResource,
}

/// Localized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerboseEffect {
    pub effect: String,
    pub short_effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedApiResource,
    /// Total percentage of all encounter potential
    pub max_chance: u32,
    pub encounter_details: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGameIndex {
    pub game_index: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupFlavorText {
    pub text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}
