//! Wild encounters

use super::common::{Name, NamedApiResource};
use serde::{Deserialize, Serialize};

/// How the player can run into a wild Pokémon, e.g. walking in tall grass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMethod {
    pub id: u32,
    pub name: String,
    /// A good value for sorting
    pub order: u32,
    pub names: Vec<Name>,
}

/// Condition affecting which Pokémon appear, e.g. time of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterCondition {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub values: Vec<NamedApiResource>,
}

/// One state of an encounter condition, e.g. day or night
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterConditionValue {
    pub id: u32,
    pub name: String,
    pub condition: NamedApiResource,
    pub names: Vec<Name>,
}
