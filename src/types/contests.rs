//! Contests

use super::common::{Effect, FlavorText, NamedApiResource};
use serde::{Deserialize, Serialize};

/// Category judges use to weigh a Pokémon's condition in contests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestType {
    pub id: u32,
    pub name: String,
    pub berry_flavor: Option<NamedApiResource>,
    pub names: Vec<ContestName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestName {
    pub name: String,
    pub color: String,
    pub language: NamedApiResource,
}

/// Effect of a move when used in a contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestEffect {
    pub id: u32,
    /// Base number of hearts the user gets
    pub appeal: u32,
    /// Base number of hearts the opponent loses
    pub jam: u32,
    pub effect_entries: Vec<Effect>,
    pub flavor_text_entries: Vec<FlavorText>,
}

/// Effect of a move when used in a super contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperContestEffect {
    pub id: u32,
    pub appeal: u32,
    pub flavor_text_entries: Vec<FlavorText>,
    pub moves: Vec<NamedApiResource>,
}
