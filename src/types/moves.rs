//! Moves

use super::common::{
    ApiResource, Description, MachineVersionDetail, Name, NamedApiResource, VerboseEffect,
};
use super::pokemon::AbilityEffectChange;
use serde::{Deserialize, Serialize};

/// A skill a Pokémon uses in battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    /// Percent chance of success; `None` for moves that never miss
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    /// Power points
    pub pp: Option<u32>,
    /// Between -8 and 8; decides move order within a turn
    pub priority: i32,
    pub power: Option<u32>,
    pub contest_combos: Option<ContestComboSets>,
    pub contest_type: Option<NamedApiResource>,
    pub contest_effect: Option<ApiResource>,
    pub damage_class: NamedApiResource,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_changes: Vec<AbilityEffectChange>,
    pub flavor_text_entries: Vec<MoveFlavorText>,
    pub generation: NamedApiResource,
    #[serde(default)]
    pub learned_by_pokemon: Vec<NamedApiResource>,
    pub machines: Vec<MachineVersionDetail>,
    pub meta: Option<MoveMetaData>,
    pub names: Vec<Name>,
    pub past_values: Vec<PastMoveStatValues>,
    pub stat_changes: Vec<MoveStatChange>,
    pub super_contest_effect: Option<ApiResource>,
    pub target: NamedApiResource,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestComboSets {
    pub normal: ContestComboDetail,
    #[serde(rename = "super")]
    pub super_: ContestComboDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestComboDetail {
    pub use_before: Option<Vec<NamedApiResource>>,
    pub use_after: Option<Vec<NamedApiResource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMetaData {
    pub ailment: NamedApiResource,
    pub category: NamedApiResource,
    /// `None` if the move always hits once
    pub min_hits: Option<u32>,
    pub max_hits: Option<u32>,
    /// `None` if the move always lasts one turn
    pub min_turns: Option<u32>,
    pub max_turns: Option<u32>,
    /// HP drain if positive, recoil if negative, in percent of damage done
    pub drain: i32,
    /// HP gained, in percent of the user's maximum
    pub healing: i32,
    pub crit_rate: u32,
    pub ailment_chance: u32,
    pub flinch_chance: u32,
    pub stat_chance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatChange {
    pub change: i32,
    pub stat: NamedApiResource,
}

/// Values a move had before a version group changed them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastMoveStatValues {
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub effect_entries: Vec<VerboseEffect>,
    #[serde(rename = "type")]
    pub type_: Option<NamedApiResource>,
    pub version_group: NamedApiResource,
}

/// Status condition caused by a move, e.g. paralysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAilment {
    pub id: u32,
    pub name: String,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

/// Battle Palace move style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBattleStyle {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCategory {
    pub id: u32,
    pub name: String,
    pub moves: Vec<NamedApiResource>,
    pub descriptions: Vec<Description>,
}

/// Physical, special, or status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDamageClass {
    pub id: u32,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLearnMethod {
    pub id: u32,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub names: Vec<Name>,
    pub version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTarget {
    pub id: u32,
    pub name: String,
    pub descriptions: Vec<Description>,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}
