//! Pokémon, species, and the attributes that describe them

use super::common::{
    ApiResource, Description, Effect, FlavorText, GenerationGameIndex, Name, NamedApiResource,
    VerboseEffect, VersionEncounterDetail, VersionGameIndex,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Passive effect a Pokémon has in battle or in the overworld
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    pub is_main_series: bool,
    pub generation: NamedApiResource,
    pub names: Vec<Name>,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_changes: Vec<AbilityEffectChange>,
    pub flavor_text_entries: Vec<AbilityFlavorText>,
    pub pokemon: Vec<AbilityPokemon>,
}

/// Previous effect of an ability or move in an older version group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffectChange {
    pub effect_entries: Vec<Effect>,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityPokemon {
    pub is_hidden: bool,
    /// Pokémon have up to three ability slots
    pub slot: u32,
    pub pokemon: NamedApiResource,
}

/// Which stat holds a Pokémon's highest IV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: u32,
    /// Remainder of the highest IV divided by 5
    pub gene_modulo: u32,
    pub possible_values: Vec<u32>,
    pub highest_stat: NamedApiResource,
    pub descriptions: Vec<Description>,
}

/// Breeding compatibility group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggGroup {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gender {
    pub id: u32,
    pub name: String,
    pub pokemon_species_details: Vec<PokemonSpeciesGender>,
    pub required_for_evolution: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpeciesGender {
    /// Chance of being female, in eighths; -1 for genderless
    pub rate: i32,
    pub pokemon_species: NamedApiResource,
}

/// Speed at which Pokémon gain levels through experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRate {
    pub id: u32,
    pub name: String,
    /// LaTeX formula for the experience curve
    pub formula: String,
    pub descriptions: Vec<Description>,
    pub levels: Vec<GrowthRateExperienceLevel>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRateExperienceLevel {
    pub level: u32,
    pub experience: u32,
}

/// Influences how a Pokémon's stats grow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature {
    pub id: u32,
    pub name: String,
    pub decreased_stat: Option<NamedApiResource>,
    pub increased_stat: Option<NamedApiResource>,
    pub hates_flavor: Option<NamedApiResource>,
    pub likes_flavor: Option<NamedApiResource>,
    pub pokeathlon_stat_changes: Vec<NatureStatChange>,
    pub move_battle_style_preferences: Vec<MoveBattleStylePreference>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureStatChange {
    pub max_change: i32,
    pub pokeathlon_stat: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBattleStylePreference {
    pub low_hp_preference: u32,
    pub high_hp_preference: u32,
    pub move_battle_style: NamedApiResource,
}

/// Attribute of performance in Pokéathlons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokeathlonStat {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub affecting_natures: NaturePokeathlonStatAffectSets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffectSets {
    pub increase: Vec<NaturePokeathlonStatAffect>,
    pub decrease: Vec<NaturePokeathlonStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturePokeathlonStatAffect {
    pub max_change: i32,
    pub nature: NamedApiResource,
}

/// A creature variety: base stats, abilities, types, moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    pub is_default: bool,
    pub order: i32,
    /// Weight in hectograms
    pub weight: u32,
    pub abilities: Vec<PokemonAbility>,
    pub forms: Vec<NamedApiResource>,
    pub game_indices: Vec<VersionGameIndex>,
    pub held_items: Vec<PokemonHeldItem>,
    /// Link to the list of location areas this Pokémon can be found in
    pub location_area_encounters: String,
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub past_types: Vec<PokemonTypePast>,
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub cries: Option<PokemonCries>,
    pub species: NamedApiResource,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: u32,
    pub ability: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypePast {
    /// Last generation in which the listed types applied
    pub generation: NamedApiResource,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedApiResource,
    pub version_details: Vec<PokemonHeldItemVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHeldItemVersion {
    pub version: NamedApiResource,
    pub rarity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    pub version_group_details: Vec<PokemonMoveVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMoveVersion {
    pub move_learn_method: NamedApiResource,
    pub version_group: NamedApiResource,
    pub level_learned_at: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedApiResource,
    /// Effort points gained by defeating this Pokémon
    pub effort: u32,
    pub base_stat: u32,
}

/// Sprite URLs; `other` and `versions` are kept as raw JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny_female: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny_female: Option<String>,
    #[serde(default)]
    pub other: Option<Value>,
    #[serde(default)]
    pub versions: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

/// Entry of `pokemon/{id}/encounters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaEncounter {
    pub location_area: NamedApiResource,
    pub version_details: Vec<VersionEncounterDetail>,
}

/// Pokédex sorting color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonColor {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

/// Cosmetic variant of a Pokémon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonForm {
    pub id: u32,
    pub name: String,
    pub order: i32,
    pub form_order: i32,
    pub is_default: bool,
    pub is_battle_only: bool,
    pub is_mega: bool,
    pub form_name: String,
    pub pokemon: NamedApiResource,
    pub sprites: PokemonFormSprites,
    pub version_group: NamedApiResource,
    pub names: Vec<Name>,
    pub form_names: Vec<Name>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFormSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
}

/// Terrain a Pokémon can be found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHabitat {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

/// Pokédex sorting shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonShape {
    pub id: u32,
    pub name: String,
    pub awesome_names: Vec<AwesomeName>,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwesomeName {
    pub awesome_name: String,
    pub language: NamedApiResource,
}

/// Attributes shared by every variety of a species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub order: i32,
    /// Chance of being female, in eighths; -1 for genderless
    pub gender_rate: i32,
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub is_baby: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub hatch_counter: Option<u32>,
    pub has_gender_differences: bool,
    pub forms_switchable: bool,
    pub growth_rate: NamedApiResource,
    pub pokedex_numbers: Vec<PokemonSpeciesDexEntry>,
    pub egg_groups: Vec<NamedApiResource>,
    pub color: NamedApiResource,
    pub shape: Option<NamedApiResource>,
    pub evolves_from_species: Option<NamedApiResource>,
    pub evolution_chain: Option<ApiResource>,
    pub habitat: Option<NamedApiResource>,
    pub generation: NamedApiResource,
    pub names: Vec<Name>,
    pub pal_park_encounters: Vec<PalParkEncounterArea>,
    pub flavor_text_entries: Vec<FlavorText>,
    pub form_descriptions: Vec<Description>,
    pub genera: Vec<Genus>,
    pub varieties: Vec<PokemonSpeciesVariety>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpeciesDexEntry {
    pub entry_number: u32,
    pub pokedex: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkEncounterArea {
    pub base_score: u32,
    pub rate: u32,
    pub area: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpeciesVariety {
    pub is_default: bool,
    pub pokemon: NamedApiResource,
}

/// Battle statistic, e.g. attack or speed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: u32,
    pub name: String,
    pub game_index: u32,
    pub is_battle_only: bool,
    pub affecting_moves: MoveStatAffectSets,
    pub affecting_natures: NatureStatAffectSets,
    pub characteristics: Vec<ApiResource>,
    pub move_damage_class: Option<NamedApiResource>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatAffectSets {
    pub increase: Vec<MoveStatAffect>,
    pub decrease: Vec<MoveStatAffect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStatAffect {
    pub change: i32,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatureStatAffectSets {
    pub increase: Vec<NamedApiResource>,
    pub decrease: Vec<NamedApiResource>,
}

/// Elemental type of Pokémon and moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub id: u32,
    pub name: String,
    pub damage_relations: TypeRelations,
    #[serde(default)]
    pub past_damage_relations: Vec<TypeRelationsPast>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub generation: NamedApiResource,
    pub move_damage_class: Option<NamedApiResource>,
    pub names: Vec<Name>,
    pub pokemon: Vec<TypePokemon>,
    pub moves: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePokemon {
    pub slot: u32,
    pub pokemon: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    pub no_damage_to: Vec<NamedApiResource>,
    pub half_damage_to: Vec<NamedApiResource>,
    pub double_damage_to: Vec<NamedApiResource>,
    pub no_damage_from: Vec<NamedApiResource>,
    pub half_damage_from: Vec<NamedApiResource>,
    pub double_damage_from: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelationsPast {
    /// Last generation in which these relations applied
    pub generation: NamedApiResource,
    pub damage_relations: TypeRelations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::fixtures::{english, named, unnamed};
    use serde_json::{json, Value};

    fn species_json(name: &str, id: u32, evolves_from: Value) -> Value {
        json!({
            "id": id,
            "name": name,
            "order": id,
            "gender_rate": 1,
            "capture_rate": 45,
            "base_happiness": 50,
            "is_baby": false,
            "is_legendary": false,
            "is_mythical": false,
            "hatch_counter": 20,
            "has_gender_differences": false,
            "forms_switchable": false,
            "growth_rate": named("medium-slow", "growth-rate", 4),
            "pokedex_numbers": [{"entry_number": id, "pokedex": named("national", "pokedex", 1)}],
            "egg_groups": [named("monster", "egg-group", 1), named("plant", "egg-group", 7)],
            "color": named("green", "pokemon-color", 5),
            "shape": named("quadruped", "pokemon-shape", 8),
            "evolves_from_species": evolves_from,
            "evolution_chain": unnamed("evolution-chain", 1),
            "habitat": named("grassland", "pokemon-habitat", 3),
            "generation": named("generation-i", "generation", 1),
            "names": [english(name)],
            "pal_park_encounters": [{"base_score": 50, "rate": 30, "area": named("field", "pal-park-area", 2)}],
            "flavor_text_entries": [{
                "flavor_text": "A strange seed was planted on its back at birth.",
                "language": named("en", "language", 9),
                "version": named("red", "version", 1)
            }],
            "form_descriptions": [],
            "genera": [{"genus": "Seed Pokémon", "language": named("en", "language", 9)}],
            "varieties": [{"is_default": true, "pokemon": named(name, "pokemon", id)}]
        })
    }

    #[test]
    fn test_base_species_evolves_from_nothing() {
        let bulbasaur: PokemonSpecies =
            serde_json::from_value(species_json("bulbasaur", 1, Value::Null)).unwrap();
        assert!(bulbasaur.evolves_from_species.is_none());
        assert_eq!(bulbasaur.evolution_chain.unwrap().id(), Some(1));
        assert_eq!(bulbasaur.genera[0].genus, "Seed Pokémon");

        let ivysaur: PokemonSpecies = serde_json::from_value(species_json(
            "ivysaur",
            2,
            named("bulbasaur", "pokemon-species", 1),
        ))
        .unwrap();
        assert_eq!(ivysaur.evolves_from_species.unwrap().name, "bulbasaur");
    }

    #[test]
    fn test_species_with_unknown_habitat() {
        let mut raw = species_json("meltan", 808, Value::Null);
        raw["habitat"] = Value::Null;
        raw["shape"] = Value::Null;
        raw["base_happiness"] = Value::Null;
        raw["hatch_counter"] = Value::Null;

        let meltan: PokemonSpecies = serde_json::from_value(raw).unwrap();
        assert!(meltan.habitat.is_none());
        assert!(meltan.shape.is_none());
        assert!(meltan.base_happiness.is_none());
    }

    #[test]
    fn test_neutral_nature_has_no_stat_changes() {
        let hardy: Nature = serde_json::from_value(json!({
            "id": 1,
            "name": "hardy",
            "decreased_stat": null,
            "increased_stat": null,
            "hates_flavor": null,
            "likes_flavor": null,
            "pokeathlon_stat_changes": [
                {"max_change": 1, "pokeathlon_stat": named("speed", "pokeathlon-stat", 1)},
                {"max_change": -1, "pokeathlon_stat": named("power", "pokeathlon-stat", 2)}
            ],
            "move_battle_style_preferences": [{
                "low_hp_preference": 61,
                "high_hp_preference": 61,
                "move_battle_style": named("attack", "move-battle-style", 1)
            }],
            "names": [english("Hardy")]
        }))
        .unwrap();

        assert!(hardy.increased_stat.is_none());
        assert!(hardy.decreased_stat.is_none());
        assert_eq!(hardy.pokeathlon_stat_changes[1].max_change, -1);
    }

    #[test]
    fn test_hp_stat_has_no_damage_class() {
        let hp: Stat = serde_json::from_value(json!({
            "id": 1,
            "name": "hp",
            "game_index": 1,
            "is_battle_only": false,
            "affecting_moves": {"increase": [], "decrease": []},
            "affecting_natures": {"increase": [], "decrease": []},
            "characteristics": [unnamed("characteristic", 1), unnamed("characteristic", 7)],
            "move_damage_class": null,
            "names": [english("HP")]
        }))
        .unwrap();
        assert!(hp.move_damage_class.is_none());
        assert_eq!(hp.characteristics[1].id(), Some(7));

        let attack: Stat = serde_json::from_value(json!({
            "id": 2,
            "name": "attack",
            "game_index": 2,
            "is_battle_only": false,
            "affecting_moves": {
                "increase": [{"change": 2, "move": named("swords-dance", "move", 14)}],
                "decrease": [{"change": -1, "move": named("growl", "move", 45)}]
            },
            "affecting_natures": {
                "increase": [named("lonely", "nature", 6)],
                "decrease": [named("bold", "nature", 2)]
            },
            "characteristics": [],
            "move_damage_class": named("physical", "move-damage-class", 2),
            "names": [english("Attack")]
        }))
        .unwrap();
        assert_eq!(attack.affecting_moves.increase[0].move_.name, "swords-dance");
        assert_eq!(attack.move_damage_class.unwrap().name, "physical");
    }

    #[test]
    fn test_type_damage_relations() {
        let fire: Type = serde_json::from_value(json!({
            "id": 10,
            "name": "fire",
            "damage_relations": {
                "no_damage_to": [],
                "half_damage_to": [named("water", "type", 11)],
                "double_damage_to": [named("grass", "type", 12)],
                "no_damage_from": [],
                "half_damage_from": [named("grass", "type", 12)],
                "double_damage_from": [named("water", "type", 11)]
            },
            "past_damage_relations": [],
            "game_indices": [{"game_index": 20, "generation": named("generation-i", "generation", 1)}],
            "generation": named("generation-i", "generation", 1),
            "move_damage_class": named("special", "move-damage-class", 3),
            "names": [english("Fire")],
            "pokemon": [{"slot": 1, "pokemon": named("charmander", "pokemon", 4)}],
            "moves": [named("ember", "move", 52)],
            "sprites": {"generation-iii": {}}
        }))
        .unwrap();

        assert_eq!(fire.damage_relations.double_damage_to[0].name, "grass");
        assert_eq!(fire.pokemon[0].pokemon.name, "charmander");
    }

    #[test]
    fn test_form_without_back_sprites() {
        let form: PokemonForm = serde_json::from_value(json!({
            "id": 10041,
            "name": "arceus-bug",
            "order": 631,
            "form_order": 7,
            "is_default": false,
            "is_battle_only": false,
            "is_mega": false,
            "form_name": "bug",
            "pokemon": named("arceus", "pokemon", 493),
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/493-bug.png",
                "front_shiny": null,
                "back_default": null,
                "back_shiny": null
            },
            "version_group": named("diamond-pearl", "version-group", 8),
            "names": [],
            "form_names": [english("Bug Type")],
            "types": [{"slot": 1, "type": named("bug", "type", 7)}]
        }))
        .unwrap();

        assert_eq!(form.form_name, "bug");
        assert!(form.sprites.back_default.is_none());
        assert_eq!(form.types[0].type_.name, "bug");
    }
}
