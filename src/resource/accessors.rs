//! Typed accessors
//!
//! One single, batch, and list method per endpoint, generated from the tables
//! below. Each is a fixed instantiation of the generic fetch helpers on
//! [`Pokedex`].

use super::registry::Endpoint;
use super::resolver::{Interval, ResourceKey};
use crate::api::client::Pokedex;
use crate::error::Result;
use crate::types::{self, ApiResourceList, NamedApiResourceList};

/// Accessors for endpoints addressed by name (or id)
macro_rules! named_accessors {
    ($(
        $(#[$doc:meta])*
        $endpoint:ident => $record:ty { $single:ident, $batch:ident, $list:ident }
    )*) => {
        impl Pokedex {
            $(
                $(#[$doc])*
                pub async fn $single(&self, key: impl Into<ResourceKey>) -> Result<$record> {
                    self.get(Endpoint::$endpoint, key).await
                }

                #[doc = concat!("Batch form of [`Self::", stringify!($single), "`]; results keep key order")]
                pub async fn $batch<I, K>(&self, keys: I) -> Result<Vec<$record>>
                where
                    I: IntoIterator<Item = K>,
                    K: Into<ResourceKey>,
                {
                    self.get_many(Endpoint::$endpoint, keys).await
                }

                #[doc = concat!("One page of the `", stringify!($endpoint), "` collection")]
                pub async fn $list(&self, interval: Option<Interval>) -> Result<NamedApiResourceList> {
                    self.list(Endpoint::$endpoint, interval).await
                }
            )*
        }
    };
}

/// Accessors for endpoints addressed by numeric id only
macro_rules! id_accessors {
    ($(
        $(#[$doc:meta])*
        $endpoint:ident => $record:ty { $single:ident, $batch:ident, $list:ident }
    )*) => {
        impl Pokedex {
            $(
                $(#[$doc])*
                pub async fn $single(&self, id: u32) -> Result<$record> {
                    self.get(Endpoint::$endpoint, id).await
                }

                #[doc = concat!("Batch form of [`Self::", stringify!($single), "`]; results keep id order")]
                pub async fn $batch<I>(&self, ids: I) -> Result<Vec<$record>>
                where
                    I: IntoIterator<Item = u32>,
                {
                    self.get_many(Endpoint::$endpoint, ids).await
                }

                #[doc = concat!("One page of the `", stringify!($endpoint), "` collection")]
                pub async fn $list(&self, interval: Option<Interval>) -> Result<ApiResourceList> {
                    self.list(Endpoint::$endpoint, interval).await
                }
            )*
        }
    };
}

named_accessors! {
    /// Berries restore HP or status, boost stats, or negate damage when eaten
    Berry => types::Berry { get_berry_by_name, get_berry_by_names, get_berries_list }
    /// Berries can be soft or hard
    BerryFirmness => types::BerryFirmness {
        get_berry_firmness_by_name, get_berry_firmness_by_names, get_berries_firmness_list
    }
    /// Flavors decide whether a Pokémon benefits from a berry, based on its nature
    BerryFlavor => types::BerryFlavor {
        get_berry_flavor_by_name, get_berry_flavor_by_names, get_berries_flavors_list
    }
    /// Categories judges use to weigh a Pokémon's condition in contests
    ContestType => types::ContestType {
        get_contest_type_by_name, get_contest_type_by_names, get_contest_types_list
    }
    /// Ways the player can run into wild Pokémon, e.g. walking in tall grass
    EncounterMethod => types::EncounterMethod {
        get_encounter_method_by_name, get_encounter_method_by_names, get_encounter_methods_list
    }
    /// Conditions affecting which Pokémon appear in the wild, e.g. day or night
    EncounterCondition => types::EncounterCondition {
        get_encounter_condition_by_name,
        get_encounter_condition_by_names,
        get_encounter_conditions_list
    }
    /// States an encounter condition can take
    EncounterConditionValue => types::EncounterConditionValue {
        get_encounter_condition_value_by_name,
        get_encounter_condition_value_by_names,
        get_encounter_condition_values_list
    }
    /// Events and conditions that cause a Pokémon to evolve
    EvolutionTrigger => types::EvolutionTrigger {
        get_evolution_trigger_by_name, get_evolution_trigger_by_names, get_evolution_triggers_list
    }
    /// Groupings of games by the Pokémon, moves, abilities, and types they introduce
    Generation => types::Generation {
        get_generation_by_name, get_generation_by_names, get_generations_list
    }
    /// Regional Pokédexes
    Pokedex => types::Pokedex { get_pokedex_by_name, get_pokedex_by_names, get_pokedexes_list }
    /// Game versions, e.g. Red, Blue or Yellow
    Version => types::Version { get_version_by_name, get_version_by_names, get_versions_list }
    /// Highly similar versions grouped together
    VersionGroup => types::VersionGroup {
        get_version_group_by_name, get_version_group_by_names, get_version_groups_list
    }
    /// Objects the player can pick up, keep in the bag, and use
    Item => types::Item { get_item_by_name, get_item_by_names, get_items_list }
    /// Aspects of items, e.g. "usable in battle" or "consumable"
    ItemAttribute => types::ItemAttribute {
        get_item_attribute_by_name, get_item_attribute_by_names, get_item_attributes_list
    }
    /// Categories deciding where items go in the bag
    ItemCategory => types::ItemCategory {
        get_item_category_by_name, get_item_category_by_names, get_item_categories_list
    }
    /// Effects of Fling when used with different items
    ItemFlingEffect => types::ItemFlingEffect {
        get_item_fling_effect_by_name, get_item_fling_effect_by_names, get_item_fling_effects_list
    }
    /// Bag pockets
    ItemPocket => types::ItemPocket {
        get_item_pocket_by_name, get_item_pocket_by_names, get_item_pockets_list
    }
    /// Skills Pokémon use in battle, one per turn
    Move => types::Move { get_move_by_name, get_move_by_names, get_moves_list }
    /// Status conditions caused by moves
    MoveAilment => types::MoveAilment {
        get_move_ailment_by_name, get_move_ailment_by_names, get_move_ailments_list
    }
    /// Battle Palace move styles
    MoveBattleStyle => types::MoveBattleStyle {
        get_move_battle_style_by_name, get_move_battle_style_by_names, get_move_battle_styles_list
    }
    /// Loose groupings of move effects
    MoveCategory => types::MoveCategory {
        get_move_category_by_name, get_move_category_by_names, get_move_categories_list
    }
    /// Physical, special, or non-damaging
    MoveDamageClass => types::MoveDamageClass {
        get_move_damage_class_by_name, get_move_damage_class_by_names, get_move_damage_classes_list
    }
    /// Ways Pokémon learn moves
    MoveLearnMethod => types::MoveLearnMethod {
        get_move_learn_method_by_name, get_move_learn_method_by_names, get_move_learn_methods_list
    }
    /// What a move can be aimed at
    MoveTarget => types::MoveTarget {
        get_move_target_by_name, get_move_target_by_names, get_move_targets_list
    }
    /// Cities, routes, and other places that can be visited
    Location => types::Location { get_location_by_name, get_location_by_names, get_locations_list }
    /// Sections of a location, each with its own encounters
    LocationArea => types::LocationArea {
        get_location_area_by_name, get_location_area_by_names, get_location_areas_list
    }
    /// Pal Park encounter groupings
    PalParkArea => types::PalParkArea {
        get_pal_park_area_by_name, get_pal_park_area_by_names, get_pal_park_areas_list
    }
    /// Organized areas of the world, e.g. Kanto
    Region => types::Region { get_region_by_name, get_region_by_names, get_regions_list }
    /// Passive effects in battle or the overworld
    Ability => types::Ability { get_ability_by_name, get_ability_by_names, get_abilities_list }
    /// Breeding compatibility groups
    EggGroup => types::EggGroup { get_egg_group_by_name, get_egg_group_by_names, get_egg_groups_list }
    Gender => types::Gender { get_gender_by_name, get_gender_by_names, get_genders_list }
    /// Speeds at which Pokémon gain levels
    GrowthRate => types::GrowthRate {
        get_growth_rate_by_name, get_growth_rate_by_names, get_growth_rates_list
    }
    /// Natures influence how stats grow
    Nature => types::Nature { get_nature_by_name, get_nature_by_names, get_natures_list }
    PokeathlonStat => types::PokeathlonStat {
        get_pokeathlon_stat_by_name, get_pokeathlon_stat_by_names, get_pokeathlon_stats_list
    }
    /// Pokémon varieties: stats, abilities, types, moves
    Pokemon => types::Pokemon { get_pokemon_by_name, get_pokemon_by_names, get_pokemons_list }
    PokemonColor => types::PokemonColor {
        get_pokemon_color_by_name, get_pokemon_color_by_names, get_pokemon_colors_list
    }
    /// Purely cosmetic variants
    PokemonForm => types::PokemonForm {
        get_pokemon_form_by_name, get_pokemon_form_by_names, get_pokemon_forms_list
    }
    PokemonHabitat => types::PokemonHabitat {
        get_pokemon_habitat_by_name, get_pokemon_habitat_by_names, get_pokemon_habitats_list
    }
    PokemonShape => types::PokemonShape {
        get_pokemon_shape_by_name, get_pokemon_shape_by_names, get_pokemon_shapes_list
    }
    /// Attributes shared by every variety of a species
    PokemonSpecies => types::PokemonSpecies {
        get_pokemon_species_by_name, get_pokemon_species_by_names, get_pokemon_species_list
    }
    Stat => types::Stat { get_stat_by_name, get_stat_by_names, get_stats_list }
    /// Elemental types of Pokémon and moves
    Type => types::Type { get_type_by_name, get_type_by_names, get_types_list }
    Language => types::Language { get_language_by_name, get_language_by_names, get_languages_list }
}

id_accessors! {
    /// Effects of moves in contests
    ContestEffect => types::ContestEffect {
        get_contest_effect_by_id, get_contest_effect_by_ids, get_contest_effects_list
    }
    /// Effects of moves in super contests
    SuperContestEffect => types::SuperContestEffect {
        get_super_contest_effect_by_id, get_super_contest_effect_by_ids, get_super_contest_effects_list
    }
    /// Family trees of species lines
    EvolutionChain => types::EvolutionChain {
        get_evolution_chain_by_id, get_evolution_chain_by_ids, get_evolution_chains_list
    }
    /// TMs and HMs, per version group
    Machine => types::Machine { get_machine_by_id, get_machine_by_ids, get_machines_list }
    /// Which stat holds a Pokémon's highest IV
    Characteristic => types::Characteristic {
        get_characteristic_by_id, get_characteristic_by_ids, get_characteristics_list
    }
}
