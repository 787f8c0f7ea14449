//! Items

use super::common::{
    ApiResource, Description, Effect, GenerationGameIndex, MachineVersionDetail, Name,
    NamedApiResource, VerboseEffect, VersionGroupFlavorText,
};
use serde::{Deserialize, Serialize};

/// Object the player can pick up, keep in the bag, and use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Price in stores
    pub cost: u32,
    /// Power of Fling when used with this item
    pub fling_power: Option<u32>,
    pub fling_effect: Option<NamedApiResource>,
    pub attributes: Vec<NamedApiResource>,
    pub category: NamedApiResource,
    pub effect_entries: Vec<VerboseEffect>,
    pub flavor_text_entries: Vec<VersionGroupFlavorText>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub names: Vec<Name>,
    pub sprites: ItemSprites,
    pub held_by_pokemon: Vec<ItemHolderPokemon>,
    /// Evolution chain this item produces a baby for during mating
    pub baby_trigger_for: Option<ApiResource>,
    pub machines: Vec<MachineVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSprites {
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHolderPokemon {
    pub pokemon: NamedApiResource,
    pub version_details: Vec<ItemHolderPokemonVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHolderPokemonVersionDetail {
    pub rarity: u32,
    pub version: NamedApiResource,
}

/// Aspect of an item, e.g. "usable in battle" or "consumable"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub id: u32,
    pub name: String,
    pub items: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub descriptions: Vec<Description>,
}

/// Decides which bag pocket an item goes into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: u32,
    pub name: String,
    pub items: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub pocket: NamedApiResource,
}

/// Effect of Fling when used with an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlingEffect {
    pub id: u32,
    pub name: String,
    pub effect_entries: Vec<Effect>,
    pub items: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPocket {
    pub id: u32,
    pub name: String,
    pub categories: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::fixtures::{english, named, unnamed};
    use serde_json::json;

    #[test]
    fn test_item_without_fling_data() {
        let master_ball: Item = serde_json::from_value(json!({
            "id": 1,
            "name": "master-ball",
            "cost": 0,
            "fling_power": null,
            "fling_effect": null,
            "attributes": [named("countable", "item-attribute", 1)],
            "category": named("standard-balls", "item-category", 34),
            "effect_entries": [{
                "effect": "Used in battle: Catches a wild Pokémon without fail.",
                "short_effect": "Catches a wild Pokémon every time.",
                "language": named("en", "language", 9)
            }],
            "flavor_text_entries": [{
                "text": "The best Poké Ball with the ultimate level of performance.",
                "language": named("en", "language", 9),
                "version_group": named("x-y", "version-group", 15)
            }],
            "game_indices": [{"game_index": 1, "generation": named("generation-iii", "generation", 3)}],
            "names": [english("Master Ball")],
            "sprites": {"default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/master-ball.png"},
            "held_by_pokemon": [],
            "baby_trigger_for": null,
            "machines": []
        }))
        .unwrap();

        assert!(master_ball.fling_power.is_none());
        assert!(master_ball.fling_effect.is_none());
        assert!(master_ball.baby_trigger_for.is_none());
        assert_eq!(master_ball.flavor_text_entries[0].version_group.name, "x-y");
    }

    #[test]
    fn test_held_item_with_baby_trigger() {
        let sea_incense: Item = serde_json::from_value(json!({
            "id": 223,
            "name": "sea-incense",
            "cost": 2000,
            "fling_power": 10,
            "fling_effect": null,
            "attributes": [named("holdable", "item-attribute", 5)],
            "category": named("species-specific", "item-category", 13),
            "effect_entries": [],
            "flavor_text_entries": [],
            "game_indices": [],
            "names": [english("Sea Incense")],
            "sprites": {"default": null},
            "held_by_pokemon": [{
                "pokemon": named("marill", "pokemon", 183),
                "version_details": [{"rarity": 5, "version": named("ruby", "version", 7)}]
            }],
            "baby_trigger_for": unnamed("evolution-chain", 90),
            "machines": []
        }))
        .unwrap();

        assert_eq!(sea_incense.fling_power, Some(10));
        assert!(sea_incense.sprites.default.is_none());
        assert_eq!(sea_incense.held_by_pokemon[0].version_details[0].rarity, 5);
        assert_eq!(sea_incense.baby_trigger_for.unwrap().id(), Some(90));
    }
}
