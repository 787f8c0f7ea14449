//! Evolution

use super::common::{Name, NamedApiResource};
use serde::{Deserialize, Serialize};

/// Family tree of a species line, from its lowest stage upward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    /// Item a parent must hold for the egg to hatch into a baby
    pub baby_trigger_item: Option<NamedApiResource>,
    pub chain: ChainLink,
}

impl EvolutionChain {
    /// Species names in depth-first order, starting with the base stage
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.chain.collect_species(&mut names);
        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Only ever true on the base link
    pub is_baby: bool,
    pub species: NamedApiResource,
    pub evolution_details: Vec<EvolutionDetail>,
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    fn collect_species<'a>(&'a self, names: &mut Vec<&'a str>) {
        names.push(&self.species.name);
        for link in &self.evolves_to {
            link.collect_species(names);
        }
    }
}

/// Conditions under which the previous link evolves into this one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub item: Option<NamedApiResource>,
    pub trigger: NamedApiResource,
    pub gender: Option<u32>,
    pub held_item: Option<NamedApiResource>,
    pub known_move: Option<NamedApiResource>,
    pub known_move_type: Option<NamedApiResource>,
    pub location: Option<NamedApiResource>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_beauty: Option<u32>,
    pub min_affection: Option<u32>,
    pub needs_overworld_rain: bool,
    pub party_species: Option<NamedApiResource>,
    pub party_type: Option<NamedApiResource>,
    /// 1 means Attack > Defense, 0 means equal, -1 means Attack < Defense
    pub relative_physical_stats: Option<i32>,
    /// "day", "night", or empty
    #[serde(default)]
    pub time_of_day: String,
    pub trade_species: Option<NamedApiResource>,
    pub turn_upside_down: bool,
}

/// Event that causes a Pokémon to evolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTrigger {
    pub id: u32,
    pub name: String,
    pub names: Vec<Name>,
    pub pokemon_species: Vec<NamedApiResource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::fixtures::named;
    use serde_json::{json, Value};

    fn level_up(min_level: Option<u32>) -> Value {
        json!({
            "item": null,
            "trigger": named("level-up", "evolution-trigger", 1),
            "gender": null,
            "held_item": null,
            "known_move": null,
            "known_move_type": null,
            "location": null,
            "min_level": min_level,
            "min_happiness": null,
            "min_beauty": null,
            "min_affection": null,
            "needs_overworld_rain": false,
            "party_species": null,
            "party_type": null,
            "relative_physical_stats": null,
            "time_of_day": "",
            "trade_species": null,
            "turn_upside_down": false
        })
    }

    fn link(name: &str, id: u32, details: Vec<Value>, evolves_to: Vec<Value>) -> Value {
        json!({
            "is_baby": false,
            "species": named(name, "pokemon-species", id),
            "evolution_details": details,
            "evolves_to": evolves_to
        })
    }

    #[test]
    fn test_species_names_are_depth_first() {
        let chain: EvolutionChain = serde_json::from_value(json!({
            "id": 135,
            "baby_trigger_item": null,
            "chain": link("wurmple", 265, vec![], vec![
                link("silcoon", 266, vec![level_up(Some(7))], vec![
                    link("beautifly", 267, vec![level_up(Some(10))], vec![]),
                ]),
                link("cascoon", 268, vec![level_up(Some(7))], vec![
                    link("dustox", 269, vec![level_up(Some(10))], vec![]),
                ]),
            ])
        }))
        .unwrap();

        assert_eq!(
            chain.species_names(),
            vec!["wurmple", "silcoon", "beautifly", "cascoon", "dustox"]
        );
        assert_eq!(chain.chain.evolves_to[1].evolution_details[0].min_level, Some(7));
    }

    #[test]
    fn test_branching_chain_details() {
        let mut by_stone = level_up(None);
        by_stone["item"] = named("water-stone", "item", 84);
        by_stone["trigger"] = named("use-item", "evolution-trigger", 3);

        let mut by_friendship = level_up(None);
        by_friendship["min_happiness"] = json!(160);
        by_friendship["time_of_day"] = json!("day");

        let mut legacy = level_up(None);
        legacy.as_object_mut().unwrap().remove("time_of_day");

        let chain: EvolutionChain = serde_json::from_value(json!({
            "id": 67,
            "baby_trigger_item": null,
            "chain": link("eevee", 133, vec![], vec![
                link("vaporeon", 134, vec![by_stone], vec![]),
                link("espeon", 196, vec![by_friendship, legacy], vec![]),
            ])
        }))
        .unwrap();

        assert_eq!(chain.species_names(), vec!["eevee", "vaporeon", "espeon"]);
        assert!(chain.baby_trigger_item.is_none());

        let vaporeon = &chain.chain.evolves_to[0].evolution_details[0];
        assert_eq!(vaporeon.item.as_ref().unwrap().name, "water-stone");
        assert_eq!(vaporeon.trigger.name, "use-item");

        let espeon = &chain.chain.evolves_to[1].evolution_details;
        assert_eq!(espeon[0].min_happiness, Some(160));
        assert_eq!(espeon[0].time_of_day, "day");
        assert_eq!(espeon[1].time_of_day, "");
    }
}
