//! Endpoint Registry
//!
//! The fixed table of resource kinds the service exposes. Each endpoint maps
//! to exactly one path segment under the API version root.

use crate::error::Error;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// How single resources of an endpoint are addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// By name or by numeric id; list results carry `{name, url}`
    ByName,
    /// By numeric id only; list results carry `{url}`
    ById,
}

macro_rules! endpoint_table {
    ($( $variant:ident => $path:literal, $lookup:ident; )*) => {
        /// A resource kind of the service
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Endpoint {
            $( $variant, )*
        }

        impl Endpoint {
            /// Every endpoint, in table order
            pub const ALL: &'static [Endpoint] = &[ $( Endpoint::$variant, )* ];

            /// URL path segment under the version root
            pub const fn path(self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $path, )*
                }
            }

            pub const fn lookup(self) -> Lookup {
                match self {
                    $( Endpoint::$variant => Lookup::$lookup, )*
                }
            }
        }
    };
}

endpoint_table! {
    Berry => "berry", ByName;
    BerryFirmness => "berry-firmness", ByName;
    BerryFlavor => "berry-flavor", ByName;
    ContestType => "contest-type", ByName;
    ContestEffect => "contest-effect", ById;
    SuperContestEffect => "super-contest-effect", ById;
    EncounterMethod => "encounter-method", ByName;
    EncounterCondition => "encounter-condition", ByName;
    EncounterConditionValue => "encounter-condition-value", ByName;
    EvolutionChain => "evolution-chain", ById;
    EvolutionTrigger => "evolution-trigger", ByName;
    Generation => "generation", ByName;
    Pokedex => "pokedex", ByName;
    Version => "version", ByName;
    VersionGroup => "version-group", ByName;
    Item => "item", ByName;
    ItemAttribute => "item-attribute", ByName;
    ItemCategory => "item-category", ByName;
    ItemFlingEffect => "item-fling-effect", ByName;
    ItemPocket => "item-pocket", ByName;
    Machine => "machine", ById;
    Move => "move", ByName;
    MoveAilment => "move-ailment", ByName;
    MoveBattleStyle => "move-battle-style", ByName;
    MoveCategory => "move-category", ByName;
    MoveDamageClass => "move-damage-class", ByName;
    MoveLearnMethod => "move-learn-method", ByName;
    MoveTarget => "move-target", ByName;
    Location => "location", ByName;
    LocationArea => "location-area", ByName;
    PalParkArea => "pal-park-area", ByName;
    Region => "region", ByName;
    Ability => "ability", ByName;
    Characteristic => "characteristic", ById;
    EggGroup => "egg-group", ByName;
    Gender => "gender", ByName;
    GrowthRate => "growth-rate", ByName;
    Nature => "nature", ByName;
    PokeathlonStat => "pokeathlon-stat", ByName;
    Pokemon => "pokemon", ByName;
    PokemonColor => "pokemon-color", ByName;
    PokemonForm => "pokemon-form", ByName;
    PokemonHabitat => "pokemon-habitat", ByName;
    PokemonShape => "pokemon-shape", ByName;
    PokemonSpecies => "pokemon-species", ByName;
    Stat => "stat", ByName;
    Type => "type", ByName;
    Language => "language", ByName;
}

impl Endpoint {
    /// Logical name; identical to the path segment
    pub const fn name(self) -> &'static str {
        self.path()
    }

    /// Whether list responses carry named references
    pub const fn has_named_list(self) -> bool {
        matches!(self.lookup(), Lookup::ByName)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        get_endpoint(name).ok_or_else(|| Error::UnknownEndpoint(name.to_string()))
    }
}

/// Name -> endpoint index, built on first access
static REGISTRY: OnceLock<HashMap<&'static str, Endpoint>> = OnceLock::new();

fn get_registry() -> &'static HashMap<&'static str, Endpoint> {
    REGISTRY.get_or_init(|| {
        Endpoint::ALL
            .iter()
            .map(|endpoint| (endpoint.name(), *endpoint))
            .collect()
    })
}

/// Get an endpoint by logical name
pub fn get_endpoint(name: &str) -> Option<Endpoint> {
    get_registry().get(name).copied()
}

/// Get all endpoint names, in table order (for help output)
pub fn get_all_endpoint_names() -> Vec<&'static str> {
    Endpoint::ALL.iter().map(|e| e.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_covers_every_endpoint() {
        assert_eq!(get_registry().len(), Endpoint::ALL.len());
        assert_eq!(Endpoint::ALL.len(), 48);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(get_endpoint("berry"), Some(Endpoint::Berry));
        assert_eq!(get_endpoint("pokemon-species"), Some(Endpoint::PokemonSpecies));
        assert_eq!(get_endpoint("Berry"), None);
        assert_eq!(get_endpoint("berries"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_endpoint() {
        let err = "not-a-thing".parse::<Endpoint>().unwrap_err();
        assert!(matches!(err, Error::UnknownEndpoint(name) if name == "not-a-thing"));
        assert_eq!("move-target".parse::<Endpoint>().unwrap(), Endpoint::MoveTarget);
    }

    #[test]
    fn test_id_only_endpoints() {
        let by_id: Vec<_> = Endpoint::ALL
            .iter()
            .filter(|e| e.lookup() == Lookup::ById)
            .map(|e| e.name())
            .collect();
        assert_eq!(
            by_id,
            vec![
                "contest-effect",
                "super-contest-effect",
                "evolution-chain",
                "machine",
                "characteristic"
            ]
        );
        assert!(!Endpoint::Machine.has_named_list());
        assert!(Endpoint::Berry.has_named_list());
    }

    #[test]
    fn test_display_matches_path() {
        assert_eq!(Endpoint::ItemFlingEffect.to_string(), "item-fling-effect");
        assert_eq!(get_all_endpoint_names()[0], "berry");
    }
}
