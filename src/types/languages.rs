//! Languages

use super::common::Name;
use serde::{Deserialize, Serialize};

/// Language used for translations of resource information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: u32,
    pub name: String,
    /// Whether games are published in this language
    pub official: bool,
    /// Two-letter language code
    pub iso639: String,
    /// Two-letter country code
    pub iso3166: String,
    pub names: Vec<Name>,
}
