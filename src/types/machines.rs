//! Machines

use super::common::NamedApiResource;
use serde::{Deserialize, Serialize};

/// A TM or HM teaching one move in one version group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: u32,
    pub item: NamedApiResource,
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    pub version_group: NamedApiResource,
}
