use super::adr::AdrState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of the `.docula` state file.
///
/// Each subsystem owns one top-level key. Keys this version does not know
/// about are kept in `other` and written back after `adr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub adr: AdrState,

    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}
