//! ADR directory records stored under the `adr` key of the state file

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Numbering scheme used for records inside an ADR directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    #[default]
    Timestamp,
    Sequential,
}

impl IndexType {
    pub const ALL: [IndexType; 2] = [IndexType::Timestamp, IndexType::Sequential];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Timestamp => "timestamp",
            IndexType::Sequential => "sequential",
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timestamp" => Ok(IndexType::Timestamp),
            "sequential" => Ok(IndexType::Sequential),
            other => Err(format!("unknown index type '{}'", other)),
        }
    }
}

/// A registered ADR directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrDirectory {
    /// Path relative to the directory holding the state file
    pub path: String,

    /// User-chosen label
    #[serde(default)]
    pub name: String,

    /// Index scheme, written as an empty string when unset
    #[serde(default, with = "empty_as_none")]
    pub index: Option<IndexType>,
}

impl AdrDirectory {
    pub fn new(path: impl Into<String>, name: impl Into<String>, index: IndexType) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            index: Some(index),
        }
    }
}

/// State owned by the `adr` subsystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrState {
    /// Registered directories in insertion order
    #[serde(rename = "dirs", default)]
    pub directories: Vec<AdrDirectory>,
}

impl AdrState {
    pub fn contains_path(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d.path == path)
    }
}

mod empty_as_none {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<IndexType>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|v| v.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<IndexType>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
