//! Registry of algorithms liboqs no longer ships.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::yaml::read_yaml;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeprecatedEntry {
    pub claimed_nist_level: i64,
}

/// Claimed levels for removed algorithms, keyed by the variant name used in
/// historical generator configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DeprecatedRegistry {
    entries: HashMap<String, DeprecatedEntry>,
}

impl DeprecatedRegistry {
    pub fn load(path: &Path) -> Result<Self> {
        // An empty file parses as null.
        let entries: Option<HashMap<String, DeprecatedEntry>> = read_yaml(path)?;
        Ok(Self {
            entries: entries.unwrap_or_default(),
        })
    }

    /// Exact, case-sensitive lookup.
    pub fn claimed_level(&self, variant: &str) -> Option<i64> {
        self.entries.get(variant).map(|e| e.claimed_nist_level)
    }
}
