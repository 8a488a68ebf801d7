//! Job-properties configuration source.
//!
//! Copy jobs are configured through a flat map of string properties, stored on
//! disk as a JSON object. The preserve preferences live under
//! [`PRESERVED_ATTRIBUTES_KEY`] as a mnemonic string.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, PreserveAttributes, trace};

/// Property key holding the preserve mnemonic for a copy job.
pub const PRESERVED_ATTRIBUTES_KEY: &str = "copy.preserved.attributes";

/// Flat string properties describing a copy job.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobProperties {
    entries: BTreeMap<String, String>,
}

impl JobProperties {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses properties from a JSON object whose values are strings.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let properties: Self = serde_json::from_str(text)?;
        trace::properties_loaded("<memory>", properties.len());
        Ok(properties)
    }

    /// Reads properties from the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let properties: Self =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        trace::properties_loaded(&path.display().to_string(), properties.len());
        Ok(properties)
    }

    /// Serializes the properties as a pretty-printed JSON object.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes the preserve preferences configured for the job.
    ///
    /// A missing property preserves nothing.
    #[must_use]
    pub fn preserved_attributes(&self) -> PreserveAttributes {
        PreserveAttributes::from_optional_mnemonic(self.get(PRESERVED_ATTRIBUTES_KEY))
    }

    /// Stores `attributes` under [`PRESERVED_ATTRIBUTES_KEY`] in canonical mnemonic form.
    pub fn set_preserved_attributes(&mut self, attributes: PreserveAttributes) {
        self.set(PRESERVED_ATTRIBUTES_KEY, attributes.to_mnemonic_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JobProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
