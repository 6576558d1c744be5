//! Config schema: the known-key table and the typed view of a config file.
//!
//! Adding a key is a table change here plus a field on `ConfigSchema`.

use serde::Deserialize;

/// The only config format version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

/// One recognized top-level key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRule {
    pub name: &'static str,
    pub required: bool,
}

/// Top-level keys recognized by the current schema.
pub const KNOWN_KEYS: &[KeyRule] = &[KeyRule {
    name: "version",
    required: true,
}];

/// Whether `key` is a recognized top-level key.
pub fn is_known_key(key: &str) -> bool {
    KNOWN_KEYS.iter().any(|rule| rule.name == key)
}

/// Rules whose keys must be present and non-zero.
pub fn required_keys() -> impl Iterator<Item = &'static KeyRule> {
    KNOWN_KEYS.iter().filter(|rule| rule.required)
}

/// Typed view of a config file. Unknown keys are ignored here; they are reported
/// separately as warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigSchema {
    pub version: Option<i64>,
}

impl ConfigSchema {
    /// Whether the field backing `key` holds a non-zero value.
    pub fn is_set(&self, key: &str) -> bool {
        match key {
            "version" => self.version.is_some_and(|v| v != 0),
            _ => false,
        }
    }
}
