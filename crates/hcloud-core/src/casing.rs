//! Key-casing transform.
//!
//! The Hetzner Cloud API speaks `snake_case` keys. Callers may prefer the
//! hyphenated `kebab-case` convention instead; this module converts every
//! mapping key of a JSON document between the two, recursing through nested
//! objects and arrays. Only keys are rewritten, never values.
//!
//! Label maps are user data: the `labels` key itself is converted, but the
//! label keys inside it are passed through untouched in both directions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Naming convention for mapping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCase {
    /// Underscore separated (`server_type`), the wire convention.
    #[default]
    Snake,
    /// Hyphen separated (`server-type`).
    Kebab,
}

impl KeyCase {
    /// Returns the name of the convention.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Kebab => "kebab",
        }
    }

    const fn separators(self) -> (char, char) {
        match self {
            Self::Snake => ('-', '_'),
            Self::Kebab => ('_', '-'),
        }
    }

    /// Converts a single key to this convention.
    #[must_use]
    pub fn convert(self, key: &str) -> String {
        let (from, to) = self.separators();
        key.replace(from, &to.to_string())
    }
}

impl FromStr for KeyCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "snake" | "snake_case" => Ok(Self::Snake),
            "kebab" | "kebab-case" => Ok(Self::Kebab),
            _ => Err(Error::ConfigError(format!("Unknown key case: {s}"))),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping keys whose values hold user-chosen keys.
const OPAQUE_KEYS: &[&str] = &["labels"];

/// Recursively converts every mapping key in `value` to `case`.
///
/// Objects nested inside arrays are converted too, except for the contents
/// of label maps. When two source keys collapse onto the same converted key,
/// the one that iterates last wins.
#[must_use]
pub fn transform_keys(value: Value, case: KeyCase) -> Value {
    match value {
        Value::Object(map) => Value::Object(transform_map(map, case)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform_keys(item, case))
                .collect(),
        ),
        other => other,
    }
}

/// Converts the keys of a JSON object, recursing into its values.
#[must_use]
pub fn transform_map(map: Map<String, Value>, case: KeyCase) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let key = case.convert(&key);
            if OPAQUE_KEYS.contains(&key.as_str()) {
                (key, value)
            } else {
                let value = transform_keys(value, case);
                (key, value)
            }
        })
        .collect()
}

/// Converts an outgoing payload to the wire convention.
#[must_use]
pub fn to_wire(value: Value) -> Value {
    transform_keys(value, KeyCase::Snake)
}
