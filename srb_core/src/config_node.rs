//! # Config Nodes
//!
//! The decode/encode step between catalog files and catalog entries.
//!
//! A [`ConfigNode`] is one named section of a catalog file: a section tag
//! (e.g. `SRBLIB_CASINGMATERIAL_DEFINITION`) plus a flat key/value table.
//! Entry types implement [`ConfigEntry`] to declare their tag; decoding
//! checks the tag and the presence of a non-empty `name` before mapping
//! keys onto fields.
//!
//! Loading is forgiving: a section with the wrong tag or without a name is
//! skipped (a no-op), reported as a [`LoadWarning`] rather than an error.
//! Saving is symmetric: an entry without a name produces no section.
//!
//! ## File Format
//!
//! Catalog files are TOML with one array-of-tables per section tag:
//!
//! ```toml
//! [[SRBLIB_CASINGMATERIAL_DEFINITION]]
//! name = "Steel4130"
//! density = 7850.0
//! tensileStrength = 460000000.0
//! corrosionSafety = 0.001
//! weldEff = 0.85
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use toml::{Table, Value};

use crate::errors::{CalcError, CalcResult, LoadWarning, SkipReason};

/// Key every section must carry to be considered valid.
pub const NAME_KEY: &str = "name";

/// A tagged section of flat key/value pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigNode {
    /// Section tag
    pub name: String,
    /// Field values keyed by config key
    pub values: Table,
}

impl ConfigNode {
    /// Create an empty node with the given section tag
    pub fn new(name: impl Into<String>) -> Self {
        ConfigNode {
            name: name.into(),
            values: Table::new(),
        }
    }

    /// Check whether a key is present
    pub fn has_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get a raw value by key
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a raw value, replacing any previous one
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// The `name` value if it is a non-empty string
    pub fn entry_name(&self) -> Option<&str> {
        match self.values.get(NAME_KEY) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Split a TOML document into nodes, one per array-of-tables element.
    ///
    /// A top-level table (`[TAG]`) is accepted as a single node. Top-level
    /// scalar keys are not sections and are ignored.
    pub fn parse_document(text: &str) -> CalcResult<Vec<ConfigNode>> {
        let doc: Table = toml::from_str(text).map_err(|e| CalcError::serialization(e.to_string()))?;

        let mut nodes = Vec::new();
        for (tag, value) in doc {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Value::Table(values) = item {
                            nodes.push(ConfigNode { name: tag.clone(), values });
                        }
                    }
                }
                Value::Table(values) => nodes.push(ConfigNode { name: tag, values }),
                _ => {}
            }
        }
        Ok(nodes)
    }

    /// Render nodes back into a TOML document, grouping by tag.
    pub fn write_document(nodes: &[ConfigNode]) -> CalcResult<String> {
        let mut doc = Table::new();
        for node in nodes {
            let slot = doc
                .entry(node.name.clone())
                .or_insert(Value::Array(Vec::new()));
            if let Value::Array(items) = slot {
                items.push(Value::Table(node.values.clone()));
            }
        }
        toml::to_string(&doc).map_err(|e| CalcError::serialization(e.to_string()))
    }
}

/// A catalog record that is persisted as a tagged config section.
pub trait ConfigEntry: Serialize + DeserializeOwned + Sized {
    /// Section tag identifying this entry type
    const NODE_NAME: &'static str;

    /// Display label for the entry type, used in messages
    const KIND: &'static str;

    /// Lookup key of this entry
    fn name(&self) -> &str;

    /// Decode from a node, returning `None` when the section is skipped.
    fn load(node: &ConfigNode) -> Option<Self> {
        match decode(node) {
            Ok(entry) => Some(entry),
            Err(warning) => {
                tracing::warn!(
                    section = %warning.section,
                    reason = ?warning.reason,
                    "{}",
                    warning.detail
                );
                None
            }
        }
    }

    /// Encode into a node, or `None` when the entry has no name.
    fn save(&self) -> Option<ConfigNode> {
        encode(self)
    }
}

/// Decode a node into an entry, describing why it was skipped otherwise.
pub fn decode<T: ConfigEntry>(node: &ConfigNode) -> Result<T, LoadWarning> {
    let name = node.entry_name().map(str::to_string);

    if node.name != T::NODE_NAME {
        return Err(LoadWarning {
            section: node.name.clone(),
            name,
            reason: SkipReason::TagMismatch,
            detail: format!("expected section {}", T::NODE_NAME),
        });
    }

    if let Some(value) = node.get_value(NAME_KEY).filter(|v| !v.is_str()) {
        return Err(LoadWarning {
            section: node.name.clone(),
            name,
            reason: SkipReason::Malformed,
            detail: format!("'{}' must be a string, found {}", NAME_KEY, value.type_str()),
        });
    }

    if name.is_none() {
        return Err(LoadWarning {
            section: node.name.clone(),
            name,
            reason: SkipReason::MissingName,
            detail: format!("{} section has no '{}' key", T::KIND, NAME_KEY),
        });
    }

    Value::Table(node.values.clone())
        .try_into::<T>()
        .map_err(|e| LoadWarning {
            section: node.name.clone(),
            name,
            reason: SkipReason::Malformed,
            detail: e.to_string(),
        })
}

/// Encode an entry under its section tag. Skipped when the name is empty.
pub fn encode<T: ConfigEntry>(entry: &T) -> Option<ConfigNode> {
    if entry.name().is_empty() {
        return None;
    }

    match toml::Value::try_from(entry) {
        Ok(Value::Table(values)) => Some(ConfigNode {
            name: T::NODE_NAME.to_string(),
            values,
        }),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(kind = T::KIND, name = entry.name(), error = %e, "failed to encode entry");
            None
        }
    }
}
