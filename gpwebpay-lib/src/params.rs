//! Ordered request parameters.
//!
//! The digest is computed over field values **in insertion order**, which
//! makes ordering part of the wire contract rather than an implementation
//! detail. [`ParamSet`] therefore stores entries in an explicit insertion
//! sequence with a name index on the side; a plain hash map would forget the
//! one thing the gateway checks.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A parameter value as it appears on the wire.
///
/// The wire knows two shapes: text (including pre-serialized XML
/// sub-documents such as `ADDINFO`) and unsigned integers rendered in plain
/// decimal. Keeping them distinct means `AMOUNT` can never pick up quoting
/// or padding on its way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Unsigned integer, rendered without padding or separators.
    Number(u64),
    /// Free-form text, rendered verbatim.
    Text(String),
}

impl ParamValue {
    /// Borrow the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    /// The numeric content, if this is a number value.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    /// Renders the exact bytes the wire and the digest see.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Number(n.into())
    }
}

impl From<u16> for ParamValue {
    fn from(n: u16) -> Self {
        ParamValue::Number(n.into())
    }
}

impl From<u8> for ParamValue {
    fn from(n: u8) -> Self {
        ParamValue::Number(n.into())
    }
}

/// Ordered name → value parameter set.
///
/// Setting a known name overwrites the value **in place**, keeping its
/// original position; setting an unknown name appends at the end. Iteration
/// always yields entries in that order.
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
    // Invariant: index maps every entry name to its position in entries.
    entries: Vec<(String, ParamValue)>,
    index: HashMap<String, usize>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set a parameter, preserving the position of an existing name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    /// Returns true when the named parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of the named parameter in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl PartialEq for ParamSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ParamSet {}

impl Serialize for ParamSet {
    /// Serializes as a map whose key order is the insertion order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
