// SPDX-License-Identifier: MPL-2.0
//! Dictionaries and dotted-key translation lookup.
//!
//! A dictionary is an arbitrarily nested JSON object mapping string keys
//! to strings or further objects. No schema beyond "JSON object" is
//! enforced; absent keys are an expected condition and degrade to a
//! fallback chain, never to an error.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Path of the per-language display-name table inside a dictionary.
const LANGUAGE_NAMES_KEY: &str = "app.languageNames";

/// One language's translation data.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary(Value);

impl Dictionary {
    /// Wraps an already-deserialized JSON value.
    ///
    /// The only structural requirement is that the top level is an object.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(Error::Parse(
                "dictionary resource is not a JSON object".to_string(),
            ))
        }
    }

    /// Deserializes a raw dictionary resource.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Walks a dot-separated key path through the nested objects.
    ///
    /// Any absent segment, or a non-object node mid-path, fails the whole
    /// lookup.
    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut node = &self.0;
        for segment in path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Resolves a key path to a string leaf.
    ///
    /// Non-string leaves (numbers, objects, arrays) count as not found so
    /// they fall through the same chain as absent keys.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.lookup(path)?.as_str()
    }
}

/// Resolves translations against an active dictionary with an English
/// fallback.
///
/// Borrows both dictionaries from the surrounding translation state;
/// repeated traversal per call is deliberate, the dictionaries are small
/// and UI refreshes are infrequent.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    active: &'a Dictionary,
    fallback: &'a Dictionary,
}

impl<'a> Translator<'a> {
    pub fn new(active: &'a Dictionary, fallback: &'a Dictionary) -> Self {
        Self { active, fallback }
    }

    /// Looks up a dotted key, falling back to English when the active
    /// dictionary has no string at that path.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.active.text(key).or_else(|| self.fallback.text(key))
    }

    /// The per-language display-name table, with the English table filling
    /// gaps the active one leaves.
    pub fn language_names(&self) -> HashMap<String, String> {
        let mut names = HashMap::new();
        for dictionary in [self.fallback, self.active] {
            if let Some(table) = dictionary
                .lookup(LANGUAGE_NAMES_KEY)
                .and_then(Value::as_object)
            {
                for (code, name) in table {
                    if let Some(name) = name.as_str() {
                        names.insert(code.clone(), name.to_string());
                    }
                }
            }
        }
        names
    }
}
