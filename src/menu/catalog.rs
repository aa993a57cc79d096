//! Drink catalog
//!
//! Read-only table of purchasable drinks keyed by their stable drink key.
//! Lookups are permissive: an unknown key yields a zero price, the
//! "Unknown Drink" name, or the House Tea fallback instead of an error.

use super::drink::{Category, Drink};
use super::money::Money;
use crate::{Result, SipError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Name reported for keys missing from the catalog
pub const UNKNOWN_DRINK_NAME: &str = "Unknown Drink";

/// One purchasable drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable drink key shared with the mood index and cart
    pub key: String,

    /// Display name; unique ignoring case
    pub name: String,

    pub price: Money,

    #[serde(default)]
    pub emoji: String,

    pub category: Category,

    /// Ordered, never empty
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn to_drink(&self) -> Drink {
        Drink {
            name: self.name.clone(),
            category: self.category,
            ingredients: self.ingredients.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Sorted by key so menu rendering is deterministic
    entries: BTreeMap<String, CatalogEntry>,
    /// Lowercased display name -> key
    by_name: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog, rejecting entries that would make lookups ambiguous
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut catalog = Catalog::default();

        for entry in entries {
            if entry.key.trim().is_empty() {
                return Err(SipError::Menu(format!(
                    "Drink '{}' has an empty key",
                    entry.name
                )));
            }
            if entry.name.trim().is_empty() {
                return Err(SipError::Menu(format!(
                    "Drink '{}' has an empty name",
                    entry.key
                )));
            }
            if entry.ingredients.is_empty() {
                return Err(SipError::Menu(format!(
                    "Drink '{}' has no ingredients",
                    entry.key
                )));
            }
            if catalog.entries.contains_key(&entry.key) {
                return Err(SipError::Menu(format!(
                    "Duplicate drink key '{}'",
                    entry.key
                )));
            }

            let lowered = entry.name.to_lowercase();
            if let Some(existing) = catalog.by_name.get(&lowered) {
                return Err(SipError::Menu(format!(
                    "Drinks '{}' and '{}' share the name '{}'",
                    existing, entry.key, entry.name
                )));
            }

            catalog.by_name.insert(lowered, entry.key.clone());
            catalog.entries.insert(entry.key.clone(), entry);
        }

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Zero for unknown keys
    pub fn price_of(&self, key: &str) -> Money {
        match self.entries.get(key) {
            Some(entry) => entry.price,
            None => {
                debug!(key, "Price requested for unknown drink key");
                Money::ZERO
            }
        }
    }

    pub fn name_of(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_DRINK_NAME)
    }

    pub fn emoji_of(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .map(|e| e.emoji.as_str())
            .unwrap_or("")
    }

    /// All entries in lexicographic key order
    pub fn display_all(&self) -> Vec<&CatalogEntry> {
        self.entries.values().collect()
    }

    /// Exact, case-insensitive match on a display name
    pub fn is_known_name(&self, text: &str) -> bool {
        self.key_for_name(text).is_some()
    }

    pub fn key_for_name(&self, text: &str) -> Option<&str> {
        self.by_name
            .get(&text.to_lowercase())
            .map(String::as_str)
    }

    /// A fresh drink for `key`, or House Tea when the key is unknown
    pub fn build_drink(&self, key: &str) -> Drink {
        match self.entries.get(key) {
            Some(entry) => entry.to_drink(),
            None => {
                debug!(key, "Unknown drink key, serving house tea");
                Drink::house_tea()
            }
        }
    }
}
