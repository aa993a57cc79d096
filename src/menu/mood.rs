use super::catalog::Catalog;
use super::drink::Drink;
use crate::{Result, SipError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A mood keyword and the drink it suggests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,

    /// Drink key; must exist in the catalog
    #[serde(rename = "drink")]
    pub drink_key: String,

    pub quote: String,

    #[serde(default)]
    pub emoji: String,
}

/// Read-only mood -> drink table, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct MoodIndex {
    entries: Vec<MoodEntry>,
    by_mood: HashMap<String, usize>,
    by_key: HashMap<String, usize>,
}

fn normalize(mood: &str) -> String {
    mood.trim().to_lowercase()
}

impl MoodIndex {
    /// Register moods in order, failing on any drink key the catalog lacks
    pub fn new(entries: Vec<MoodEntry>, catalog: &Catalog) -> Result<Self> {
        let mut index = MoodIndex::default();

        for mut entry in entries {
            entry.mood = normalize(&entry.mood);
            if entry.mood.is_empty() {
                return Err(SipError::Menu(format!(
                    "Mood for drink '{}' is empty",
                    entry.drink_key
                )));
            }
            if index.by_mood.contains_key(&entry.mood) {
                return Err(SipError::Menu(format!("Duplicate mood '{}'", entry.mood)));
            }
            if !catalog.contains(&entry.drink_key) {
                return Err(SipError::Menu(format!(
                    "Mood '{}' refers to unknown drink '{}'",
                    entry.mood, entry.drink_key
                )));
            }

            let position = index.entries.len();
            index.by_mood.insert(entry.mood.clone(), position);
            // First mood registered for a drink labels it in the menu
            index.by_key.entry(entry.drink_key.clone()).or_insert(position);
            index.entries.push(entry);
        }

        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, mood: &str) -> Option<&MoodEntry> {
        let mood = normalize(mood);
        if mood.is_empty() {
            return None;
        }
        self.by_mood.get(&mood).map(|&i| &self.entries[i])
    }

    pub fn has_mood(&self, text: &str) -> bool {
        self.entry(text).is_some()
    }

    pub fn mood_to_key(&self, mood: &str) -> Option<&str> {
        self.entry(mood).map(|e| e.drink_key.as_str())
    }

    pub fn key_to_mood(&self, key: &str) -> Option<&str> {
        self.by_key
            .get(key)
            .map(|&i| self.entries[i].mood.as_str())
    }

    pub fn quote_of(&self, mood: &str) -> &str {
        self.entry(mood).map(|e| e.quote.as_str()).unwrap_or("")
    }

    pub fn emoji_of(&self, mood: &str) -> &str {
        self.entry(mood).map(|e| e.emoji.as_str()).unwrap_or("")
    }

    /// Moods in the order they were registered
    pub fn supported_moods(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.mood.as_str()).collect()
    }

    /// Resolve mood -> key -> drink
    ///
    /// This is the one lookup that fails instead of falling back, so the
    /// caller can tell "show a drink" apart from "show the hint".
    pub fn suggest_drink(&self, catalog: &Catalog, mood: &str) -> Result<Drink> {
        match self.mood_to_key(mood) {
            Some(key) => {
                debug!(mood, key, "Mood resolved");
                Ok(catalog.build_drink(key))
            }
            None => {
                warn!(mood, "Unrecognized mood");
                Err(SipError::MoodNotFound {
                    mood: mood.to_string(),
                })
            }
        }
    }
}
