//! Menu lookups
//!
//! The menu is two read-only tables built once at startup:
//!
//! ```text
//! MenuConfig (YAML)
//!     │
//!     ├── drinks ──► Catalog    key -> name, price, flavor profile
//!     │                 ▲
//!     └── moods  ──► MoodIndex  mood -> drink key (validated against the catalog)
//! ```
//!
//! Both are handed out by reference; nothing mutates them afterwards.

mod catalog;
mod drink;
mod money;
mod mood;

pub use catalog::{Catalog, CatalogEntry, UNKNOWN_DRINK_NAME};
pub use drink::{BrewTemplate, Category, Drink, HOUSE_TEA_NAME};
pub use money::{Money, CURRENCY_SYMBOL};
pub use mood::{MoodEntry, MoodIndex};

use crate::config::{self, MenuConfig};
use crate::Result;
use tracing::info;

/// Catalog and mood index for one café
#[derive(Debug, Clone)]
pub struct Menu {
    pub cafe_name: String,
    pub catalog: Catalog,
    pub moods: MoodIndex,
}

impl Menu {
    pub fn from_config(config: &MenuConfig) -> Result<Self> {
        let catalog = Catalog::new(config.drinks.clone())?;
        let moods = MoodIndex::new(config.moods.clone(), &catalog)?;

        info!(
            cafe = %config.cafe_name,
            drinks = catalog.len(),
            moods = moods.len(),
            "Menu ready"
        );

        Ok(Self {
            cafe_name: config.cafe_name.clone(),
            catalog,
            moods,
        })
    }

    /// The menu bundled with the binary
    pub fn house() -> Result<Self> {
        Self::from_config(&config::house_menu()?)
    }
}
