//! One café visit: the boundary the shell talks to
//!
//! A session borrows the read-only [`Menu`] and owns the current customer's
//! [`Cart`]. Every method returns plain values; nothing here prints.

use crate::menu::{CatalogEntry, Drink, Menu, MoodEntry, Money};
use crate::order::{Cart, CartSummary, Receipt};
use crate::{Result, SipError};
use serde::Serialize;

/// A catalog entry annotated with the mood that suggests it
#[derive(Debug, Clone, Serialize)]
pub struct MenuRow<'m> {
    pub mood: Option<&'m str>,
    #[serde(flatten)]
    pub entry: &'m CatalogEntry,
}

/// Result of asking for a drink by mood
#[derive(Debug, Clone)]
pub struct Suggestion<'m> {
    pub mood: &'m MoodEntry,
    pub key: &'m str,
    pub drink: Drink,
    pub price: Money,
}

#[derive(Debug)]
pub struct CafeSession<'m> {
    menu: &'m Menu,
    cart: Cart,
    served: u32,
}

impl<'m> CafeSession<'m> {
    pub fn new(menu: &'m Menu) -> Self {
        Self {
            menu,
            cart: Cart::new(),
            served: 0,
        }
    }

    pub fn menu(&self) -> &'m Menu {
        self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Customers checked out so far in this run
    pub fn served(&self) -> u32 {
        self.served
    }

    pub fn list_moods(&self) -> Vec<&'m str> {
        self.menu.moods.supported_moods()
    }

    /// Menu rows sorted by drink key
    pub fn list_catalog_entries(&self) -> Vec<MenuRow<'m>> {
        let moods = &self.menu.moods;
        self.menu
            .catalog
            .display_all()
            .into_iter()
            .map(|entry| MenuRow {
                mood: moods.key_to_mood(&entry.key),
                entry,
            })
            .collect()
    }

    pub fn resolve_drink_by_name(&self, text: &str) -> Option<&'m CatalogEntry> {
        let catalog = &self.menu.catalog;
        catalog.key_for_name(text).and_then(|key| catalog.get(key))
    }

    pub fn suggest_by_mood(&self, mood_text: &str) -> Result<Suggestion<'m>> {
        let moods = &self.menu.moods;
        let catalog = &self.menu.catalog;

        let drink = moods.suggest_drink(catalog, mood_text)?;
        let mood = moods.entry(mood_text).ok_or_else(|| SipError::MoodNotFound {
            mood: mood_text.to_string(),
        })?;

        Ok(Suggestion {
            mood,
            key: mood.drink_key.as_str(),
            price: catalog.price_of(&mood.drink_key),
            drink,
        })
    }

    pub fn preview(&self, key: &str) -> Drink {
        self.menu.catalog.build_drink(key)
    }

    pub fn add_to_cart(&mut self, key: &str, quantity: u32) {
        self.cart.add_item(key, quantity);
    }

    pub fn view_cart(&self) -> CartSummary {
        self.cart.summary(&self.menu.catalog)
    }

    /// Check out the current customer and start a fresh cart for the next one
    pub fn checkout(&mut self, customer_name: &str) -> Option<Receipt> {
        let receipt = self.cart.checkout(&self.menu.catalog, customer_name)?;
        self.cart = Cart::new();
        self.served += 1;
        Some(receipt)
    }
}
