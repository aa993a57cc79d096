use super::receipt::{CartSummary, PricedLine, Receipt};
use super::customer_name_or_guest;
use crate::menu::{Catalog, Money};
use serde::Serialize;
use tracing::{debug, info};

/// A drink key and how many cups of it are in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub key: String,
    pub quantity: u32,
}

/// Per-customer quantity ledger, in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add cups of `key`, merging with an existing line
    ///
    /// Quantities are coerced by the caller; zero is still treated as one.
    pub fn add_item(&mut self, key: &str, quantity: u32) {
        let quantity = quantity.max(1);
        match self.lines.iter_mut().find(|line| line.key == key) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                key: key.to_string(),
                quantity,
            }),
        }
        debug!(key, quantity, lines = self.lines.len(), "Added to cart");
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Unknown keys contribute nothing
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.lines
            .iter()
            .map(|line| catalog.price_of(&line.key).times(line.quantity))
            .sum()
    }

    pub fn summary(&self, catalog: &Catalog) -> CartSummary {
        CartSummary::from_lines(
            self.lines
                .iter()
                .map(|line| PricedLine::new(catalog, &line.key, line.quantity))
                .collect(),
        )
    }

    /// Finalize the order and empty the cart
    ///
    /// Returns `None` without touching anything when the cart is empty.
    pub fn checkout(&mut self, catalog: &Catalog, customer_name: &str) -> Option<Receipt> {
        if self.is_empty() {
            debug!("Checkout on empty cart ignored");
            return None;
        }

        let cups = self.item_count();
        let receipt = Receipt::new(customer_name_or_guest(customer_name), self.summary(catalog));
        self.lines.clear();

        info!(
            receipt = %receipt.number,
            customer = %receipt.customer,
            cups,
            total = %receipt.total,
            "Checked out"
        );
        Some(receipt)
    }
}
