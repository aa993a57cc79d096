use crate::menu::{Catalog, Money};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A cart line with its price resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedLine {
    pub key: String,
    pub name: String,
    pub emoji: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

impl PricedLine {
    pub fn new(catalog: &Catalog, key: &str, quantity: u32) -> Self {
        let unit_price = catalog.price_of(key);
        Self {
            key: key.to_string(),
            name: catalog.name_of(key).to_string(),
            emoji: catalog.emoji_of(key).to_string(),
            quantity,
            unit_price,
            subtotal: unit_price.times(quantity),
        }
    }
}

/// What the customer currently has in their cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<PricedLine>,
    pub total: Money,
}

impl CartSummary {
    pub fn from_lines(lines: Vec<PricedLine>) -> Self {
        let total = lines.iter().map(|l| l.subtotal).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Snapshot produced by a checkout
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub number: Uuid,
    pub customer: String,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<PricedLine>,
    pub total: Money,
}

impl Receipt {
    pub fn new(customer: String, summary: CartSummary) -> Self {
        Self {
            number: Uuid::new_v4(),
            customer,
            issued_at: Utc::now(),
            lines: summary.lines,
            total: summary.total,
        }
    }

    /// Number of cups across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
