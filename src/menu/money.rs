//! Fixed-currency amounts
//!
//! Prices are stored in minor units (centavos) so cart totals are exact.
//! Display always uses the café's single currency symbol followed by the
//! amount with exactly two fraction digits and no digit grouping.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// The one currency symbol every amount is printed with
pub const CURRENCY_SYMBOL: char = '₱';

/// A non-negative amount of money in minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn from_whole(units: u64) -> Self {
        Self {
            cents: units.saturating_mul(100),
        }
    }

    /// Price of `quantity` units at this unit price
    pub fn times(self, quantity: u32) -> Money {
        Money {
            cents: self.cents.saturating_mul(u64::from(quantity)),
        }
    }

    /// The amount without the currency symbol, e.g. `150.00`
    pub fn amount(self) -> String {
        format!("{}.{:02}", self.cents / 100, self.cents % 100)
    }

    fn from_f64(value: f64) -> std::result::Result<Self, String> {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("Invalid amount: {}", value));
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 {
            return Err(format!(
                "Amount {} has more than two fraction digits",
                value
            ));
        }
        if cents > u64::MAX as f64 {
            return Err(format!("Amount too large: {}", value));
        }
        Ok(Money::from_cents(cents as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, self.amount())
    }
}

impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(trimmed)
            .trim();

        if digits.is_empty() {
            return Err("Empty amount".to_string());
        }
        if digits.starts_with('-') {
            return Err(format!("Negative amount: {}", s));
        }

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(format!("Invalid amount: {}", s));
        }
        if frac.len() > 2 {
            return Err(format!("Amount {} has more than two fraction digits", s));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| format!("Amount too large: {}", s))?
        };
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map(|d| d * 10).unwrap_or(0),
            _ => frac.parse::<u64>().unwrap_or(0),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money::from_cents)
            .ok_or_else(|| format!("Amount too large: {}", s))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.amount())
    }
}

/// Accepts `150`, `150.5` or `"150.00"` in menu files
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative amount with at most two fraction digits")
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Money, E>
            where
                E: de::Error,
            {
                value
                    .checked_mul(100)
                    .map(Money::from_cents)
                    .ok_or_else(|| E::custom(format!("Amount too large: {}", value)))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Money, E>
            where
                E: de::Error,
            {
                let value = u64::try_from(value)
                    .map_err(|_| E::custom(format!("Negative amount: {}", value)))?;
                self.visit_u64(value)
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Money, E>
            where
                E: de::Error,
            {
                Money::from_f64(value).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Money, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}
