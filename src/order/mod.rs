//! Cart bookkeeping and receipts

mod cart;
mod receipt;

pub use cart::{Cart, CartLine};
pub use receipt::{CartSummary, PricedLine, Receipt};

/// Name used when the customer doesn't give one
pub const GUEST_NAME: &str = "Guest";

/// Forgiving quantity input: anything that isn't a positive integer is 1
pub fn parse_quantity(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => quantity,
        _ => 1,
    }
}

pub fn customer_name_or_guest(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        GUEST_NAME.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_is_forgiving() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("two"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("99999999999"), 1);
    }

    #[test]
    fn test_blank_customer_is_guest() {
        assert_eq!(customer_name_or_guest(""), "Guest");
        assert_eq!(customer_name_or_guest("   "), "Guest");
        assert_eq!(customer_name_or_guest(" Ana "), "Ana");
    }
}
