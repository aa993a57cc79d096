use serde::Deserialize;

use crate::menu::{CatalogEntry, MoodEntry};

/// Root structure of a menu file (menu.yml)
#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    /// Name shown in the header, farewell and receipts
    #[serde(default = "default_cafe_name")]
    pub cafe_name: String,

    /// Drinks for sale, in any order
    pub drinks: Vec<CatalogEntry>,

    /// Mood keywords in registration order
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
}

fn default_cafe_name() -> String {
    "Sip Happens Café".to_string()
}

impl MenuConfig {
    pub fn from_yaml(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Category, Money};

    #[test]
    fn test_minimal_menu_defaults() {
        let yaml = r#"
drinks:
  - key: house_cocoa
    name: House Cocoa
    price: 99
    category: cocoa
    ingredients: [cocoa, milk]
"#;
        let config = MenuConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.cafe_name, "Sip Happens Café");
        assert!(config.moods.is_empty());

        let drink = &config.drinks[0];
        assert_eq!(drink.price, Money::from_whole(99));
        assert_eq!(drink.category, Category::Cocoa);
        assert_eq!(drink.emoji, "");
        assert_eq!(drink.description, "");
    }

    #[test]
    fn test_mood_uses_drink_field_for_key() {
        let yaml = r#"
drinks: []
moods:
  - mood: cozy
    drink: house_cocoa
    quote: Wrap up warm.
"#;
        let config = MenuConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.moods[0].drink_key, "house_cocoa");
        assert_eq!(config.moods[0].emoji, "");
    }

    #[test]
    fn test_missing_drinks_is_an_error() {
        assert!(MenuConfig::from_yaml("cafe_name: Empty\n").is_err());
    }
}
