use serde::{Deserialize, Serialize};
use std::fmt;

/// Drink family; selects the brew narration and nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Smoothie,
    Tea,
    Coffee,
    Elixir,
    Cocoa,
}

/// Narration used while a drink of some category is prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrewTemplate {
    /// Icon printed in front of "Brewing your ..."
    pub opener: &'static str,
    /// Wraps each ingredient: `{step_prefix}{ingredient}{step_suffix}`
    pub step_prefix: &'static str,
    pub step_suffix: &'static str,
    pub finish: &'static str,
}

const SMOOTHIE_BREW: BrewTemplate = BrewTemplate {
    opener: "✨",
    step_prefix: "🥭 Adding ",
    step_suffix: "...",
    finish: "🧊 Blending until smooth and bright...",
};

const TEA_BREW: BrewTemplate = BrewTemplate {
    opener: "🍵",
    step_prefix: "🌿 Steeping ",
    step_suffix: "...",
    finish: "🫖 Letting the warmth steep softly...",
};

const COFFEE_BREW: BrewTemplate = BrewTemplate {
    opener: "☕",
    step_prefix: "💥 Preparing ",
    step_suffix: "...",
    finish: "🔥 Extracting a bold and comforting pour...",
};

const ELIXIR_BREW: BrewTemplate = BrewTemplate {
    opener: "🌟",
    step_prefix: "✨ Mixing ",
    step_suffix: " gently...",
    finish: "💫 Infusing with a whisper of comfort...",
};

const COCOA_BREW: BrewTemplate = BrewTemplate {
    opener: "🍫",
    step_prefix: "🫗 Melting/Adding ",
    step_suffix: "...",
    finish: "☁️  Stirring until nostalgia warms the cup...",
};

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Smoothie,
        Category::Tea,
        Category::Coffee,
        Category::Elixir,
        Category::Cocoa,
    ];

    pub fn brew_template(self) -> &'static BrewTemplate {
        match self {
            Category::Smoothie => &SMOOTHIE_BREW,
            Category::Tea => &TEA_BREW,
            Category::Coffee => &COFFEE_BREW,
            Category::Elixir => &ELIXIR_BREW,
            Category::Cocoa => &COCOA_BREW,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Smoothie => "smoothie",
            Category::Tea => "tea",
            Category::Coffee => "coffee",
            Category::Elixir => "elixir",
            Category::Cocoa => "cocoa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drink materialized from the catalog for one serving
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drink {
    pub name: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub description: String,
}

pub const HOUSE_TEA_NAME: &str = "House Tea";

impl Drink {
    /// Fallback served for keys the catalog does not know
    pub fn house_tea() -> Self {
        Self {
            name: HOUSE_TEA_NAME.to_string(),
            category: Category::Tea,
            ingredients: vec!["water".to_string()],
            description: "A simple sip.".to_string(),
        }
    }

    /// Lines narrating how this drink is made, in order
    pub fn brew_narration(&self) -> Vec<String> {
        let template = self.category.brew_template();
        let mut lines = Vec::with_capacity(self.ingredients.len() + 2);
        lines.push(format!("{} Brewing your {}...", template.opener, self.name));
        lines.extend(self.ingredients.iter().map(|ingredient| {
            format!(
                "{}{}{}",
                template.step_prefix, ingredient, template.step_suffix
            )
        }));
        lines.push(template.finish.to_string());
        lines
    }

    /// Title printed when the drink is served
    pub fn serve_title(&self) -> String {
        format!("* {} *", self.name.to_uppercase())
    }
}
