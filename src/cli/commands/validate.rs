use super::{load_menu, CommandHandler};
use crate::Result;
use std::path::PathBuf;

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub menu_path: Option<PathBuf>,
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<()> {
        let (menu, source) = load_menu(self.menu_path.as_deref())?;

        println!("✅ Menu is valid: {}", source);
        println!("   Café:   {}", menu.cafe_name);
        println!("   Drinks: {}", menu.catalog.len());
        println!("   Moods:  {}", menu.moods.len());

        let unmapped: Vec<&str> = menu
            .catalog
            .display_all()
            .into_iter()
            .filter(|entry| menu.moods.key_to_mood(&entry.key).is_none())
            .map(|entry| entry.key.as_str())
            .collect();
        if !unmapped.is_empty() {
            println!("   Drinks without a mood: {}", unmapped.join(", "));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

impl ValidateCommand {
    pub fn new(menu_path: Option<PathBuf>) -> Self {
        Self { menu_path }
    }
}
