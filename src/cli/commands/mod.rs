pub mod init;
pub mod menu;
pub mod open;
pub mod suggest;
pub mod validate;

use crate::config::{MenuLoader, MenuSource};
use crate::menu::Menu;
use crate::Result;
use std::path::Path;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Resolve, parse and validate the menu for a command
pub fn load_menu(explicit: Option<&Path>) -> Result<(Menu, MenuSource)> {
    let project_root = std::env::current_dir()?;
    let (config, source) = MenuLoader::new(&project_root).load(explicit)?;
    let menu = Menu::from_config(&config)?;
    Ok((menu, source))
}
