use super::{load_menu, CommandHandler};
use crate::cli::repl::Shell;
use crate::Result;
use std::io;
use std::path::PathBuf;

/// Handler for the `open` command
pub struct OpenCommand {
    pub menu_path: Option<PathBuf>,
}

impl CommandHandler for OpenCommand {
    fn execute(&self) -> Result<()> {
        let (menu, _) = load_menu(self.menu_path.as_deref())?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(&menu, stdin.lock(), stdout.lock()).run()
    }

    fn name(&self) -> &'static str {
        "open"
    }
}

impl OpenCommand {
    pub fn new(menu_path: Option<PathBuf>) -> Self {
        Self { menu_path }
    }
}
