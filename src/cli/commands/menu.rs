use super::{load_menu, CommandHandler};
use crate::cli::app::OutputFormat;
use crate::cli::render;
use crate::session::CafeSession;
use crate::Result;
use std::io::{self, Write};
use std::path::PathBuf;

/// Handler for the `menu` command
pub struct MenuCommand {
    pub menu_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CommandHandler for MenuCommand {
    fn execute(&self) -> Result<()> {
        let (menu, _) = load_menu(self.menu_path.as_deref())?;
        let session = CafeSession::new(&menu);
        let rows = session.list_catalog_entries();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Text => render::menu(&mut out, &rows)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "menu"
    }
}

impl MenuCommand {
    pub fn new(menu_path: Option<PathBuf>, format: OutputFormat) -> Self {
        Self { menu_path, format }
    }
}
