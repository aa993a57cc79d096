use super::CommandHandler;
use crate::config::HOUSE_MENU;
use crate::io::SipPaths;
use crate::Result;
use anyhow::Context;
use tracing::info;

/// Handler for the `init` command
pub struct InitCommand {
    pub global: bool,
    pub force: bool,
}

impl CommandHandler for InitCommand {
    fn execute(&self) -> Result<()> {
        let paths = if self.global {
            SipPaths::user()?
        } else {
            SipPaths::for_project(&std::env::current_dir()?)
        };
        let target = paths.menu_file();

        if target.exists() && !self.force {
            println!("Menu already initialized at {}", target.display());
            println!("Use --force to overwrite it with the house menu.");
            return Ok(());
        }

        paths.ensure_directories()?;
        std::fs::write(&target, HOUSE_MENU)
            .with_context(|| format!("Failed to write menu file {}", target.display()))?;

        info!(path = %target.display(), "Wrote house menu");
        println!("✅ Wrote house menu to {}", target.display());
        println!("Edit it to change drinks, prices and moods.");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "init"
    }
}

impl InitCommand {
    pub fn new(global: bool, force: bool) -> Self {
        Self { global, force }
    }
}
