use super::{load_menu, CommandHandler};
use crate::cli::render;
use crate::session::CafeSession;
use crate::{Result, SipError};
use std::io::{self, Write};
use std::path::PathBuf;

/// Handler for the `suggest` command
pub struct SuggestCommand {
    pub menu_path: Option<PathBuf>,
    pub mood: Option<String>,
}

impl CommandHandler for SuggestCommand {
    fn execute(&self) -> Result<()> {
        let (menu, _) = load_menu(self.menu_path.as_deref())?;
        let session = CafeSession::new(&menu);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        let Some(mood) = self.mood.as_deref() else {
            let moods = &menu.moods;
            writeln!(out, "Supported moods:")?;
            for mood in session.list_moods() {
                writeln!(out, "  {} {:<12} {}", moods.emoji_of(mood), mood, moods.quote_of(mood))?;
            }
            return Ok(());
        };

        match session.suggest_by_mood(mood) {
            Ok(suggestion) => {
                render::mood_card(&mut out, &suggestion)?;
                render::brew(&mut out, &suggestion.drink)?;
                render::serve(&mut out, &suggestion.drink)?;
                writeln!(out, "Price: {}", suggestion.price)?;
                Ok(())
            }
            Err(e @ SipError::MoodNotFound { .. }) => {
                writeln!(out, "Try one of: {}", session.list_moods().join(", "))?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &'static str {
        "suggest"
    }
}

impl SuggestCommand {
    pub fn new(menu_path: Option<PathBuf>, mood: Option<String>) -> Self {
        Self { menu_path, mood }
    }
}
