//! Menu discovery and loading
//!
//! Sources, in precedence order:
//!
//! 1. `--menu <path>` given on the command line
//! 2. `.sip-happens/menu.yml` in the current directory
//! 3. `menu.yml` in the user config directory (e.g. `~/.config/sip-happens/`)
//! 4. The house menu compiled into the binary
//!
//! A file that exists but fails to parse is an error; the loader never
//! falls back past a broken menu.

use super::types::MenuConfig;
use crate::io::SipPaths;
use crate::{Result, SipError};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The menu bundled with the binary
pub const HOUSE_MENU: &str = include_str!("../../fixtures/menu.yml");

pub fn house_menu() -> Result<MenuConfig> {
    MenuConfig::from_yaml(HOUSE_MENU)
        .map_err(|e| SipError::Config(format!("Built-in house menu is invalid: {}", e)))
}

/// Where the active menu came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    House,
}

impl fmt::Display for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuSource::Explicit(path) => write!(f, "{}", path.display()),
            MenuSource::Project(path) => write!(f, "{} (project)", path.display()),
            MenuSource::User(path) => write!(f, "{} (user)", path.display()),
            MenuSource::House => write!(f, "built-in house menu"),
        }
    }
}

/// Resolves and parses menu files
pub struct MenuLoader {
    project_menu: PathBuf,
    user_menu: Option<PathBuf>,
}

impl MenuLoader {
    /// Loader rooted at `project_root`, also consulting the user config directory
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_menu: SipPaths::for_project(project_root).menu_file(),
            user_menu: SipPaths::user().ok().map(|paths| paths.menu_file()),
        }
    }

    /// Override (or disable) the user-level menu location
    pub fn with_user_menu(mut self, path: Option<PathBuf>) -> Self {
        self.user_menu = path;
        self
    }

    /// Parse one menu file
    pub fn load_file(path: &Path) -> Result<MenuConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SipError::Config(format!("Failed to read menu file {}: {}", path.display(), e))
        })?;

        MenuConfig::from_yaml(&contents).map_err(|e| {
            SipError::Config(format!("Failed to parse menu file {}: {}", path.display(), e))
        })
    }

    /// Pick the menu source without reading it
    pub fn resolve(&self, explicit: Option<&Path>) -> MenuSource {
        if let Some(path) = explicit {
            return MenuSource::Explicit(path.to_path_buf());
        }
        if self.project_menu.is_file() {
            return MenuSource::Project(self.project_menu.clone());
        }
        if let Some(user_menu) = &self.user_menu {
            if user_menu.is_file() {
                return MenuSource::User(user_menu.clone());
            }
        }
        MenuSource::House
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<(MenuConfig, MenuSource)> {
        let source = self.resolve(explicit);
        debug!(source = %source, "Resolved menu source");

        let config = match &source {
            MenuSource::Explicit(path) => {
                if !path.exists() {
                    return Err(SipError::Config(format!(
                        "Menu file not found: {}",
                        path.display()
                    )));
                }
                Self::load_file(path)?
            }
            MenuSource::Project(path) | MenuSource::User(path) => Self::load_file(path)?,
            MenuSource::House => house_menu()?,
        };

        info!(
            source = %source,
            drinks = config.drinks.len(),
            moods = config.moods.len(),
            "Loaded menu"
        );
        Ok((config, source))
    }
}
