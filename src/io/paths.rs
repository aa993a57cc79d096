use crate::{Result, SipError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Directory name used for project-local menus
pub const PROJECT_DIR_NAME: &str = ".sip-happens";

/// File name of a menu inside a config directory
pub const MENU_FILE_NAME: &str = "menu.yml";

/// Where a café looks for its menu file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipPaths {
    /// Configuration directory (.sip-happens/ or the platform config dir)
    pub config_dir: PathBuf,
}

impl SipPaths {
    /// Paths in the platform's per-user config directory
    ///
    /// On Linux: ~/.config/sip-happens/
    /// On macOS: ~/Library/Application Support/sip-happens/
    pub fn user() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "sip-happens").ok_or_else(|| {
            SipError::Path("Failed to determine user config directory".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Paths for a specific project directory
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            config_dir: project_root.join(PROJECT_DIR_NAME),
        }
    }

    pub fn menu_file(&self) -> PathBuf {
        self.config_dir.join(MENU_FILE_NAME)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}
