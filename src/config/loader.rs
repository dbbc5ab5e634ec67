use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SlopGuardError};

use super::Config;

pub const CONFIG_FILE_NAME: &str = ".slop-guard.toml";

/// Loads configuration from disk.
pub trait ConfigLoader {
    /// Loads from the nearest config file, walking up from the current
    /// directory. Falls back to defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if a found file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Loads a specific config file. Unlike discovery, the file must
    /// exist.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Nearest `.slop-guard.toml` at or above `start`.
    #[must_use]
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    fn parse(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| SlopGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let cwd = std::env::current_dir()?;
        match Self::discover(&cwd) {
            Some(path) => Self::parse(&path),
            None => Ok(Config::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Err(SlopGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        Self::parse(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
