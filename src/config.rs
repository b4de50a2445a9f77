//! Runtime configuration read from `~/.menu-board/config.toml`. Every field has
//! a default so a missing file simply yields the bundled menu in the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".menu-board";
/// Config file name stored inside the application data directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Subdirectory for rolling log files.
const LOG_DIR_NAME: &str = "logs";

/// Container the menu tree is rendered into unless configured otherwise.
pub const DEFAULT_CONTAINER_ID: &str = "menu-container";
/// Search input whose value drives filtering unless configured otherwise.
pub const DEFAULT_SEARCH_INPUT_ID: &str = "search-input";

/// Settings for one menu-board run, read from TOML and overridable from the
/// command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON menu file. When unset the bundled menu is used.
    pub data_path: Option<PathBuf>,
    /// Where rolling log files go. Defaults to `~/.menu-board/logs`.
    pub log_dir: Option<PathBuf>,
    /// Id of the container the menu renders into.
    pub container_id: String,
    /// Id of the search input read on every query change.
    pub search_input_id: String,
    /// Fall back to the bundled menu when no data file is configured.
    pub use_bundled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            log_dir: None,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            search_input_id: DEFAULT_SEARCH_INPUT_ID.to_string(),
            use_bundled: true,
        }
    }
}

impl Config {
    /// Load from the default location, `~/.menu-board/config.toml`.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| MenuError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|err| MenuError::Config(format!("{}: {err}", path.display())))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(data_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Apply command-line overrides on top of the file settings. An explicit
    /// data file replaces the configured one; `no_bundled` disables the
    /// bundled fallback.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, no_bundled: bool) -> Self {
        if let Some(path) = data_path {
            self.data_path = Some(path);
        }
        if no_bundled {
            self.use_bundled = false;
        }
        self
    }

    /// Directory for log files, defaulting to `~/.menu-board/logs`.
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(data_dir()?.join(LOG_DIR_NAME)),
        }
    }
}

/// Resolve the absolute path to the application folder inside the user's home.
fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| MenuError::Config("could not locate home directory".to_string()))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
