//! Menu documents read from disk, and the choice between file and bundled
//! data.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{MenuError, Result};
use crate::models::MenuData;

use super::bundled::bundled;

/// Read a menu from a JSON document on disk. Read failures map to
/// [`MenuError::Load`] and bad JSON to [`MenuError::Parse`], both carrying the
/// path.
pub fn load_file(path: &Path) -> Result<MenuData> {
    let content = fs::read_to_string(path).map_err(|source| MenuError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| MenuError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the menu for this run: the configured file if any, otherwise the
/// bundled menu unless disabled. `Ok(None)` means no data source is available.
pub fn resolve(config: &Config) -> Result<Option<MenuData>> {
    if let Some(path) = &config.data_path {
        let data = load_file(path)?;
        info!(path = %path.display(), "loaded menu file");
        return Ok(Some(data));
    }
    if config.use_bundled {
        info!("using bundled menu");
        return bundled().map(Some);
    }
    warn!("no menu file configured and bundled menu disabled");
    Ok(None)
}
