//! Flat-file preference store.
//!
//! Each preference occupies one line of the backing file, at the line index
//! given by [`PrefKey::position`]. Every write reads the whole file, replaces
//! one line and rewrites the whole file. There is no locking; the store is
//! meant for a single interactive process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::defaults::default_lines;
use super::types::{PrefKey, PrefValue, PreferenceRecord};
use crate::config::{APP_NAME, PREF_FILE, PREF_LINES};
use crate::error::{PrefError, Result};

// =============================================================================
// Paths
// =============================================================================

/// Backing file relative to the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from(PREF_FILE)
}

/// Get the per-user configuration directory.
/// - Linux: ~/.config/pref-editor/
/// - Windows: %APPDATA%\pref-editor\
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(PrefError::ConfigDirNotFound)
}

/// Backing file under the per-user configuration directory.
pub fn user_pref_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(PREF_FILE))
}

// =============================================================================
// Store
// =============================================================================

/// Preference store bound to one backing file.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with the default record.
    pub fn write_defaults(&self) -> Result<()> {
        self.write_lines(&default_lines())?;
        info!("Wrote default preferences to {}", self.path.display());
        Ok(())
    }

    /// Ensure the backing file exists, writing defaults if it is missing.
    ///
    /// Returns `true` if the defaults had to be written.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.write_defaults()?;
        Ok(true)
    }

    /// Read one preference. A missing backing file is created with defaults first.
    pub fn get(&self, key: PrefKey) -> Result<PrefValue> {
        let lines = self.read_lines()?;
        PrefValue::decode(key, &lines[key.position()])
    }

    /// Overwrite the line for `key` with the encoded `value`.
    ///
    /// The value is not checked against the key's kind; callers are trusted.
    pub fn set(&self, key: PrefKey, value: &PrefValue) -> Result<()> {
        let mut lines = self.read_lines()?;
        lines[key.position()] = value.encode();
        self.write_lines(&lines)?;
        debug!("Set {} = {}", key, value);
        Ok(())
    }

    /// Read all five preferences at once.
    pub fn load_record(&self) -> Result<PreferenceRecord> {
        let lines = self.read_lines()?;
        PreferenceRecord::from_lines(&lines)
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        self.ensure_exists()?;

        let content =
            fs::read_to_string(&self.path).map_err(|e| PrefError::io(&self.path, e))?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        if lines.len() < PREF_LINES {
            return Err(PrefError::MalformedFile {
                path: self.path.clone(),
                lines: lines.len(),
            });
        }

        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PrefError::io(parent, e))?;
        }

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|e| PrefError::io(&self.path, e))
    }
}
