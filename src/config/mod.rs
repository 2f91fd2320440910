// SPDX-License-Identifier: MPL-2.0
//! Persisted settings shared between the companion app and the patch module.
//!
//! The settings live in a `settings.toml` file in the platform config
//! directory. The companion app writes it; the patch module reads it from
//! inside the host process. [`PrefStore`] wraps the file as an explicit
//! store with a reload check, so both sides see updates without sharing
//! any runtime state.
//!
//! # Examples
//!
//! ```no_run
//! use dictswap::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.injected_language = Some("pt_BR".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DictSwap";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display language of the companion app itself (BCP-47).
    pub language: Option<String>,
    /// Tag of the language whose dictionary lookups are redirected.
    /// Absent means the keyboard keeps its stock dictionaries.
    #[serde(default)]
    pub injected_language: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Snapshot of a file's identity on disk, used for the staleness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: SystemTime,
    len: u64,
}

impl FileStamp {
    fn of(path: &Path) -> Option<Self> {
        let meta = fs::metadata(path).ok()?;
        Some(Self {
            modified: meta.modified().ok()?,
            len: meta.len(),
        })
    }
}

/// Explicit store over the shared settings file.
///
/// The settings process and the hooked process each hold their own store
/// over the same path. Consistency is advisory only: the patch module
/// calls [`PrefStore::reload_if_changed`] before each read, which
/// re-reads the file when its modification time or size moved. There is
/// no locking and no atomicity across the check and the read.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    config: Config,
    seen: Option<FileStamp>,
}

impl PrefStore {
    /// Opens a store over an explicit path, reading the current contents
    /// if the file exists. A missing file reads as defaults.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            config: Config::default(),
            seen: None,
        };
        let _ = store.reload_if_changed();
        store
    }

    /// Opens the store over the default settings path.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform provides no config directory.
    pub fn open_default() -> Result<Self> {
        let path = default_config_path()
            .ok_or_else(|| Error::Config("no configuration directory available".into()))?;
        Ok(Self::open(path))
    }

    /// Re-reads the backing file when it changed on disk since the last
    /// read. Returns whether a reload happened.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read; the
    /// previously loaded values are kept in that case.
    pub fn reload_if_changed(&mut self) -> Result<bool> {
        let stamp = FileStamp::of(&self.path);
        if stamp == self.seen {
            return Ok(false);
        }
        self.config = if self.path.exists() {
            load_from_path(&self.path)?
        } else {
            Config::default()
        };
        self.seen = stamp;
        Ok(true)
    }

    /// The configured dictionary language tag, if any.
    #[must_use]
    pub fn language_tag(&self) -> Option<&str> {
        self.config.injected_language.as_deref()
    }

    /// Persists a new tag (`None` clears it), rewriting the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written; the in-memory
    /// value is updated regardless, and the user retries by reselecting.
    pub fn set_language_tag(&mut self, tag: Option<String>) -> Result<()> {
        self.config.injected_language = tag;
        save_to_path(&self.config, &self.path)?;
        self.seen = FileStamp::of(&self.path);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
