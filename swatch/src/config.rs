//! Runtime configuration, read from `~/.config/swatch/config.json`.
//!
//! Every field is optional in the file; blank or mistyped values fall back
//! to their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use swatch_color::PaletteIndex;
use swatch_store::FileStore;
use thiserror::Error;

use crate::error::Result;
use crate::session::SessionController;

/// Storage key holding the saved collection.
pub const DEFAULT_STORAGE_KEY: &str = "@saved_colors";

const CONFIG_FILE: &str = "config.json";

/// Errors emitted while reading configuration or configured files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read palette file {path:?}: {source}")]
    PaletteRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How the configuration file was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading configuration from disk.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    config: SwatchConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub fn new(config: SwatchConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    pub fn into_parts(self) -> (SwatchConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Where saved colors live and which palette names them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchConfig {
    storage_key: String,
    store_dir: PathBuf,
    palette_path: Option<PathBuf>,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            store_dir: swatch_dir(),
            palette_path: None,
        }
    }
}

impl SwatchConfig {
    /// Load from the default location.
    pub fn load() -> std::result::Result<ConfigLoad, ConfigError> {
        Self::load_from_path(&config_path())
    }

    /// Load from `path`; a missing or unreadable file yields defaults.
    pub fn load_from_path(
        path: &Path,
    ) -> std::result::Result<ConfigLoad, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(ConfigLoad::new(
                    Self::default(),
                    ConfigLoadStatus::Missing,
                ));
            },
            Err(err) => return Err(err.into()),
        };

        let parsed = match serde_json::from_str::<Value>(&data) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("config file {} is invalid: {err}", path.display());
                return Ok(ConfigLoad::new(
                    Self::default(),
                    ConfigLoadStatus::Invalid(format!("{err}")),
                ));
            },
        };

        Ok(ConfigLoad::new(
            Self::from_json(&parsed),
            ConfigLoadStatus::Loaded,
        ))
    }

    /// Read known fields from a JSON object, keeping defaults for the rest.
    pub fn from_json(value: &Value) -> Self {
        let mut config = Self::default();

        if let Some(key) = read_string_field(value, "storage_key") {
            config.storage_key = key;
        }
        if let Some(dir) = read_string_field(value, "store_dir") {
            config.store_dir = PathBuf::from(dir);
        }
        if let Some(path) = read_string_field(value, "palette_path") {
            config.palette_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    pub fn palette_path(&self) -> Option<&Path> {
        self.palette_path.as_deref()
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = dir.into();
        self
    }

    pub fn with_palette_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.palette_path = Some(path.into());
        self
    }

    /// Load the configured palette, or the builtin one.
    ///
    /// Failures here mean the installation is broken and are not meant to
    /// be recovered from.
    pub fn palette(&self) -> Result<PaletteIndex> {
        let Some(path) = &self.palette_path else {
            return Ok(PaletteIndex::builtin()?);
        };

        let text = fs::read_to_string(path).map_err(|source| {
            ConfigError::PaletteRead {
                path: path.clone(),
                source,
            }
        })?;
        let palette = PaletteIndex::from_json(&text)?;
        log::info!(
            "loaded {} palette entries from {}",
            palette.len(),
            path.display()
        );
        Ok(palette)
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.store_dir)
    }

    /// Build the palette and file store, then open a session over them.
    pub async fn open_session(&self) -> Result<SessionController<FileStore>> {
        let palette = Arc::new(self.palette()?);
        SessionController::open(
            self.file_store(),
            self.storage_key.clone(),
            palette,
        )
        .await
    }
}

/// Path of the configuration file.
pub fn config_path() -> PathBuf {
    swatch_dir().join(CONFIG_FILE)
}

fn swatch_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("swatch");
    }

    std::env::temp_dir().join("swatch")
}

fn read_string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
