//! User configuration
//!
//! Persisted as TOML under the platform config directory
//! (e.g. `~/.config/word_grid/word_grid.toml` on Linux). Loading is
//! best-effort: a missing or unreadable file yields defaults.

use crate::dictionary::DEFAULT_FILE_NAME;
use crate::morph::lexicon::DEFAULT_PREDICTION_WEIGHT;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_NAME: &str = "word_grid";

/// Color theme of the terminal UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dictionary file; defaults to the platform data directory
    pub dictionary_path: Option<PathBuf>,
    /// Extra lexicon merged over the embedded one
    pub lexicon_path: Option<PathBuf>,
    pub theme: ThemeName,
    /// Shuffle the grid letters at startup
    pub shuffle_grid: bool,
    /// Scale for suffix-guessed parses
    pub prediction_weight: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            lexicon_path: None,
            theme: ThemeName::Dark,
            shuffle_grid: false,
            prediction_weight: DEFAULT_PREDICTION_WEIGHT,
        }
    }
}

impl Config {
    /// Dictionary file to use: the configured one, else the default location
    #[must_use]
    pub fn dictionary_file(&self) -> PathBuf {
        self.dictionary_path
            .clone()
            .unwrap_or_else(default_dictionary_path)
    }

    /// Parse a config from TOML text
    ///
    /// # Errors
    /// Returns the TOML error if the text is not a valid config.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Default config file path, falling back to the working directory
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME))
        .or_else(|| env::current_dir().ok())
        .map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Directory for the dictionary and log files
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        |dir| dir.join(APP_NAME),
    )
}

/// Default dictionary file location
#[must_use]
pub fn default_dictionary_path() -> PathBuf {
    data_dir().join(DEFAULT_FILE_NAME)
}

/// Load configuration from `path`, creating a default file if absent
///
/// Only a missing file is created. Unreadable or unparseable files fall
/// back to defaults without being overwritten.
#[must_use]
pub fn load_or_create(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(text) => match Config::from_toml(&text) {
            Ok(cfg) => {
                debug!(path = %path.display(), "loaded config");
                cfg
            }
            Err(e) => {
                warn!("ignoring invalid config {}: {e}", path.display());
                Config::default()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let cfg = Config::default();
            save(path, &cfg);
            cfg
        }
        Err(e) => {
            warn!("could not read config {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Load configuration from the default location
#[must_use]
pub fn load_or_create_default() -> Config {
    config_path().map_or_else(Config::default, |path| load_or_create(&path))
}

/// Save configuration as TOML, best-effort
pub fn save(path: &Path, cfg: &Config) {
    let text = match toml::to_string(cfg) {
        Ok(text) => text,
        Err(e) => {
            warn!("could not serialize config: {e}");
            return;
        }
    };
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("could not create config directory {}: {e}", parent.display());
        return;
    }
    if let Err(e) = fs::write(path, text) {
        warn!("could not write config {}: {e}", path.display());
    }
}
