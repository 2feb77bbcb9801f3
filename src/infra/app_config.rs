use crate::application::review::ReviewCache;
use crate::application::review::cache::DEFAULT_CAPACITY;
use crate::domain::{ConfigError, MatchLanguage, SearchOptions};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchDefaults {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub language: MatchLanguage,
}

impl SearchDefaults {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
        }
    }

    /// Search options with explicit per-run choices taking precedence.
    pub fn resolve(
        &self,
        case_sensitive: Option<bool>,
        whole_word: Option<bool>,
    ) -> SearchOptions {
        SearchOptions {
            case_sensitive: case_sensitive.unwrap_or(self.case_sensitive),
            whole_word: whole_word.unwrap_or(self.whole_word),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub review_cache_capacity: usize,
    pub search: SearchDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            review_cache_capacity: DEFAULT_CAPACITY,
            search: SearchDefaults::default(),
        }
    }
}

impl AppConfig {
    pub fn review_cache(&self) -> ReviewCache {
        ReviewCache::new(self.review_cache_capacity)
    }
}

/// Loads the config, falling back to defaults when it is missing or invalid.
pub fn load_config() -> AppConfig {
    let path = config_path();
    if !path.exists() {
        return AppConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using default config: {}", err);
            AppConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents).map_err(write_err)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("TRANSREVIEW_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    data_dir_from(|name| std::env::var_os(name), home::home_dir())
}

/// `TRANSREVIEW_DATA_HOME`, else `$XDG_DATA_HOME/transreview`, else
/// `~/.transreview`.
fn data_dir_from(var: impl Fn(&str) -> Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(path) = var("TRANSREVIEW_DATA_HOME") {
        return PathBuf::from(path);
    }
    if let Some(xdg) = var("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("transreview");
    }
    home.unwrap_or_else(|| PathBuf::from(".")).join(".transreview")
}
