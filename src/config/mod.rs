use crate::core::aggregate::DEFAULT_WINDOW;
use crate::db::store::DEFAULT_SLOT;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Number of most recent entries drawn in the report chart.
    #[serde(default = "default_chart_window")]
    pub chart_window: usize,
    /// Characters of a note shown in the list before it is cut.
    #[serde(default = "default_note_preview")]
    pub note_preview: usize,
    #[serde(default = "default_show_emoji")]
    pub show_emoji: bool,
    /// Key of the kv row holding the entry list.
    #[serde(default = "default_storage_slot")]
    pub storage_slot: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_chart_window() -> usize {
    DEFAULT_WINDOW
}
fn default_note_preview() -> usize {
    50
}
fn default_show_emoji() -> bool {
    true
}
fn default_storage_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            chart_window: default_chart_window(),
            note_preview: default_note_preview(),
            show_emoji: default_show_emoji(),
            storage_slot: default_storage_slot(),
        }
    }
}

impl Config {
    /// `~/.rpainlog`, or `./.rpainlog` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rpainlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpainlog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rpainlog.sqlite")
    }

    /// A `--db` value: `~` is expanded, relative names live in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from the standard file, or defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {}", e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Create the config directory and file. With `is_test` nothing is written
    /// besides the directory, and the returned config is not persisted.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
