use crate::error::{Result, StockError, StorageAction};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stockroom.json";
pub const DEFAULT_DATA_FILE: &str = "inventory.csv";

/// Configuration for stockroom, stored in `stockroom.json` next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Inventory file. Relative paths resolve against the config directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Label printed after prices (e.g. "JPY", "円"). Display only.
    #[serde(default)]
    pub currency: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            currency: String::new(),
        }
    }
}

impl StockConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "currency"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(StockError::storage(
                    StorageAction::Read,
                    config_path.display().to_string(),
                    e,
                ))
            }
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);
        let write_err = |e: std::io::Error| {
            StockError::storage(
                StorageAction::Write,
                config_path.display().to_string(),
                e,
            )
        };

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(write_err)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(write_err)?;
        Ok(())
    }

    /// Inventory file path, resolved against `config_dir` when relative.
    pub fn data_path(&self, config_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.join(&self.data_file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(StockError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = PathBuf::from(value);
            }
            "currency" => self.currency = value.to_string(),
            _ => return Err(StockError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
