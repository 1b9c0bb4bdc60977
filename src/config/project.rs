use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigData, CONFIG_DIR};
use crate::error::{ConfigError, SpliceError, SpliceResult};

/// Keys reachable through `config get` / `config set`
pub const KEYS: &[&str] = &["target.path", "write.atomic"];

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
    root: PathBuf,
}

impl Config {
    pub fn load_or_default(project_root: impl AsRef<Path>) -> SpliceResult<Self> {
        let root = project_root.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_DIR).join("config.toml");

        let data = if config_path.exists() {
            let content =
                fs::read_to_string(&config_path).map_err(|e| SpliceError::io(&config_path, e))?;
            toml::from_str(&content).map_err(|e| ConfigError::Invalid(e.to_string()))?
        } else {
            ConfigData::default()
        };

        Ok(Self {
            data,
            path: config_path,
            root,
        })
    }

    /// Write a default config file unless one already exists.
    /// Returns whether a new file was created.
    pub fn init(project_root: impl AsRef<Path>) -> SpliceResult<bool> {
        let config = Self::load_or_default(project_root)?;
        if config.path.exists() {
            return Ok(false);
        }

        config.save()?;
        Ok(true)
    }

    pub fn save(&self) -> SpliceResult<()> {
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| SpliceError::io(dir, e))?;
        }

        fs::write(&self.path, content).map_err(|e| SpliceError::io(&self.path, e))?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> SpliceResult<()> {
        match key {
            "target.path" => {
                if value.trim().is_empty() {
                    return Err(invalid_value(key, value));
                }
                self.data.target.path = value.to_string();
            }
            "write.atomic" => {
                self.data.write.atomic = value.parse().map_err(|_| invalid_value(key, value))?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        }

        self.save()
    }

    pub fn get(&self, key: &str) -> SpliceResult<String> {
        let value = match key {
            "target.path" => self.data.target.path.clone(),
            "write.atomic" => self.data.write.atomic.to_string(),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        };

        Ok(value)
    }

    /// Target file resolved against the project root
    pub fn target_path(&self) -> PathBuf {
        self.root.join(&self.data.target.path)
    }
}

fn invalid_value(key: &str, value: &str) -> SpliceError {
    ConfigError::InvalidValue {
        field: key.to_string(),
        value: value.to_string(),
    }
    .into()
}
