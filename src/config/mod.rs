pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};

/// Directory under the project root holding the config file
pub const CONFIG_DIR: &str = ".screen-splice";

/// Default location of the screen every patch edits
pub const DEFAULT_TARGET: &str = "lib/screens/email_detail_screen.dart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigData {
    pub version: String,
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub write: WriteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteConfig {
    pub atomic: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_TARGET.to_string(),
        }
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self { atomic: true }
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            target: TargetConfig::default(),
            write: WriteConfig::default(),
        }
    }
}
