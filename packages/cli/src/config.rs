use landkit_compiler_html::{ExportOptions, PageMeta};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "landkit.config.json";

/// Landkit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the saved page state
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Export output directory
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Document metadata of the exported page
    #[serde(default)]
    pub page: PageMeta,

    /// Export defaults; command-line flags override these
    #[serde(default)]
    pub export: ExportOptions,
}

fn default_storage_dir() -> String {
    ".landkit".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_storage_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.storage_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            out_dir: default_out_dir(),
            page: PageMeta::default(),
            export: ExportOptions::default(),
        }
    }
}
