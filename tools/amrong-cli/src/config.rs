//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["amrong.toml", ".amrong.toml", "amrong.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop presentation.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Where state is kept.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.shop.name.trim().is_empty() {
            errors.push("shop.name must not be empty".to_string());
        }
        if self.storage.dir.trim().is_empty() {
            errors.push("storage.dir must not be empty".to_string());
        }
        errors
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Shop presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Name printed above the menu and receipts.
    #[serde(default = "default_shop_name")]
    pub name: String,
}

fn default_shop_name() -> String {
    "Amrong Chicken".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `cart.json`, `reservations.json` and
    /// `contactMessages.json`. Relative paths resolve against the directory
    /// of the config file, or the working directory without one.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".amrong".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Generate a default amrong.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Amrong storefront configuration

[shop]
name = "{name}"

[storage]
# Cart, reservations and contact messages live here.
dir = ".amrong"
"#,
        name = name
    )
}
