//! CLI execution context.

use std::path::{Path, PathBuf};

use amrong_commerce::repository::StoreCartRepository;
use amrong_commerce::Storefront;
use amrong_store::Store;
use anyhow::{Context as _, Result};
use tracing::debug;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::{Output, OutputSink};

/// The storefront session every shop command runs against.
pub type Shop = Storefront<StoreCartRepository, OutputSink>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            debug!(path = %path.display(), "using config file");
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative config paths are anchored to.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    /// The storage directory.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(self.base_dir(), &self.config.storage.dir)
    }

    /// Open the store backing this session.
    pub fn open_store(&self) -> Result<Store> {
        let dir = self.storage_dir();
        Store::open_dir(&dir)
            .with_context(|| format!("Failed to open storage directory: {}", dir.display()))
    }

    /// Start a storefront session that reports through this context's output.
    pub fn open_shop(&self) -> Result<Shop> {
        let store = self.open_store()?;
        Ok(Storefront::open(store, OutputSink::new(self.output.clone()))?)
    }
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_dir_follows_config_location() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("amrong.toml"),
            "[storage]\ndir = \"state\"\n",
        )
        .unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        let ctx = Context {
            config,
            output: Output::new(false, true),
            cwd: nested,
            config_path: Some(path),
        };

        assert_eq!(ctx.storage_dir(), dir.path().join("state"));
    }

    #[test]
    fn test_without_config_uses_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: dir.path().to_path_buf(),
            config_path: None,
        };

        assert_eq!(ctx.storage_dir(), dir.path().join(".amrong"));
    }

    #[test]
    fn test_absolute_storage_dir() {
        assert_eq!(
            resolve(Path::new("/home/shop"), "/var/lib/amrong"),
            PathBuf::from("/var/lib/amrong")
        );
    }
}
