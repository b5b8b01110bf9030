use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_home;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of `data/`, `archived/` and `state/`. `~` and `$HOME` are expanded.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    /// Columns of the last comment shown by `list`.
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
    /// Ask before archive / delete / uncomment.
    #[serde(default = "default_confirm")]
    pub confirm_destructive: bool,
}

fn default_base_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_preview_width() -> usize {
    30
}
fn default_confirm() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            preview_width: default_preview_width(),
            confirm_destructive: default_confirm(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("statlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".statlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("statlog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Base directory with `~` / `$HOME` expanded.
    pub fn base_path(&self) -> PathBuf {
        expand_home(&self.base_dir)
    }

    /// Initialize the configuration file (skipped in test mode) for `base`.
    pub fn init_all(base: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut cfg = if is_test {
            Self::default()
        } else {
            Self::load()?
        };
        if let Some(b) = base {
            cfg.base_dir = b;
        }

        if !is_test {
            cfg.save()?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        Ok(cfg)
    }
}
