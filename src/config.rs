//! Configuration of the `qlockctl` binary

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("no configuration directory found")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Root URL of the clock's web server
    #[validate(url)]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "http://qlockthree.local";

    /// `$CONFIG_DIR/qlockweb/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|mut path| {
                path.push("qlockweb");
                path.push("config.toml");
                path
            })
            .ok_or(ConfigError::NoConfigDir)
    }

    pub async fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let full = tokio::fs::read_to_string(path).await?;
        full.parse()
    }

    /// Load `path` if given. Otherwise load the default path, falling back to the defaults if
    /// there is no file there.
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_file(path).await;
        }

        let path = Self::default_path()?;
        if tokio::fs::metadata(&path).await.is_ok() {
            debug!(path = %path.display(), "loading configuration");
            Self::load_file(&path).await
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
