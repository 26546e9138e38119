use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::{Result, eyre::eyre};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_API_KEY, DEFAULT_CHAT_URL, DEFAULT_IMAGE_URL, Endpoints};

/// Overrides the api key from the config file when set and non-empty
pub const API_KEY_ENV: &str = "SYNCAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub chat_url: String,
    pub image_url: String,
    /// No timeout if unset
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.into(),
            chat_url: DEFAULT_CHAT_URL.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Replaces the key only with a non-empty `api_key`
    pub fn with_api_key_override(self, api_key: Option<String>) -> Self {
        match api_key {
            Some(key) if !key.is_empty() => self.with_api_key(key),
            _ => self,
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            chat_url: self.chat_url.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_local_dir()
        .ok_or(eyre!("Couldn't get config dir"))?
        .join("syncai.ron"))
}

/// Returns `None` if there is no config file yet
pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        debug!("No config at {}", path.display());
        Ok(None)
    } else {
        load_config_from(&path).map(Some)
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let src = fs::read_to_string(path)?;
    Ok(ron::from_str(&src)?)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_pretty_written_config() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("syncai.ron");
        let config = Config {
            timeout_secs: Some(30),
            ..Config::default()
        }
        .with_api_key("abc");

        fs::write(
            &path,
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())?,
        )?;
        assert_eq!(load_config_from(&path)?, config);
        Ok(())
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("syncai.ron");
        fs::write(&path, r#"(api_key: "mine", timeout_secs: Some(10))"#)?;

        let config = load_config_from(&path)?;
        assert_eq!(config.api_key, "mine");
        assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
        assert_eq!(config.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("syncai.ron");
        fs::write(&path, "(api_key: ")?;

        assert!(load_config_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn api_key_override() {
        let config = Config::default();
        assert_eq!(
            config.clone().with_api_key_override(Some("env".into())).api_key,
            "env"
        );
        assert_eq!(
            config.clone().with_api_key_override(Some(String::new())).api_key,
            DEFAULT_API_KEY
        );
        assert_eq!(config.with_api_key_override(None).api_key, DEFAULT_API_KEY);
    }

    #[test]
    fn endpoints_from_config() {
        let config = Config {
            chat_url: "http://chat".into(),
            image_url: "http://img?p=".into(),
            ..Config::default()
        };
        assert_eq!(
            config.endpoints(),
            Endpoints {
                chat_url: "http://chat".into(),
                image_url: "http://img?p=".into(),
            }
        );
        assert_eq!(config.timeout(), None);
    }
}
