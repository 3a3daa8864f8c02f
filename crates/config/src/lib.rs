use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use ini::Ini;
use jira_cli_auth::{codec, CodecError};
use thiserror::Error;
use tracing::debug;

/// File name used when no explicit path is given, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";
/// The single section holding connection settings.
pub const SECTION: &str = "JIRA";

const KEY_BASE_URL: &str = "base_url";
const KEY_EMAIL: &str = "email";
const KEY_API_TOKEN: &str = "api_token";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unable to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Unable to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file has no [JIRA] section")]
    MissingSection,

    #[error("Config is missing the '{0}' entry")]
    MissingField(&'static str),

    #[error("Config entry '{field}' cannot be decoded: {source}")]
    Undecodable {
        field: &'static str,
        #[source]
        source: CodecError,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Connection settings as seen by the rest of the application (decoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

/// Reads and writes [`StoredConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the configuration, replacing any existing file.
    ///
    /// `base_url` is written as is; `email` and `api_token` are obfuscated.
    /// The INI parser trims surrounding whitespace and double quotes from
    /// values on load, so a `base_url` carrying either comes back without them.
    pub fn save(&self, config: &StoredConfig) -> Result<()> {
        let mut ini = Ini::new();
        ini.with_section(Some(SECTION))
            .set(KEY_BASE_URL, config.base_url.as_str())
            .set(KEY_EMAIL, codec::encode(&config.email))
            .set(KEY_API_TOKEN, codec::encode(&config.api_token));

        let write_err = |source: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).map_err(write_err)?;
        ini.write_to(&mut file).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        debug!(path = %self.path.display(), "Configuration saved");
        Ok(())
    }

    /// Load and decode the configuration.
    ///
    /// Any missing piece (file, section, key) or an undecodable secret is an
    /// error: a partially readable file counts as no configuration at all.
    pub fn load(&self) -> Result<StoredConfig> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        let ini = Ini::load_from_file(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "Configuration loaded");

        let section = ini
            .section(Some(SECTION))
            .ok_or(ConfigError::MissingSection)?;

        let field = |key: &'static str| -> Result<String> {
            section
                .get(key)
                .map(str::to_owned)
                .ok_or(ConfigError::MissingField(key))
        };
        let secret = |key: &'static str| -> Result<String> {
            let raw = field(key)?;
            codec::decode(&raw).map_err(|source| ConfigError::Undecodable { field: key, source })
        };

        Ok(StoredConfig {
            base_url: field(KEY_BASE_URL)?,
            email: secret(KEY_EMAIL)?,
            api_token: secret(KEY_API_TOKEN)?,
        })
    }
}
