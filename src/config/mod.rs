//! Configuration management for adventus.
//!
//! Settings are looked up, in order, in:
//! - `./adventus.toml`
//! - `[package.metadata.adventus]` or `[workspace.metadata.adventus]` in `./Cargo.toml`
//! - `~/.config/adventus/config.toml`
//!
//! Every key is optional. The session token never comes from a file, it is
//! read from the `AOC_SESSION` environment variable.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the session cookie value.
pub const SESSION_ENV: &str = "AOC_SESSION";

pub const DEFAULT_URL: &str = "https://adventofcode.com";

pub const USER_AGENT: &str = concat!("adventus/", env!("CARGO_PKG_VERSION"));

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Root directory of the on-disk cache.
    pub cache: PathBuf,
    /// Persist puzzle input files.
    pub cache_input: bool,
    /// Persist the markdown rendering of each puzzle page.
    pub cache_puzzle: bool,
    /// Persist answer submission responses.
    pub cache_answers: bool,
    /// Custom solution template.
    pub template: PathBuf,
    /// Solution source path pattern, e.g. `src/bin/year{year:04}_day{day:02}.rs`.
    pub source: String,
    /// Base URL of the puzzle site.
    pub url: String,
    pub requests_per_minute: u32,
    pub max_delay_secs: u64,
    pub timeout_secs: u64,

    #[serde(skip)]
    pub session: Option<Session>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: PathBuf::from(".adventus"),
            cache_input: true,
            cache_puzzle: false,
            cache_answers: true,
            template: PathBuf::from(".adventus/template.rs"),
            source: "src/bin/year{year:04}_day{day:02}.rs".to_string(),
            url: DEFAULT_URL.to_string(),
            requests_per_minute: 10,
            max_delay_secs: 60,
            timeout_secs: 60,
            session: None,
        }
    }
}

/// Session cookie value. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(SESSION_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(***)")
    }
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<MetadataTable>,
    workspace: Option<MetadataTable>,
}

#[derive(Debug, Deserialize)]
struct MetadataTable {
    metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    adventus: Option<Config>,
}

impl Config {
    /// Load configuration from the working directory or the user config dir,
    /// then attach the session from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from_dir(Path::new("."))?;
        if config.is_none() {
            if let Some(path) = Self::user_config_path() {
                if path.exists() {
                    config = Some(Self::from_file(&path)?);
                }
            }
        }

        let mut config = config.unwrap_or_default();
        config.session = Session::from_env();
        Ok(config)
    }

    /// Look for `adventus.toml`, then Cargo metadata, in `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let standalone = dir.join("adventus.toml");
        if standalone.exists() {
            return Self::from_file(&standalone).map(Some);
        }

        let manifest = dir.join("Cargo.toml");
        if manifest.exists() {
            let content = read(&manifest)?;
            return Self::from_cargo_manifest(&content).map_err(|e| ConfigError::Parse {
                path: manifest,
                source: e,
            });
        }

        Ok(None)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn from_cargo_manifest(content: &str) -> Result<Option<Self>, toml::de::Error> {
        let manifest: CargoManifest = toml::from_str(content)?;
        let from = |table: Option<MetadataTable>| {
            table
                .and_then(|t| t.metadata)
                .and_then(|m| m.adventus)
        };
        Ok(from(manifest.package).or_else(|| from(manifest.workspace)))
    }

    /// `~/.config/adventus/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("adventus").join("config.toml"))
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
