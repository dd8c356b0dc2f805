use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::http::connection::ConnectionSettings;

/// What to do with a request whose status line cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRequestPolicy {
    /// Close the connection without writing anything.
    #[default]
    Drop,
    /// Answer `400 Bad Request`, then close.
    BadRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub storage_dir: PathBuf,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
    pub malformed_requests: MalformedRequestPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
            storage_dir: PathBuf::from("storage"),
            read_timeout_secs: 30,
            write_timeout_secs: 30,
            malformed_requests: MalformedRequestPolicy::Drop,
        }
    }
}

impl Config {
    /// Defaults, overridden by the `LISTEN` and `STORAGE_DIR` environment
    /// variables.
    pub fn load() -> Self {
        Self::default().with_env()
    }

    /// Reads a YAML config file, then applies the environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
            .map(Self::with_env)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    fn with_env(mut self) -> Self {
        if let Ok(addr) = std::env::var("LISTEN") {
            self.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("STORAGE_DIR") {
            self.storage_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            write_timeout: Duration::from_secs(self.write_timeout_secs),
            malformed_requests: self.malformed_requests,
        }
    }
}
