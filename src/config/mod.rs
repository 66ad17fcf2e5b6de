use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_CONTRACTS: [&str; 2] = ["IntentSource", "Inbox"];
pub const DEFAULT_EVENT: &str = "IntentCreated";
pub const PACKAGE_ENV: &str = "EVENTSIG_PACKAGE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// ABI package file or directory
    pub package: Option<PathBuf>,

    #[serde(default)]
    pub contracts: Vec<String>,

    pub event: Option<String>,
}

impl Config {
    /// Package path: command-line flag, then `EVENTSIG_PACKAGE`, then the config file
    pub fn resolve_package(
        &self,
        flag: Option<PathBuf>,
        env: Option<OsString>,
    ) -> Option<PathBuf> {
        flag.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
            .or_else(|| self.package.clone())
    }

    /// Contracts to report on: the command line, then the config file, then the defaults
    pub fn resolve_contracts(&self, requested: Vec<String>) -> Vec<String> {
        if !requested.is_empty() {
            requested
        } else if !self.contracts.is_empty() {
            self.contracts.clone()
        } else {
            DEFAULT_CONTRACTS.iter().map(|name| name.to_string()).collect()
        }
    }

    /// Contract searched by single-contract commands
    pub fn resolve_contract(&self, requested: Option<String>) -> String {
        requested
            .or_else(|| self.contracts.first().cloned())
            .unwrap_or_else(|| DEFAULT_CONTRACTS[0].to_string())
    }

    pub fn resolve_event(&self, requested: Option<String>) -> String {
        requested
            .or_else(|| self.event.clone())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EVENT.to_string())
    }
}

pub fn package_from_env() -> Option<OsString> {
    std::env::var_os(PACKAGE_ENV)
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Read a config file the user named explicitly, warning when it does not exist
pub fn load_explicit(path: &Path) -> Config {
    if !path.exists() {
        warn!(path = %path.display(), "config file not found, using defaults");
    }
    load_from(path)
}

/// Read a config file; a missing or malformed file yields defaults
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!(path = %path.display(), "no config file");
            return Config::default();
        }
    };
    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring malformed config");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("EVENTSIG_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("eventsig").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("eventsig").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "eventsig", "eventsig")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
