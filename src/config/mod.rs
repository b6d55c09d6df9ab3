use std::{env, path::PathBuf};

use directories::BaseDirs;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_WORKING_FILE: &str = "./events.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("could not determine the home directory, set EVENTS_FILE instead")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a run needs from the environment, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider credential (`API_KEY`).
    pub api_key: String,
    /// Reminder recipient (`EMAIL`).
    pub recipient: String,
    /// Calendar file without header (`EVENTS_FILE`).
    pub source_path: PathBuf,
    /// Header-prefixed copy parsed by the run (`WORKING_FILE`).
    pub working_path: PathBuf,
    /// Email provider base URL (`RESEND_API_URL`).
    pub api_url: String,
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingVar(key))
        };

        let api_key = required("API_KEY")?;
        let recipient = required("EMAIL")?;

        let source_path = match lookup("EVENTS_FILE") {
            Some(path) => PathBuf::from(path),
            None => default_source_path()?,
        };

        Ok(Self {
            api_key,
            recipient,
            source_path,
            working_path: lookup("WORKING_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKING_FILE)),
            api_url: lookup("RESEND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// `calcure` keeps its events in `~/.config` on every OS, including macOS.
fn default_source_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or(Error::NoHomeDir)?;
    Ok(dirs
        .home_dir()
        .join(".config")
        .join("calcure")
        .join("events.csv"))
}
