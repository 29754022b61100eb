use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a cookie error
    #[track_caller]
    pub fn cookie<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Cookie",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a local storage error
    #[track_caller]
    pub fn local_storage<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "LocalStorage",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a serde error
    #[track_caller]
    pub fn serde<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Serde",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert a serde error into a ConfigError
    #[track_caller]
    pub fn from_serde_error<E: std::fmt::Display>(error: E) -> Self {
        Self::serde(error.to_string())
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
