//! # Theme Error Types
//!
//! Error types for loading theme configs and writing theme files. Color lookup
//! and theme application never fail, so nothing in here is produced by them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or generating themes.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme configuration file was not found.
    #[error("Theme file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme configuration document.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The file extension does not name a supported theme format.
    #[error("Unsupported theme file format: {path:?} (use .json or .toml)")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A color role holds something that is not a hex color.
    #[error("Color '{role}' has invalid value '{value}'")]
    InvalidColor {
        /// The color role name.
        role: String,
        /// The rejected value.
        value: String,
    },

    /// A subdomain that cannot be used as a theme directory name.
    #[error("Invalid subdomain '{name}'")]
    InvalidSubdomain {
        /// The rejected subdomain.
        name: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(role: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            role: role.into(),
            value: value.into(),
        }
    }

    /// Create an invalid subdomain error.
    pub fn invalid_subdomain(name: impl Into<String>) -> Self {
        Self::InvalidSubdomain { name: name.into() }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
