//! Error types for configuration and color parsing.

use std::fmt;

/// Errors produced while parsing a CSS color string.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorParseError {
    /// The string is not `rgb(...)`, `rgba(...)` or `#rrggbb`.
    UnknownFormat(String),
    /// Wrong number of components inside the parentheses.
    ComponentCount { expected: usize, found: usize },
    /// A component failed to parse or is out of range.
    InvalidComponent(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::UnknownFormat(s) => write!(f, "Unrecognized color format: {:?}", s),
            ColorParseError::ComponentCount { expected, found } => {
                write!(f, "Expected {} color components, found {}", expected, found)
            }
            ColorParseError::InvalidComponent(s) => write!(f, "Invalid color component: {:?}", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Errors produced while loading a field configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document is malformed or has wrongly-typed values.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "Invalid field config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
