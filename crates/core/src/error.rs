//! Error types for RisingOS Settings
//!
//! Centralized error handling using thiserror. The resolver itself never
//! fails; these cover config files, property dumps and process plumbing.

use thiserror::Error;

/// Main error type for the settings crates
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Property parse error on line {line}: {reason}")]
    PropertyParse { line: usize, reason: String },
}

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

impl SettingsError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            SettingsError::Io(e) => format!("File operation failed: {}", e),
            SettingsError::Config(msg) => format!("Configuration error: {}", msg),
            SettingsError::PropertyParse { line, reason } => {
                format!("Property file is malformed at line {}: {}", line, reason)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_parse_error() {
        let err = SettingsError::PropertyParse {
            line: 3,
            reason: "missing '='".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Property file is malformed at line 3: missing '='"
        );
    }
}
