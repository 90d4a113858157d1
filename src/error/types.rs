//! Error types
//!
//! Login attempts themselves never fail; they always resolve to an
//! `Outcome`. These errors cover the application around them.

use std::fmt;
use std::io;

/// Application-level errors
#[derive(Debug)]
pub enum LoginAppError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for LoginAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginAppError::Config(e) => write!(f, "Configuration error: {}", e),
            LoginAppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for LoginAppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginAppError::Config(e) => Some(e),
            LoginAppError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for LoginAppError {
    fn from(error: config::ConfigError) -> Self {
        LoginAppError::Config(error)
    }
}

impl From<io::Error> for LoginAppError {
    fn from(error: io::Error) -> Self {
        LoginAppError::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_source() {
        let err: LoginAppError = config::ConfigError::Message("bad timeout".into()).into();
        assert_eq!(err.to_string(), "Configuration error: bad timeout");

        let err: LoginAppError =
            io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into();
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
