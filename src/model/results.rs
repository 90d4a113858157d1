//! Login result types
//!
//! Defines the outcome produced once per login attempt.

use super::callback::Callback;

/// Result of a single login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Credentials accepted; carries the confirmation text
    Success(String),
    /// Credentials rejected; carries the reason text
    Failure(String),
}

impl Outcome {
    /// Returns the human-readable text carried by either variant.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(message) => message,
            Outcome::Failure(reason) => reason,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Completes `callback` with this outcome.
    ///
    /// Exactly one of `on_success` / `on_error` is invoked.
    pub fn deliver(self, callback: Box<dyn Callback>) {
        match self {
            Outcome::Success(message) => callback.on_success(message),
            Outcome::Failure(reason) => callback.on_error(reason),
        }
    }
}
