//! Logging utilities
//!
//! Provides logging setup and the login audit lines. Passwords are never
//! written to the log.

use env_logger::Env;
use log::info;

use crate::model::Outcome;

/// Setup logging for the application (`RUST_LOG` overrides the `info` default)
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Log a login attempt
pub fn log_attempt(username: &str) {
    info!("Login attempt for user '{}'", username);
}

/// Log the outcome relayed to the view
pub fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Success(message) => info!("Login succeeded: {}", message),
        Outcome::Failure(reason) => info!("Login failed: {}", reason),
    }
}
