//! Error handlers
//!
//! Provides error reporting and exit codes for the binary.

use crate::error::types::LoginAppError;
use log::error;

/// Handle an application error
pub fn handle_error(err: &LoginAppError) {
    error!("Login app error: {}", err);
}

/// Convert error to process exit code (sysexits: EX_CONFIG, EX_IOERR)
pub fn error_to_exit_code(err: &LoginAppError) -> i32 {
    match err {
        LoginAppError::Config(_) => 78,
        LoginAppError::Io(_) => 74,
    }
}
