//! Error handling
//!
//! Defines error types and handling for the login application.

pub mod handlers;
pub mod types;

pub use types::*;
