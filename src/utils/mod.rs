//! Utility functions
//!
//! Provides logging setup and login audit helpers.

pub mod logging;
