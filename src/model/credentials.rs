//! Credential storage
//!
//! Holds the single reference pair the validator compares against.

use std::fmt;
use std::sync::LazyLock;

/// Built-in reference pair, used when no configuration overrides it
pub(crate) static DEFAULT_CREDENTIALS: LazyLock<Credentials> =
    LazyLock::new(|| Credentials::new("huangx", "123456"));

/// A username/password pair, built fresh for each attempt
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.as_bytes() == username.as_bytes()
            && self.password.as_bytes() == password.as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
