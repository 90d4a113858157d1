//! Credential validator
//!
//! Implements the login model: compares a username/password pair against a
//! single reference pair. A wrong username and a wrong password yield the
//! same failure.

use log::debug;

use super::callback::Callback;
use super::credentials::Credentials;
use super::results::Outcome;
use crate::config::ValidatorConfig;

/// Performs a login attempt and reports the outcome through `callback`.
///
/// Implementations never fail to their caller; every attempt resolves as
/// either `on_success` or `on_error`.
pub trait LoginModel {
    fn login(&self, username: &str, password: &str, callback: Box<dyn Callback>);
}

/// Reference validator backed by a fixed credential pair
#[derive(Debug, Clone)]
pub struct LoginValidator {
    reference: Credentials,
    success_message: String,
    failure_message: String,
}

impl LoginValidator {
    pub fn new(
        reference: Credentials,
        success_message: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            reference,
            success_message: success_message.into(),
            failure_message: failure_message.into(),
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(
            Credentials::new(&config.username, &config.password),
            &config.success_message,
            &config.failure_message,
        )
    }

    /// Decides the outcome for a pair without side effects.
    pub fn check(&self, username: &str, password: &str) -> Outcome {
        if self.reference.matches(username, password) {
            Outcome::Success(self.success_message.clone())
        } else {
            Outcome::Failure(self.failure_message.clone())
        }
    }

    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }
}

impl Default for LoginValidator {
    fn default() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }
}

impl LoginModel for LoginValidator {
    fn login(&self, username: &str, password: &str, callback: Box<dyn Callback>) {
        let outcome = self.check(username, password);
        debug!("Validated credentials for '{}': success={}", username, outcome.is_success());
        outcome.deliver(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn run_login(validator: &LoginValidator, username: &str, password: &str) -> Vec<Outcome> {
        let (tx, rx) = mpsc::channel();
        validator.login(
            username,
            password,
            Box::new(move |outcome: Outcome| {
                tx.send(outcome).unwrap();
            }),
        );
        rx.try_iter().collect()
    }

    #[test]
    fn test_login_success() {
        let outcomes = run_login(&LoginValidator::default(), "huangx", "123456");
        assert_eq!(outcomes, vec![Outcome::Success("登录成功".into())]);
    }

    #[test]
    fn test_login_wrong_password() {
        let outcomes = run_login(&LoginValidator::default(), "huangx", "1234567");
        assert_eq!(outcomes, vec![Outcome::Failure("用户名或密码错误".into())]);
    }

    #[test]
    fn test_wrong_username_and_empty_input_share_failure() {
        let validator = LoginValidator::default();
        let wrong_user = validator.check("huang", "123456");
        let empty = validator.check("", "");
        assert_eq!(wrong_user, Outcome::Failure("用户名或密码错误".into()));
        assert_eq!(wrong_user, empty);
    }

    #[test]
    fn test_custom_reference_pair() {
        let validator = LoginValidator::new(Credentials::new("alice", "s3cret"), "ok", "denied");
        assert_eq!(validator.check("alice", "s3cret"), Outcome::Success("ok".into()));
        assert_eq!(validator.check("huangx", "123456"), Outcome::Failure("denied".into()));
    }
}
