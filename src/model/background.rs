//! Background validation
//!
//! Runs any login model on a tokio blocking worker so the caller's thread is
//! never held up. The caller's callback is completed exactly once: with the
//! inner model's outcome, or with the fixed failure if the inner model drops
//! its callback or exceeds the timeout.

use log::warn;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use super::callback::Callback;
use super::results::Outcome;
use super::validator::LoginModel;

pub struct BackgroundValidator<M> {
    inner: Arc<M>,
    runtime: Handle,
    timeout: Duration,
    failure_message: String,
}

impl<M> BackgroundValidator<M>
where
    M: LoginModel + Send + Sync + 'static,
{
    pub fn new(
        inner: M,
        runtime: Handle,
        timeout: Duration,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(inner),
            runtime,
            timeout,
            failure_message: failure_message.into(),
        }
    }
}

impl<M> LoginModel for BackgroundValidator<M>
where
    M: LoginModel + Send + Sync + 'static,
{
    fn login(&self, username: &str, password: &str, callback: Box<dyn Callback>) {
        let inner = Arc::clone(&self.inner);
        let username = username.to_string();
        let password = password.to_string();
        let timeout = self.timeout;
        let failure_message = self.failure_message.clone();

        self.runtime.spawn(async move {
            let (tx, rx) = oneshot::channel::<Outcome>();

            // detached; a panic in the inner model drops `tx` and surfaces as `Ok(Err(_))`
            drop(tokio::task::spawn_blocking(move || {
                inner.login(
                    &username,
                    &password,
                    Box::new(move |outcome: Outcome| {
                        let _ = tx.send(outcome);
                    }),
                );
            }));

            let outcome = match tokio::time::timeout(timeout, rx).await {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(_)) => {
                    warn!("Validator finished without reporting an outcome");
                    Outcome::Failure(failure_message)
                }
                Err(_) => {
                    warn!("Validator did not respond within {:?}", timeout);
                    Outcome::Failure(failure_message)
                }
            };

            outcome.deliver(callback);
        });
    }
}
