//! Completion callback
//!
//! The seam between whoever requests a login and whoever performs it. Both
//! methods consume the boxed callback, so a callback can be completed at most
//! once; a validator must complete it at least once.

use super::results::Outcome;

/// One-shot handle notified with the outcome of a single login attempt.
pub trait Callback: Send {
    fn on_success(self: Box<Self>, message: String);

    fn on_error(self: Box<Self>, reason: String);
}

/// Any `FnOnce(Outcome)` closure can serve as a callback.
impl<F> Callback for F
where
    F: FnOnce(Outcome) + Send,
{
    fn on_success(self: Box<Self>, message: String) {
        (*self)(Outcome::Success(message))
    }

    fn on_error(self: Box<Self>, reason: String) {
        (*self)(Outcome::Failure(reason))
    }
}
