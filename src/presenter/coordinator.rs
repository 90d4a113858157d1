//! Login coordinator
//!
//! Reads credentials from the view, hands them to the model, and relays the
//! model's outcome text to the view unchanged. Holds nothing but its two
//! collaborators, so every `login()` call is independent.

use std::sync::Arc;

use crate::model::{Callback, LoginModel, Outcome};
use crate::utils::logging::{log_attempt, log_outcome};
use crate::view::LoginView;

/// Handles a user-initiated login action.
pub trait LoginPresenter {
    fn login(&self);
}

pub struct LoginCoordinator {
    model: Arc<dyn LoginModel + Send + Sync>,
    view: Arc<dyn LoginView + Send + Sync>,
}

impl LoginCoordinator {
    pub fn new(
        model: Arc<dyn LoginModel + Send + Sync>,
        view: Arc<dyn LoginView + Send + Sync>,
    ) -> Self {
        Self { model, view }
    }
}

impl LoginPresenter for LoginCoordinator {
    fn login(&self) {
        let username = self.view.user_name();
        let password = self.view.password();
        log_attempt(&username);

        let relay = ViewRelay {
            view: Arc::clone(&self.view),
        };
        self.model.login(&username, &password, Box::new(relay));
    }
}

/// Forwards whichever text the model reports straight to the view.
struct ViewRelay {
    view: Arc<dyn LoginView + Send + Sync>,
}

impl ViewRelay {
    fn relay(self, outcome: Outcome) {
        log_outcome(&outcome);
        self.view.show_message(outcome.message());
    }
}

impl Callback for ViewRelay {
    fn on_success(self: Box<Self>, message: String) {
        self.relay(Outcome::Success(message));
    }

    fn on_error(self: Box<Self>, reason: String) {
        self.relay(Outcome::Failure(reason));
    }
}
