//! Login presenter
//!
//! Mediates between the login view and the login model.

pub mod coordinator;
pub mod wiring;

pub use coordinator::{LoginCoordinator, LoginPresenter};
pub use wiring::{provide_login_model, provide_login_presenter};
