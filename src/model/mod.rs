//! Login model
//!
//! Decides whether a username/password pair is valid and reports the
//! outcome through a one-shot callback.

pub mod background;
pub mod callback;
pub mod credentials;
pub mod results;
pub mod validator;

pub use background::BackgroundValidator;
pub use callback::Callback;
pub use credentials::Credentials;
pub use results::Outcome;
pub use validator::{LoginModel, LoginValidator};
