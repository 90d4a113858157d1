pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod testing;
pub mod utils;
pub mod view;

pub use config::AppConfig;
pub use model::{Callback, LoginModel, LoginValidator, Outcome};
pub use presenter::{LoginCoordinator, LoginPresenter};
pub use view::LoginView;
