//! Login view
//!
//! The capability surface the presenter reads input from and displays
//! messages through, plus the adapters that implement it.

pub mod console;
pub mod dispatcher;

pub use console::ConsoleView;
pub use dispatcher::{MarshaledView, UiDispatcher, UiHandle};

/// What the presenter needs from a login screen.
pub trait LoginView {
    fn user_name(&self) -> String;

    fn password(&self) -> String;

    /// Fire-and-forget display of a message to the user.
    fn show_message(&self, text: &str);
}
