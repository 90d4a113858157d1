//! Terminal login screen
//!
//! Holds the two input fields and shows messages as standalone lines, the
//! terminal equivalent of a toast.

use std::io::Write;
use std::sync::Mutex;

use super::LoginView;

#[derive(Debug, Default)]
struct Fields {
    username: String,
    password: String,
}

#[derive(Debug, Default)]
pub struct ConsoleView {
    fields: Mutex<Fields>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of both input fields.
    pub fn set_input(&self, username: impl Into<String>, password: impl Into<String>) {
        let mut fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
        fields.username = username.into();
        fields.password = password.into();
    }
}

impl LoginView for ConsoleView {
    fn user_name(&self) -> String {
        self.fields.lock().unwrap_or_else(|e| e.into_inner()).username.clone()
    }

    fn password(&self) -> String {
        self.fields.lock().unwrap_or_else(|e| e.into_inner()).password.clone()
    }

    fn show_message(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", text);
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_start_empty() {
        let view = ConsoleView::new();
        assert_eq!(view.user_name(), "");
        assert_eq!(view.password(), "");
    }

    #[test]
    fn test_input_is_returned_untrimmed() {
        let view = ConsoleView::new();
        view.set_input(" huangx", "123456 ");
        assert_eq!(view.user_name(), " huangx");
        assert_eq!(view.password(), "123456 ");
    }
}
