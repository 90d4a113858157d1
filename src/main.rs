//! Login screen - Entry point
//!
//! A terminal login screen: prompts for a username and password, validates
//! them, and shows the result.

use log::info;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Handle;

use mvp_login::error::LoginAppError;
use mvp_login::error::handlers::{error_to_exit_code, handle_error};
use mvp_login::presenter::{LoginPresenter, provide_login_model, provide_login_presenter};
use mvp_login::utils::logging::setup_logging;
use mvp_login::view::{ConsoleView, MarshaledView, UiDispatcher};
use mvp_login::AppConfig;

#[tokio::main]
async fn main() {
    setup_logging();

    info!("Launching login screen...");

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), LoginAppError> {
    let config = AppConfig::load()?;

    let (mut dispatcher, ui) = UiDispatcher::new();
    let console = Arc::new(ConsoleView::new());
    let view = Arc::new(MarshaledView::new(Arc::clone(&console), ui));
    let model = provide_login_model(&config, Some(Handle::current()));
    let presenter = provide_login_presenter(view, model);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt("username: ")?;
        let Some(username) = lines.next_line().await? else {
            break;
        };
        prompt("password: ")?;
        let Some(password) = lines.next_line().await? else {
            break;
        };

        console.set_input(username, password);
        presenter.login();

        // display happens here, on the loop that owns the terminal
        if !dispatcher.run_next().await {
            break;
        }
    }

    info!("Input closed, exiting");
    Ok(())
}

fn prompt(label: &str) -> Result<(), LoginAppError> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", label)?;
    stdout.flush()?;
    Ok(())
}
