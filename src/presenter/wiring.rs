//! Composition root helpers
//!
//! Plain constructors that pick concrete collaborators; no global state.

use log::info;
use std::sync::Arc;
use tokio::runtime::Handle;

use super::coordinator::LoginCoordinator;
use crate::config::AppConfig;
use crate::model::{BackgroundValidator, LoginModel, LoginValidator};
use crate::view::LoginView;

/// Builds the configured login model.
///
/// Background validation is used only when enabled and a runtime handle is
/// available.
pub fn provide_login_model(
    config: &AppConfig,
    runtime: Option<Handle>,
) -> Arc<dyn LoginModel + Send + Sync> {
    let validator = LoginValidator::from_config(&config.validator);

    match runtime {
        Some(handle) if config.runtime.background_validation => {
            info!(
                "Using background validation (timeout {:?})",
                config.runtime.validation_timeout()
            );
            let failure_message = validator.failure_message().to_string();
            Arc::new(BackgroundValidator::new(
                validator,
                handle,
                config.runtime.validation_timeout(),
                failure_message,
            ))
        }
        _ => Arc::new(validator),
    }
}

pub fn provide_login_presenter(
    view: Arc<dyn LoginView + Send + Sync>,
    model: Arc<dyn LoginModel + Send + Sync>,
) -> LoginCoordinator {
    LoginCoordinator::new(model, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::LoginPresenter;
    use crate::testing::RecordingView;

    #[test]
    fn test_default_wiring_validates_inline() {
        let view = Arc::new(RecordingView::new("huangx", "123456"));
        let model = provide_login_model(&AppConfig::default(), None);

        provide_login_presenter(view.clone(), model).login();

        assert_eq!(view.messages(), vec!["登录成功".to_string()]);
    }

    #[tokio::test]
    async fn test_background_wiring_reports_later() {
        let mut config = AppConfig::default();
        config.runtime.background_validation = true;
        let view = Arc::new(RecordingView::new("huangx", "1234567"));
        let model = provide_login_model(&config, Some(Handle::current()));

        provide_login_presenter(view.clone(), model).login();

        let message = view.wait_for_message(std::time::Duration::from_secs(5)).await;
        assert_eq!(message.as_deref(), Some("用户名或密码错误"));
    }
}
