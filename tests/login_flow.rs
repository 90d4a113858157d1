use std::sync::Arc;
use std::time::Duration;

use mvp_login::model::{BackgroundValidator, Credentials, LoginValidator};
use mvp_login::presenter::{LoginPresenter, provide_login_model, provide_login_presenter};
use mvp_login::testing::{RecordingView, ScriptedModel, ScriptedReply, ViewCall};
use mvp_login::view::{MarshaledView, UiDispatcher};
use mvp_login::{AppConfig, Outcome};

// Helper to run one login through the reference validator
fn login_with(username: &str, password: &str) -> Arc<RecordingView> {
    let view = Arc::new(RecordingView::new(username, password));
    let model = provide_login_model(&AppConfig::default(), None);
    provide_login_presenter(view.clone(), model).login();
    view
}

#[test]
fn test_matching_pair_shows_success() {
    let view = login_with("huangx", "123456");
    assert_eq!(
        view.calls(),
        vec![
            ViewCall::UserName,
            ViewCall::Password,
            ViewCall::ShowMessage("登录成功".into()),
        ]
    );
}

#[test]
fn test_wrong_password_shows_failure() {
    let view = login_with("huangx", "1234567");
    assert_eq!(view.messages(), vec!["用户名或密码错误".to_string()]);
}

#[test]
fn test_empty_input_shows_same_failure() {
    let view = login_with("", "");
    assert_eq!(view.messages(), login_with("huangx", "1234567").messages());
}

#[test]
fn test_repeated_login_is_stable() {
    let view = Arc::new(RecordingView::new("huangx", "123456"));
    let model = provide_login_model(&AppConfig::default(), None);
    let presenter = provide_login_presenter(view.clone(), model);

    presenter.login();
    presenter.login();

    assert_eq!(
        view.messages(),
        vec!["登录成功".to_string(), "登录成功".to_string()]
    );
}

#[test]
fn test_scripted_model_sees_raw_view_input() {
    let model = Arc::new(ScriptedModel::new(ScriptedReply::Respond(Outcome::Success(
        "welcome".into(),
    ))));
    let view = Arc::new(RecordingView::new("huangx", "123456"));

    provide_login_presenter(view.clone(), model.clone()).login();

    assert_eq!(model.requests(), vec![Credentials::new("huangx", "123456")]);
    assert_eq!(view.messages(), vec!["welcome".to_string()]);
}

#[tokio::test]
async fn test_background_login_is_displayed_on_ui_loop() {
    let (mut dispatcher, ui) = UiDispatcher::new();
    let screen = Arc::new(RecordingView::new("huangx", "123456"));
    let view = Arc::new(MarshaledView::new(screen.clone(), ui));
    let model = Arc::new(BackgroundValidator::new(
        LoginValidator::default(),
        tokio::runtime::Handle::current(),
        Duration::from_secs(5),
        "用户名或密码错误",
    ));

    provide_login_presenter(view, model).login();

    assert!(dispatcher.run_next().await);
    assert_eq!(screen.messages(), vec!["登录成功".to_string()]);
    assert_eq!(dispatcher.run_pending(), 0);
}

#[tokio::test]
async fn test_hung_validator_reports_failure_once() {
    let (mut dispatcher, ui) = UiDispatcher::new();
    let screen = Arc::new(RecordingView::new("huangx", "123456"));
    let view = Arc::new(MarshaledView::new(screen.clone(), ui));
    let model = Arc::new(BackgroundValidator::new(
        ScriptedModel::new(ScriptedReply::Delayed(
            Duration::from_millis(300),
            Outcome::Success("too late".into()),
        )),
        tokio::runtime::Handle::current(),
        Duration::from_millis(20),
        "用户名或密码错误",
    ));

    provide_login_presenter(view, model).login();

    assert!(dispatcher.run_next().await);
    assert_eq!(screen.messages(), vec!["用户名或密码错误".to_string()]);

    // the late result from the inner validator is discarded
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(dispatcher.run_pending(), 0);
    assert_eq!(screen.messages().len(), 1);
}

#[tokio::test]
async fn test_silent_validator_fails_exactly_once() {
    let (mut dispatcher, ui) = UiDispatcher::new();
    let screen = Arc::new(RecordingView::new("huangx", "123456"));
    let view = Arc::new(MarshaledView::new(screen.clone(), ui));
    let model = Arc::new(BackgroundValidator::new(
        ScriptedModel::new(ScriptedReply::Silent),
        tokio::runtime::Handle::current(),
        Duration::from_millis(20),
        "用户名或密码错误",
    ));

    provide_login_presenter(view, model).login();

    assert!(dispatcher.run_next().await);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(dispatcher.run_pending(), 0);
    assert_eq!(
        screen.calls(),
        vec![
            ViewCall::UserName,
            ViewCall::Password,
            ViewCall::ShowMessage("用户名或密码错误".into()),
        ]
    );
}

#[test]
fn test_silent_validator_shows_nothing_inline() {
    let model = Arc::new(ScriptedModel::new(ScriptedReply::Silent));
    let view = Arc::new(RecordingView::new("huangx", "123456"));

    provide_login_presenter(view.clone(), model.clone()).login();

    assert_eq!(model.parked(), 1);
    assert!(view.messages().is_empty());
}
