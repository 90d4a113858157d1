//! Programmable stand-ins
//!
//! A view that records every call made on it and a model that answers with
//! scripted replies. Used by the crate's own tests and available to
//! downstream tests that drive a presenter without a real screen.

use std::sync::Mutex;
use std::time::Duration;

use crate::model::{Callback, Credentials, LoginModel, Outcome};
use crate::view::LoginView;

/// A call observed by `RecordingView`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    UserName,
    Password,
    ShowMessage(String),
}

/// View with fixed input that records calls in order
#[derive(Debug)]
pub struct RecordingView {
    input: Credentials,
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            input: Credentials::new(username, password),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Texts passed to `show_message`, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::ShowMessage(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Polls until a message has been shown, returning the first one.
    pub async fn wait_for_message(&self, limit: Duration) -> Option<String> {
        tokio::time::timeout(limit, async {
            loop {
                if let Some(message) = self.messages().into_iter().next() {
                    return message;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .ok()
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(call);
    }
}

impl LoginView for RecordingView {
    fn user_name(&self) -> String {
        self.record(ViewCall::UserName);
        self.input.username.clone()
    }

    fn password(&self) -> String {
        self.record(ViewCall::Password);
        self.input.password.clone()
    }

    fn show_message(&self, text: &str) {
        self.record(ViewCall::ShowMessage(text.to_string()));
    }
}

/// How `ScriptedModel` answers each request
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Complete the callback immediately
    Respond(Outcome),
    /// Block the calling thread, then complete the callback
    Delayed(Duration, Outcome),
    /// Drop the callback without completing it
    Drop,
    /// Keep the callback alive but never complete it, like a hung backend
    Silent,
}

/// Model that records requests and answers from a script
pub struct ScriptedModel {
    reply: ScriptedReply,
    requests: Mutex<Vec<Credentials>>,
    parked: Mutex<Vec<Box<dyn Callback>>>,
}

impl ScriptedModel {
    pub fn new(reply: ScriptedReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
            parked: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Credentials> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of callbacks held by `ScriptedReply::Silent` and never completed.
    pub fn parked(&self) -> usize {
        self.parked.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl LoginModel for ScriptedModel {
    fn login(&self, username: &str, password: &str, callback: Box<dyn Callback>) {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Credentials::new(username, password));

        match &self.reply {
            ScriptedReply::Respond(outcome) => outcome.clone().deliver(callback),
            ScriptedReply::Delayed(delay, outcome) => {
                std::thread::sleep(*delay);
                outcome.clone().deliver(callback);
            }
            ScriptedReply::Drop => drop(callback),
            ScriptedReply::Silent => self
                .parked
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(callback),
        }
    }
}
