//! UI-thread marshaling
//!
//! Display side effects must run on the thread that owns the display. A
//! `UiDispatcher` is drained by that thread; `UiHandle`s post jobs to it from
//! anywhere.

use log::warn;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::LoginView;

type UiJob = Box<dyn FnOnce() + Send>;

/// Receiving side, owned by the UI loop
pub struct UiDispatcher {
    jobs: mpsc::UnboundedReceiver<UiJob>,
}

/// Cloneable sending side
#[derive(Clone)]
pub struct UiHandle {
    jobs: mpsc::UnboundedSender<UiJob>,
}

impl UiDispatcher {
    pub fn new() -> (Self, UiHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { jobs: rx }, UiHandle { jobs: tx })
    }

    /// Waits for the next job and runs it on the current thread.
    ///
    /// Returns `false` once every handle has been dropped.
    pub async fn run_next(&mut self) -> bool {
        match self.jobs.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Runs every job already queued without waiting. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.jobs.try_recv() {
            job();
            ran += 1;
        }
        ran
    }
}

impl UiHandle {
    pub fn post(&self, job: impl FnOnce() + Send + 'static) {
        if self.jobs.send(Box::new(job)).is_err() {
            warn!("UI loop has stopped; dropping display job");
        }
    }
}

/// Wraps a view so that reads happen inline and display is posted to the UI loop.
pub struct MarshaledView<V> {
    view: Arc<V>,
    ui: UiHandle,
}

impl<V> MarshaledView<V> {
    pub fn new(view: Arc<V>, ui: UiHandle) -> Self {
        Self { view, ui }
    }
}

impl<V> LoginView for MarshaledView<V>
where
    V: LoginView + Send + Sync + 'static,
{
    fn user_name(&self) -> String {
        self.view.user_name()
    }

    fn password(&self) -> String {
        self.view.password()
    }

    fn show_message(&self, text: &str) {
        let view = Arc::clone(&self.view);
        let text = text.to_string();
        self.ui.post(move || view.show_message(&text));
    }
}
