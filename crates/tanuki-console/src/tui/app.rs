/*
[INPUT]:  Task source handle, key-driven edits, and settle events
[OUTPUT]: AppState consumed by the renderer each frame
[POS]:    TUI app state and submission dispatch
[UPDATE]: When changing tabs, input handling, or the busy guard
*/

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex as TokioMutex;
use tokio::sync::mpsc;

use tanuki_adapter::TaskSource;
use tanuki_console::controller::{
    PROCESSING_MESSAGE, SubmitError, TaskController, validate_description,
};

use super::{LogBufferHandle, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Console,
    Logs,
}

/// How keyboard input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputMode {
    /// Hotkey navigation
    Normal,
    /// Typing into the task field
    Insert,
}

pub(super) struct AppState {
    controller: Arc<TokioMutex<TaskController<Arc<dyn TaskSource>>>>,
    events_tx: mpsc::UnboundedSender<UiEvent>,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) tab: Tab,
    pub(super) mode: InputMode,
    pub(super) input: String,
    pub(super) output: String,
    pub(super) status_message: String,
    pending_since: Option<Instant>,
}

impl AppState {
    pub(super) fn new(
        source: Arc<dyn TaskSource>,
        events_tx: mpsc::UnboundedSender<UiEvent>,
        log_buffer: LogBufferHandle,
    ) -> Self {
        Self {
            controller: Arc::new(TokioMutex::new(TaskController::new(source))),
            events_tx,
            log_buffer,
            tab: Tab::Console,
            mode: InputMode::Insert,
            input: String::new(),
            output: String::new(),
            status_message: "Ready".to_string(),
            pending_since: None,
        }
    }

    pub(super) fn is_busy(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Seconds the current submission has been in flight
    pub(super) fn pending_secs(&self) -> Option<u64> {
        self.pending_since.map(|since| since.elapsed().as_secs())
    }

    pub(super) fn next_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Console => Tab::Logs,
            Tab::Logs => Tab::Console,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub(super) fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.status_message = "Cleared".to_string();
    }

    /// Submit the input field's current text.
    ///
    /// Holding the controller lock for the whole submission IS the Busy
    /// state: while a run is in flight `try_lock_owned` fails and the
    /// trigger is refused. Settlement arrives as a `UiEvent::Settled`.
    pub(super) fn dispatch_submit(&mut self) {
        let description = match validate_description(&self.input) {
            Ok(description) => description,
            Err(err) => {
                tracing::warn!("rejected submission: empty task description");
                self.status_message = err.to_string();
                return;
            }
        };

        let Ok(mut guard) = self.controller.clone().try_lock_owned() else {
            self.status_message = "a task is already running".to_string();
            return;
        };

        self.pending_since = Some(Instant::now());
        self.output = PROCESSING_MESSAGE.to_string();
        self.status_message = "task dispatched".to_string();

        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = guard.submit(&description).await;
            drop(guard);
            let _ = events_tx.send(UiEvent::Settled(outcome));
        });
    }

    /// Fold a settled submission back into the view
    pub(super) fn on_settled(&mut self, outcome: Result<String, SubmitError>) {
        let elapsed = self.pending_secs().unwrap_or(0);
        self.pending_since = None;
        match outcome {
            Ok(result) => {
                self.output = result;
                self.status_message = format!("task completed in {elapsed}s");
            }
            Err(err) => {
                self.output = format!("Error: {err}");
                self.status_message = "task failed".to_string();
            }
        }
    }
}
