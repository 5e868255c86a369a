/*
[INPUT]:  Free-text task descriptions and a pluggable task source
[OUTPUT]: Rendered output region text and submission outcomes
[POS]:    Interaction lifecycle - validate, run, render, recover
[UPDATE]: When changing submission semantics or output rendering
*/

use std::time::Instant;

use thiserror::Error;
use uuid::Uuid;

use tanuki_adapter::{TanukiError, TaskSource};

/// Text shown in the output region while a submission is in flight
pub const PROCESSING_MESSAGE: &str = "Processing task...";

/// Lifecycle of one controller: Idle accepts submissions, Busy refuses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Busy,
}

/// Why a submission did not produce task output
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Input was empty after trimming; the task source was never invoked
    #[error("Please enter a programming task.")]
    EmptyTask,
    /// The task source rejected the submission
    #[error(transparent)]
    Task(#[from] TanukiError),
}

/// Trim a raw input and refuse blank submissions.
///
/// Shared by the controller itself and by surfaces that want to warn the
/// user before dispatching anything.
pub fn validate_description(input: &str) -> Result<String, SubmitError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::EmptyTask);
    }
    Ok(trimmed.to_string())
}

/// Drives one submission at a time against a task source.
///
/// The controller owns the interaction state and the output region text.
/// `submit` is the whole lifecycle: validate, go Busy, await the source,
/// render the outcome, go Idle again. Both exit paths return to Idle, so
/// a trigger wired to `is_idle` can never stay stuck disabled.
#[derive(Debug)]
pub struct TaskController<S> {
    source: S,
    state: InteractionState,
    output: String,
}

impl<S: TaskSource> TaskController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: InteractionState::Idle,
            output: String::new(),
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    /// Current output region text: processing notice, last result, or last error
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Run one submission to completion.
    ///
    /// Blank input fails fast without touching state or output. Otherwise
    /// the state is Busy for exactly the duration of the source call; on
    /// success the output region holds the result verbatim, on failure it
    /// holds `Error: <message>`.
    pub async fn submit(&mut self, input: &str) -> Result<String, SubmitError> {
        let description = validate_description(input)?;

        let submission_id = Uuid::new_v4();
        tracing::info!(
            submission = %submission_id,
            chars = description.len(),
            "task submitted"
        );

        self.state = InteractionState::Busy;
        self.output = PROCESSING_MESSAGE.to_string();
        let started = Instant::now();

        let outcome = self.source.run_task(&description).await;

        self.state = InteractionState::Idle;
        match outcome {
            Ok(result) => {
                tracing::info!(
                    submission = %submission_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "task completed"
                );
                self.output = result.clone();
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(
                    submission = %submission_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "task failed"
                );
                self.output = format!("Error: {err}");
                Err(SubmitError::Task(err))
            }
        }
    }
}
