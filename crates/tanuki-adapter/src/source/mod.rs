/*
[INPUT]:  Trimmed task descriptions from a front end
[OUTPUT]: Task output text or a failure from the backing implementation
[POS]:    Task source layer - the seam between UI glue and the real service
[UPDATE]: When adding new task source implementations
*/

use std::sync::Arc;

use async_trait::async_trait;

use crate::http::Result;

mod remote;
mod simulated;

pub use remote::RemoteTaskSource;
pub use simulated::{DEFAULT_SIMULATED_DELAY, SimulatedBackend};

/// Trait for anything that can turn a task description into output.
///
/// One string in, one string out, may fail. Implementations decide what
/// "running" a task means: the shipped ones are a fixed-delay simulation
/// and the HTTP client for a deployed service.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Execute the task described by `description` and return its output
    async fn run_task(&self, description: &str) -> Result<String>;
}

#[async_trait]
impl<T> TaskSource for Arc<T>
where
    T: TaskSource + ?Sized,
{
    async fn run_task(&self, description: &str) -> Result<String> {
        (**self).run_task(description).await
    }
}
