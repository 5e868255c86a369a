/*
[INPUT]:  Task description and a configured delay
[OUTPUT]: Templated task output after the delay elapses
[POS]:    Task source layer - demonstration backend
[UPDATE]: When changing the simulated response shape or timing
*/

use std::time::Duration;

use async_trait::async_trait;

use crate::http::Result;
use crate::source::TaskSource;

/// Delay the demonstration backend waits before answering
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Marker line closing every simulated response
const COMPLETION_MARKER: &str = "Task completed successfully!";

/// Stand-in for the real service: waits a fixed duration, then resolves
/// with a canned report echoing the submitted description. The content of
/// the description never influences the outcome.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    /// Create a backend with the stock two-second delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }

    /// Create a backend with an explicit delay (zero is fine for tests)
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn render_response(description: &str) -> String {
        format!(
            r#"Task: "{description}"

---
Simulated Tanuki-Programmer Output:

Analyzing task requirements...
Breaking down into sub-tasks...
Generating code for main logic...
Running tests...
Refactoring for production quality...

(This is a simulated response. Actual output will vary by task.)
{COMPLETION_MARKER}"#
        )
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskSource for SimulatedBackend {
    async fn run_task(&self, description: &str) -> Result<String> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "simulating task run");
        tokio::time::sleep(self.delay).await;
        Ok(Self::render_response(description))
    }
}
