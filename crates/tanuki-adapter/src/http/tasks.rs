/*
[INPUT]:  Task requests and API-key authentication
[OUTPUT]: Task execution responses and service health
[POS]:    HTTP layer - task endpoints (require API key)
[UPDATE]: When adding new endpoints or changing the task flow
*/

use reqwest::Method;

use crate::http::{Result, TanukiClient};
use crate::types::{HealthResponse, TaskRequest, TaskResponse};

impl TanukiClient {
    /// Submit a programming task for execution
    ///
    /// POST /run_task
    /// Requires: X-API-Key header
    pub async fn run_task(&self, request: &TaskRequest) -> Result<TaskResponse> {
        let builder = self.api_request_with_key(Method::POST, "/run_task")?;
        self.send_json(builder.json(request)).await
    }

    /// Check that the service is up
    ///
    /// GET /health
    /// Requires: X-API-Key header
    pub async fn health(&self) -> Result<HealthResponse> {
        let builder = self.api_request_with_key(Method::GET, "/health")?;
        self.send_json(builder).await
    }
}
