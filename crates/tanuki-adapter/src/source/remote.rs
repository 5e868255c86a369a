/*
[INPUT]:  Task descriptions plus optional preset context and file paths
[OUTPUT]: Task output extracted from the service's response
[POS]:    Task source layer - HTTP-backed implementation
[UPDATE]: When the response mapping or request enrichment changes
*/

use async_trait::async_trait;

use crate::http::{Result, TanukiClient, TanukiError};
use crate::source::TaskSource;
use crate::types::TaskRequest;

/// Task source backed by a deployed Tanuki-Programmer service.
///
/// Context and file paths are fixed per source instance; every submission
/// carries them alongside the fresh description.
#[derive(Debug)]
pub struct RemoteTaskSource {
    client: TanukiClient,
    context: Option<String>,
    file_paths: Option<Vec<String>>,
}

impl RemoteTaskSource {
    pub fn new(client: TanukiClient) -> Self {
        Self {
            client,
            context: None,
            file_paths: None,
        }
    }

    /// Attach context sent with every submission
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    /// Attach file paths sent with every submission
    pub fn with_file_paths(mut self, file_paths: Option<Vec<String>>) -> Self {
        self.file_paths = file_paths;
        self
    }

    pub fn client(&self) -> &TanukiClient {
        &self.client
    }

    fn build_request(&self, description: &str) -> TaskRequest {
        TaskRequest {
            task_description: description.to_string(),
            context: self.context.clone(),
            file_paths: self.file_paths.clone(),
        }
    }
}

#[async_trait]
impl TaskSource for RemoteTaskSource {
    async fn run_task(&self, description: &str) -> Result<String> {
        let request = self.build_request(description);
        let response = self.client.run_task(&request).await?;
        tracing::debug!(task_id = %response.task_id, status = ?response.status, "task settled");

        if response.status.is_completed() {
            response.result.ok_or_else(|| {
                TanukiError::InvalidResponse("completed task carried no result".to_string())
            })
        } else {
            Err(TanukiError::TaskFailed {
                message: response
                    .error
                    .unwrap_or_else(|| "task failed without a reported reason".to_string()),
            })
        }
    }
}
