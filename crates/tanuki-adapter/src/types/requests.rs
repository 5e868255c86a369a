/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /run_task`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Free-text description of the programming task
    pub task_description: String,
    /// Relevant code snippets or conversation history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Files the service should consider for the task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_paths: Option<Vec<String>>,
}

impl TaskRequest {
    /// Build a request carrying only the task description
    pub fn new(task_description: impl Into<String>) -> Self {
        Self {
            task_description: task_description.into(),
            context: None,
            file_paths: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let req = TaskRequest::new("Write a sort function");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json.get("task_description").and_then(|v| v.as_str()),
            Some("Write a sort function")
        );
        assert!(json.get("context").is_none());
        assert!(json.get("file_paths").is_none());
    }
}
