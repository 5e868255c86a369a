/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed enums shared across requests and responses
[POS]:    Data layer - enumerated wire values
[UPDATE]: When the service introduces new status values
*/

use serde::{Deserialize, Serialize};

/// Terminal status the service reports for a submitted task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            r#""completed""#
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Failed).unwrap(),
            r#""failed""#
        );
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: TaskStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert!(status.is_completed());
    }
}
