use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned task identifier. The API serves both numeric and string
/// ids, so this deserializes from either JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        TaskId::Number(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
    pub completed: bool,
}

/// Update payload. `completed` is omitted from the body entirely when
/// `None`; the store keeps the prior flag for such partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_numeric_id() {
        let task: Task = serde_json::from_str(r#"{"id":7,"text":"Buy milk","completed":false}"#)
            .expect("valid task JSON");
        assert_eq!(task.id, TaskId::from(7));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn task_deserializes_string_id() {
        let task: Task =
            serde_json::from_str(r#"{"id":"a1b2","text":"Call home","completed":true}"#)
                .expect("valid task JSON");
        assert_eq!(task.id, TaskId::from("a1b2"));
        assert!(task.completed);
    }

    #[test]
    fn partial_update_omits_completed() {
        let body = UpdateTaskRequest {
            text: "Water plants".to_string(),
            completed: None,
        };
        let json = serde_json::to_string(&body).expect("serializable");
        assert_eq!(json, r#"{"text":"Water plants"}"#);
    }

    #[test]
    fn full_update_carries_completed() {
        let body = UpdateTaskRequest {
            text: "Water plants".to_string(),
            completed: Some(true),
        };
        let json = serde_json::to_string(&body).expect("serializable");
        assert_eq!(json, r#"{"text":"Water plants","completed":true}"#);
    }
}
