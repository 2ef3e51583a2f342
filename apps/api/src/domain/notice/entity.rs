use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Success,
    Error,
}

/// A titled message shown to the user with a single acknowledgement button.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Notice {
    pub id: Uuid,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            severity,
            title: title.into(),
            message: message.into(),
            confirm_label: "OK".to_string(),
            created_at: Utc::now(),
        }
    }
}
