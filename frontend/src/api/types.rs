use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Server-computed counts for the current day. Missing counts read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: u64,
    #[serde(default)]
    pub total_attendance_today: u64,
    #[serde(default)]
    pub present_today: u64,
    #[serde(default)]
    pub absent_today: u64,
}

/// Body of a non-2xx response. `detail` is usually a string but validation
/// failures may carry a structured value instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{detail}")]
    Server { status: u16, detail: String },
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| match detail {
                Value::String(text) if !text.trim().is_empty() => Some(text),
                _ => None,
            });
        match detail {
            Some(detail) => Self::Server { status, detail },
            None => Self::Status { status },
        }
    }

    /// The server-provided `detail`, when there was one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the operator: the server detail, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}
