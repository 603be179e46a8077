//! Attendance Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance record entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub employee_id: String,
    pub date: DateTime<Utc>,
    /// Clock-in time as entered ("09:00")
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Create attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    pub employee_id: String,
    pub date: DateTime<Utc>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: String,
}

/// Update attendance payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    pub employee_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: Option<String>,
}
