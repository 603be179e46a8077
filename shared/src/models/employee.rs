//! Employee Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee entity (员工)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    /// Badge number (e.g. "EMP001"), unique across employees
    pub employee_id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joining_date: DateTime<Utc>,
    pub salary: Decimal,
    pub photo_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub employee_id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joining_date: DateTime<Utc>,
    pub salary: Decimal,
    pub photo_url: Option<String>,
    /// Defaults to "active"
    pub status: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joining_date: Option<DateTime<Utc>>,
    pub salary: Option<Decimal>,
    pub photo_url: Option<String>,
    pub status: Option<String>,
}
