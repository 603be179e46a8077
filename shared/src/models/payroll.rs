//! Payroll Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payroll entry entity (one employee, one month)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: String,
    pub employee_id: String,
    pub month: String,
    pub year: String,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Create payroll payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCreate {
    pub employee_id: String,
    pub month: String,
    pub year: String,
    pub base_salary: Decimal,
    /// Defaults to 0
    pub bonus: Option<Decimal>,
    /// Defaults to 0
    pub deductions: Option<Decimal>,
    pub net_salary: Decimal,
    /// Defaults to "pending"
    pub status: Option<String>,
}

/// Update payroll payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollUpdate {
    pub employee_id: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub base_salary: Option<Decimal>,
    pub bonus: Option<Decimal>,
    pub deductions: Option<Decimal>,
    pub net_salary: Option<Decimal>,
    pub status: Option<String>,
}
