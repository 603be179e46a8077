//! Staff Salary Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Staff salary payment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSalary {
    pub id: String,
    pub employee_id: String,
    pub salary_date: DateTime<Utc>,
    pub salary_amount: Decimal,
    pub deduct_salary: Decimal,
    pub total_salary: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Create staff salary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSalaryCreate {
    pub employee_id: String,
    pub salary_date: DateTime<Utc>,
    pub salary_amount: Decimal,
    /// Defaults to 0
    pub deduct_salary: Option<Decimal>,
    pub total_salary: Decimal,
}

/// Update staff salary payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSalaryUpdate {
    pub employee_id: Option<String>,
    pub salary_date: Option<DateTime<Utc>>,
    pub salary_amount: Option<Decimal>,
    pub deduct_salary: Option<Decimal>,
    pub total_salary: Option<Decimal>,
}
