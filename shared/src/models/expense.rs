//! Expense Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: String,
    /// Unique across expense categories
    pub name: String,
    pub description: Option<String>,
}

/// Create expense category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategoryCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update expense category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Expense entity
///
/// `total` is supplied by the client and stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub expense_date: DateTime<Utc>,
    pub category_id: String,
    pub description: String,
    pub amount: Decimal,
    pub unit: String,
    pub quantity: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    pub expense_date: DateTime<Utc>,
    pub category_id: String,
    pub description: String,
    pub amount: Decimal,
    pub unit: String,
    pub quantity: Decimal,
    pub total: Decimal,
}

/// Update expense payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub expense_date: Option<DateTime<Utc>>,
    pub category_id: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub unit: Option<String>,
    pub quantity: Option<Decimal>,
    pub total: Option<Decimal>,
}
