//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// `status` is set to "occupied" when an order referencing the table is
/// created; it is never reverted automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: String,
    /// Display number, unique across tables
    pub table_number: String,
    pub capacity: Option<String>,
    pub description: Option<String>,
    pub status: String,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub table_number: String,
    pub capacity: Option<String>,
    pub description: Option<String>,
    /// Defaults to "available"
    pub status: Option<String>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub table_number: Option<String>,
    pub capacity: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
