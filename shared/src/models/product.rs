//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// `quantity` is tracked stock on hand; sales do not decrement it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub purchase_cost: Option<Decimal>,
    /// Category reference (String id, required)
    pub category_id: String,
    pub image_url: Option<String>,
    pub unit: String,
    pub description: Option<String>,
    pub quantity: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub purchase_cost: Option<Decimal>,
    pub category_id: String,
    pub image_url: Option<String>,
    /// Defaults to "piece"
    pub unit: Option<String>,
    pub description: Option<String>,
    /// Defaults to 0
    pub quantity: Option<Decimal>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub purchase_cost: Option<Decimal>,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
}
