//! Purchase Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Purchase entity (stock bought in, costed as `price * quantity`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    pub image_url: Option<String>,
    /// Product category reference
    pub category_id: String,
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub price: Decimal,
    pub purchase_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Create purchase payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCreate {
    pub image_url: Option<String>,
    pub category_id: String,
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub price: Decimal,
    pub purchase_date: DateTime<Utc>,
}

/// Update purchase payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseUpdate {
    pub image_url: Option<String>,
    pub category_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub price: Option<Decimal>,
    pub purchase_date: Option<DateTime<Utc>>,
}
