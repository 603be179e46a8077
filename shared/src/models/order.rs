//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::order::{DiningOption, DiscountType, OrderSource, OrderStatus, PaymentStatus};

/// Order entity
///
/// Invariant: `total == subtotal - effective_discount`, where the
/// effective discount is `discount` for [`DiscountType::Amount`] and
/// `subtotal * discount / 100` for [`DiscountType::Percentage`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Sequential number from the store-owned counter
    pub order_number: String,
    pub table_id: Option<String>,
    pub dining_option: DiningOption,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub order_source: OrderSource,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub discount_type: DiscountType,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Order line item, owned by its order and deleted with it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    /// Unit price snapshot taken at order time
    pub price: Decimal,
    /// `price * quantity`
    pub total: Decimal,
}

/// Create order payload (order fields; items travel alongside)
///
/// Subtotal and total are recomputed server-side from the submitted
/// items and discount, so they are accepted but not trusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_id: Option<String>,
    #[serde(default)]
    pub dining_option: DiningOption,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub order_source: OrderSource,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
}

/// Line item as submitted on order creation (order id assigned server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: String,
    pub quantity: i32,
    pub price: Decimal,
    /// Accepted for wire compatibility; recomputed as `price * quantity`
    pub total: Option<Decimal>,
}

/// Update order payload
///
/// A status change rides through the order status state machine; the
/// total is recomputed when discount fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub table_id: Option<String>,
    pub dining_option: Option<DiningOption>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub discount: Option<Decimal>,
    pub discount_type: Option<DiscountType>,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<String>,
}

/// Line item joined with its product for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemWithProduct {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: Product,
}

/// Order with its resolved line items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemWithProduct>,
}
