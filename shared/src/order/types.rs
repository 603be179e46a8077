//! Order wire enums

use serde::{Deserialize, Serialize};

/// How an order discount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Fixed amount off the subtotal
    #[default]
    Amount,
    /// Percentage of the subtotal
    Percentage,
}

/// Payment state of an order, independent of its lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

/// Channel the order entered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    /// Staff-operated terminal
    #[default]
    Pos,
    /// Customer-facing QR menu flow
    Qr,
}

/// Dining option — informational only, never affects pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiningOption {
    #[default]
    DineIn,
    Takeaway,
    Delivery,
}
