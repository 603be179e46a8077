//! Shared types for the BondPos POS server
//!
//! Entity models and order domain types used by the server crate and
//! exposed verbatim over the REST API. Monetary amounts and decimal
//! quantities are `rust_decimal::Decimal` (decimal strings on the wire),
//! timestamps are `chrono::DateTime<Utc>` (RFC 3339 on the wire).

pub mod models;
pub mod order;

// Re-exports
pub use order::{DiscountType, InvalidTransition, OrderStatus, PaymentStatus};
pub use serde::{Deserialize, Serialize};
