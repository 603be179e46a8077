//! Order status state machine
//!
//! 订单状态机 — 状态字段不允许任意跳转：
//!
//! ```text
//! draft      → completed | cancelled
//! qr-pending → pending   | cancelled     (staff accept / reject)
//! pending    → confirmed | completed | cancelled
//! confirmed  → completed | cancelled
//! completed, cancelled: terminal
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Saved before payment, editable from the draft list
    #[default]
    Draft,
    /// Accepted and in progress
    Pending,
    /// Confirmed for fulfilment (delivery flow)
    Confirmed,
    Completed,
    Cancelled,
    /// Entered via QR menu, awaiting staff acceptance
    QrPending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attempted transition not allowed by the state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal order status transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl OrderStatus {
    /// Whether no further transitions are allowed out of this status
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether the machine allows moving from `self` to `next`
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match self {
            Draft => matches!(next, Completed | Cancelled),
            QrPending => matches!(next, Pending | Cancelled),
            Pending => matches!(next, Confirmed | Completed | Cancelled),
            Confirmed => matches!(next, Completed | Cancelled),
            Completed | Cancelled => false,
        }
    }

    /// Validate a transition, returning a typed error when rejected
    pub fn transition_to(self, next: OrderStatus) -> Result<OrderStatus, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Wire representation, e.g. `qr-pending`
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::QrPending => "qr-pending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_can_complete_or_cancel() {
        assert!(OrderStatus::Draft.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Draft.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Draft.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Draft.can_transition_to(OrderStatus::QrPending));
    }

    #[test]
    fn qr_pending_accept_reject() {
        assert!(OrderStatus::QrPending.can_transition_to(OrderStatus::Pending));
        assert!(OrderStatus::QrPending.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::QrPending.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn terminal_states_reject_everything() {
        for from in [OrderStatus::Completed, OrderStatus::Cancelled] {
            assert!(from.is_terminal());
            for to in [
                OrderStatus::Draft,
                OrderStatus::Pending,
                OrderStatus::Confirmed,
                OrderStatus::Completed,
                OrderStatus::Cancelled,
                OrderStatus::QrPending,
            ] {
                assert!(!from.can_transition_to(to), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn transition_to_returns_typed_error() {
        let err = OrderStatus::Completed
            .transition_to(OrderStatus::Draft)
            .unwrap_err();
        assert_eq!(err.from, OrderStatus::Completed);
        assert_eq!(err.to, OrderStatus::Draft);
    }

    #[test]
    fn wire_format_is_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::QrPending).unwrap();
        assert_eq!(json, "\"qr-pending\"");
        let back: OrderStatus = serde_json::from_str("\"qr-pending\"").unwrap();
        assert_eq!(back, OrderStatus::QrPending);
    }
}
