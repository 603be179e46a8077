//! Money calculation for order totals
//!
//! All arithmetic is `Decimal`; monetary results are rounded to 2 decimal
//! places, half-up. The effective discount is clamped to `[0, subtotal]`
//! so a stored order can never violate `total == subtotal - discount`.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::OrderItemInput;
use shared::order::DiscountType;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Computed order arithmetic: `total = subtotal - effective_discount`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub effective_discount: Decimal,
    pub total: Decimal,
}

/// Round a monetary value to 2 decimal places, half-up
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total for one item: `price * quantity`
pub fn line_total(price: Decimal, quantity: i32) -> Decimal {
    round_money(price * Decimal::from(quantity))
}

/// Effective discount for a subtotal, clamped to `[0, subtotal]`
pub fn effective_discount(
    subtotal: Decimal,
    discount: Decimal,
    discount_type: DiscountType,
) -> Decimal {
    let raw = match discount_type {
        DiscountType::Amount => discount,
        DiscountType::Percentage => subtotal * discount / Decimal::from(100),
    };
    round_money(raw.clamp(Decimal::ZERO, subtotal))
}

/// Subtotal, effective discount and total for a set of submitted items
pub fn order_totals(
    items: &[OrderItemInput],
    discount: Decimal,
    discount_type: DiscountType,
) -> OrderTotals {
    let subtotal = round_money(
        items
            .iter()
            .map(|item| line_total(item.price, item.quantity))
            .sum(),
    );
    let effective = effective_discount(subtotal, discount, discount_type);
    OrderTotals {
        subtotal,
        effective_discount: effective,
        total: subtotal - effective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(price: &str, quantity: i32) -> OrderItemInput {
        OrderItemInput {
            product_id: "p1".to_string(),
            quantity,
            price: dec(price),
            total: None,
        }
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(line_total(dec("2.00"), 3), dec("6.00"));
        assert_eq!(line_total(dec("10.60"), 2), dec("21.20"));
    }

    #[test]
    fn amount_discount_subtracts_directly() {
        let totals = order_totals(&[item("10.00", 2)], dec("5.00"), DiscountType::Amount);
        assert_eq!(totals.subtotal, dec("20.00"));
        assert_eq!(totals.effective_discount, dec("5.00"));
        assert_eq!(totals.total, dec("15.00"));
    }

    #[test]
    fn percentage_discount_to_two_decimals() {
        // 10% of 45.50 = 4.55
        let totals = order_totals(&[item("45.50", 1)], dec("10"), DiscountType::Percentage);
        assert_eq!(totals.effective_discount, dec("4.55"));
        assert_eq!(totals.total, dec("40.95"));

        // 12.5% of 9.99 = 1.24875 -> 1.25 half-up
        let totals = order_totals(&[item("9.99", 1)], dec("12.5"), DiscountType::Percentage);
        assert_eq!(totals.effective_discount, dec("1.25"));
        assert_eq!(totals.total, dec("8.74"));
    }

    #[test]
    fn discount_clamped_to_subtotal() {
        let totals = order_totals(&[item("3.00", 1)], dec("99.00"), DiscountType::Amount);
        assert_eq!(totals.effective_discount, dec("3.00"));
        assert_eq!(totals.total, dec("0.00"));
    }

    #[test]
    fn negative_discount_clamped_to_zero() {
        let totals = order_totals(&[item("3.00", 1)], dec("-5"), DiscountType::Amount);
        assert_eq!(totals.effective_discount, dec("0.00"));
        assert_eq!(totals.total, dec("3.00"));
    }

    #[test]
    fn invariant_total_is_subtotal_minus_discount() {
        for (discount, discount_type) in [
            (dec("0"), DiscountType::Amount),
            (dec("2.50"), DiscountType::Amount),
            (dec("15"), DiscountType::Percentage),
            (dec("100"), DiscountType::Percentage),
        ] {
            let totals = order_totals(
                &[item("10.60", 2), item("3.50", 1)],
                discount,
                discount_type,
            );
            assert_eq!(totals.total, totals.subtotal - totals.effective_discount);
        }
    }

    #[test]
    fn empty_order_totals_are_zero() {
        let totals = order_totals(&[], dec("5.00"), DiscountType::Amount);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.effective_discount, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
