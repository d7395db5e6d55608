//! Cart pricing using rust_decimal for precision
//!
//! Deterministic, pure computation of the totals shown before checkout.
//! All arithmetic is done using `Decimal` internally, then converted to
//! `f64` for display/serialization. The server recomputes authoritatively
//! at checkout; these totals are an estimate and a mismatch is resolved by
//! trusting the returned order.

use rust_decimal::prelude::*;
use shared::models::{CartItem, Voucher};

use super::CartError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per ticket (€1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), CartError> {
    if !value.is_finite() {
        return Err(CartError::InvalidItem(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a cart line before it enters the session
pub fn validate_cart_item(item: &CartItem) -> Result<(), CartError> {
    require_finite(item.unit_price, "unit_price")?;
    if item.unit_price < 0.0 {
        return Err(CartError::InvalidItem(format!(
            "unit_price must be non-negative, got {}",
            item.unit_price
        )));
    }
    if item.unit_price > MAX_PRICE {
        return Err(CartError::InvalidItem(format!(
            "unit_price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.unit_price
        )));
    }

    if item.quantity <= 0 {
        return Err(CartError::InvalidItem(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(CartError::InvalidItem(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    if item.reference_id.trim().is_empty() {
        return Err(CartError::InvalidItem(
            "reference_id must not be blank".to_string(),
        ));
    }

    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Computed cart totals
///
/// All values are non-negative and rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub subtotal: f64,
    pub membership_deduction: f64,
    pub voucher_deduction: f64,
    pub final_total: f64,
}

/// Compute displayed cart totals
///
/// - `subtotal` = Σ(unit_price × quantity)
/// - `membership_deduction` = subtotal × percentage (percentage clamped to [0, 1])
/// - `voucher_deduction` = voucher.discount_amount when the voucher is Valid
///   and the subtotal reaches its minimum, else 0
/// - `final_total` = max(0, subtotal − membership_deduction − voucher_deduction)
///
/// Pure arithmetic over already-validated lines: no hidden state, safe to
/// call on every mutation.
pub fn compute_totals(
    items: &[CartItem],
    membership_percentage: Option<f64>,
    voucher: Option<&Voucher>,
) -> CartTotals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| to_decimal(item.unit_price) * Decimal::from(item.quantity.max(0)))
        .sum();

    let membership_deduction = membership_percentage
        .filter(|p| p.is_finite())
        .map(|p| {
            let pct = to_decimal(p.clamp(0.0, 1.0));
            (subtotal * pct)
                .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        })
        .unwrap_or(Decimal::ZERO);

    let voucher_deduction = voucher
        .filter(|v| v.applies_to(to_f64(subtotal)))
        .map(|v| to_decimal(v.discount_amount))
        .unwrap_or(Decimal::ZERO);

    let final_total = (subtotal - membership_deduction - voucher_deduction).max(Decimal::ZERO);

    CartTotals {
        subtotal: to_f64(subtotal),
        membership_deduction: to_f64(membership_deduction),
        voucher_deduction: to_f64(voucher_deduction),
        final_total: to_f64(final_total),
    }
}

#[cfg(test)]
mod tests {
    use shared::models::{TicketKind, VoucherStatus};

    use super::*;

    fn p2p_item(quantity: i32, unit_price: f64) -> CartItem {
        CartItem::new(TicketKind::PointToPoint, "journey-1", "A → B", quantity, unit_price)
    }

    fn timed_item(quantity: i32, unit_price: f64) -> CartItem {
        CartItem::new(TicketKind::Timed, "plan-30d", "30-day pass", quantity, unit_price)
    }

    fn voucher(discount: f64, minimum: f64, status: VoucherStatus) -> Voucher {
        Voucher {
            id: "v1".into(),
            code: "WELCOME".into(),
            title: None,
            discount_amount: discount,
            min_transaction_amount: minimum,
            status,
            valid_until: None,
        }
    }

    #[test]
    fn subtotal_is_sum_of_line_totals() {
        let items = vec![p2p_item(2, 10.0), timed_item(1, 50.0), p2p_item(3, 2.5)];
        let totals = compute_totals(&items, None, None);
        assert_eq!(totals.subtotal, 77.5);
        assert_eq!(totals.final_total, 77.5);
        assert_eq!(totals.membership_deduction, 0.0);
        assert_eq!(totals.voucher_deduction, 0.0);
    }

    #[test]
    fn scenario_a_membership_only() {
        let items = vec![p2p_item(2, 10.0)];
        let totals = compute_totals(&items, Some(0.1), None);
        assert_eq!(totals.subtotal, 20.0);
        assert_eq!(totals.membership_deduction, 2.0);
        assert_eq!(totals.voucher_deduction, 0.0);
        assert_eq!(totals.final_total, 18.0);
    }

    #[test]
    fn scenario_b_voucher_at_minimum() {
        let items = vec![timed_item(1, 50.0)];
        let v = voucher(5.0, 50.0, VoucherStatus::Valid);
        let totals = compute_totals(&items, None, Some(&v));
        assert_eq!(totals.subtotal, 50.0);
        assert_eq!(totals.voucher_deduction, 5.0);
        assert_eq!(totals.final_total, 45.0);
    }

    #[test]
    fn scenario_c_voucher_below_minimum_contributes_zero() {
        let items = vec![timed_item(1, 50.0)];
        let v = voucher(5.0, 60.0, VoucherStatus::Valid);
        let totals = compute_totals(&items, None, Some(&v));
        assert_eq!(totals.voucher_deduction, 0.0);
        assert_eq!(totals.final_total, 50.0);
    }

    #[test]
    fn non_valid_voucher_statuses_contribute_zero() {
        let items = vec![timed_item(1, 50.0)];
        for status in [
            VoucherStatus::Preserved,
            VoucherStatus::Used,
            VoucherStatus::Expired,
            VoucherStatus::Revoked,
        ] {
            let v = voucher(5.0, 10.0, status);
            let totals = compute_totals(&items, None, Some(&v));
            assert_eq!(totals.voucher_deduction, 0.0, "status {:?}", status);
            assert_eq!(totals.final_total, 50.0);
        }
    }

    #[test]
    fn final_total_clamps_at_zero() {
        let items = vec![p2p_item(1, 3.0)];
        let v = voucher(100.0, 0.0, VoucherStatus::Valid);
        let totals = compute_totals(&items, Some(1.0), Some(&v));
        assert_eq!(totals.final_total, 0.0);
    }

    #[test]
    fn membership_deduction_is_bounded_by_subtotal() {
        let items = vec![p2p_item(4, 7.25)];
        for p in [0.0, 0.15, 0.5, 1.0] {
            let totals = compute_totals(&items, Some(p), None);
            assert!(totals.membership_deduction >= 0.0);
            assert!(totals.membership_deduction <= totals.subtotal);
        }
        // Out-of-range input is clamped, not an error
        let totals = compute_totals(&items, Some(1.5), None);
        assert_eq!(totals.membership_deduction, totals.subtotal);
        assert_eq!(totals.final_total, 0.0);
    }

    #[test]
    fn membership_deduction_rounds_half_up() {
        // 19.99 * 0.1 = 1.999 → 2.00
        let items = vec![p2p_item(1, 19.99)];
        let totals = compute_totals(&items, Some(0.1), None);
        assert_eq!(totals.membership_deduction, 2.0);
        assert_eq!(totals.final_total, 17.99);
    }

    #[test]
    fn empty_cart_is_all_zeroes() {
        let totals = compute_totals(&[], Some(0.2), None);
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn identical_inputs_yield_identical_totals() {
        let items = vec![p2p_item(2, 10.0), timed_item(1, 50.0)];
        let v = voucher(5.0, 50.0, VoucherStatus::Valid);
        let first = compute_totals(&items, Some(0.1), Some(&v));
        let second = compute_totals(&items, Some(0.1), Some(&v));
        assert_eq!(first, second);
    }

    #[test]
    fn validate_rejects_bad_lines() {
        assert!(validate_cart_item(&p2p_item(1, 2.5)).is_ok());
        assert!(validate_cart_item(&p2p_item(0, 2.5)).is_err());
        assert!(validate_cart_item(&p2p_item(-1, 2.5)).is_err());
        assert!(validate_cart_item(&p2p_item(1, -0.5)).is_err());
        assert!(validate_cart_item(&p2p_item(1, f64::NAN)).is_err());
        assert!(validate_cart_item(&p2p_item(1, MAX_PRICE * 2.0)).is_err());
        assert!(validate_cart_item(&p2p_item(MAX_QUANTITY + 1, 2.5)).is_err());

        let mut blank = p2p_item(1, 2.5);
        blank.reference_id = "  ".into();
        assert!(validate_cart_item(&blank).is_err());
    }
}
