//! Discounts
//!
//! The percentage-with-cap arithmetic shared by both evaluators.

use rust_decimal::Decimal;

use crate::tiers::TierRule;

/// Calculate the capped discount a tier grants on a single amount.
///
/// Computes `percentage × amount` and clamps the result to the tier's cap.
/// The cap applies per call, so per-line invocations may each consume up to
/// the full cap. Overflow of the multiplication resolves to the cap, keeping
/// the calculation total.
#[must_use]
pub fn capped_discount(rule: &TierRule, amount: Decimal) -> Decimal {
    // decimal_percentage doesn't expose the underlying Decimal, so recover it first.
    (rule.percentage() * Decimal::ONE)
        .checked_mul(amount)
        .map_or(rule.max_discount(), |raw| raw.min(rule.max_discount()))
}
