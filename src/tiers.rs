//! Membership Tiers
//!
//! The static membership tier table and the rule for resolving a customer's
//! tag set to a single applicable tier.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::tags::TagSet;

/// A membership tier's discount rule: a percentage off with a maximum cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRule {
    label: &'static str,
    percent: u32,
    max_discount: Decimal,
}

impl TierRule {
    /// Create a tier rule from whole percentage points and a cap in major units.
    fn new(label: &'static str, percent: u32, max_discount: u32) -> Self {
        Self {
            label,
            percent,
            max_discount: Decimal::from(max_discount),
        }
    }

    /// Return the customer tag that grants this tier.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Return the discount percentage in whole points (e.g. `20` for 20% off).
    pub const fn percent(&self) -> u32 {
        self.percent
    }

    /// Return the discount percentage as a multiplier.
    pub fn percentage(&self) -> Percentage {
        Percentage::from(f64::from(self.percent) / 100.0)
    }

    /// Return the maximum amount this tier may ever contribute.
    pub const fn max_discount(&self) -> Decimal {
        self.max_discount
    }

    /// Render the shopper-facing description of this tier's discount.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Membership discount: {}% off (Max ${})",
            self.percent, self.max_discount
        )
    }
}

/// Return the membership tier table in declared order.
#[must_use]
pub fn membership_tiers() -> [TierRule; 3] {
    [
        TierRule::new("Level 1", 10, 20),
        TierRule::new("Level 2", 20, 35),
        TierRule::new("Level 3", 30, 50),
    ]
}

/// Resolve a customer's tag set to the single applicable tier rule.
///
/// Scans the table in declared order and lets every matching tier overwrite
/// the previous candidate, so the last match in declared order wins. Returns
/// `None` when no tier label appears in the tag set.
#[must_use]
pub fn resolve_tier(tags: &TagSet) -> Option<TierRule> {
    let mut applicable = None;

    for tier in membership_tiers() {
        if tags.contains(tier.label()) {
            applicable = Some(tier);
        }
    }

    applicable
}
