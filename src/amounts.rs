//! Amounts
//!
//! Decimal amount parsing and rendering for the host's wire format.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

/// Parse an optional decimal-string amount from the host.
///
/// Missing or unparseable values normalise to zero rather than failing.
#[must_use]
pub fn parse_amount(raw: Option<&str>) -> Decimal {
    raw.and_then(|value| value.parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO)
}

/// A discount amount rendered with exactly two fractional digits.
///
/// Construction rounds half away from zero, matching the platform's
/// rendering of discount values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Round a raw decimal to a renderable amount.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Return the rounded decimal value.
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
