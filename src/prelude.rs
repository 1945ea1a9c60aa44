//! Gratis prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    amounts::{Amount, parse_amount},
    discounts::capped_discount,
    host::{Customer, DiscountApplicationStrategy, FunctionError},
    lines::{CartLine, LineCart, LineRunInput, LineRunResult, ProductDiscount},
    order::{OrderCart, OrderDiscount, OrderRunInput, OrderRunResult, OrderTarget},
    tags::TagSet,
    tiers::{TierRule, membership_tiers, resolve_tier},
};
