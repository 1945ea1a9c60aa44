//! Order-Level Discount
//!
//! Evaluates one aggregate membership discount against the whole order
//! total, applied by the host under the `Maximum` strategy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    amounts::{Amount, parse_amount},
    discounts::capped_discount,
    host::{Customer, DiscountApplicationStrategy, FunctionError, customer_tags, run_function},
    tags::TagSet,
    tiers::resolve_tier,
};

/// The input object for the order-level function.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OrderRunInput {
    /// The cart snapshot; missing fields degrade to a zero total.
    pub cart: Option<OrderCart>,

    /// The customer snapshot, absent for anonymous checkouts.
    pub customer: Option<Customer>,
}

/// The order-level cart shape: just the order total.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCart {
    /// The order total in the host's decimal-string encoding.
    pub total_amount: Option<String>,
}

/// A single discount directive against the whole order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OrderDiscount {
    /// The discount amount, rendered with two fractional digits.
    pub amount: Amount,

    /// The discount target; always the order itself.
    pub target: OrderTarget,
}

/// The order-level discount target.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OrderTarget {
    /// Apply against the order total.
    #[serde(rename = "ORDER")]
    Order,
}

/// The result object returned to the host.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRunResult {
    /// Always `Maximum` for the order-level function.
    pub discount_application_strategy: DiscountApplicationStrategy,

    /// Zero or one discount directives.
    pub discounts: Vec<OrderDiscount>,
}

impl OrderRunResult {
    fn empty() -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::Maximum,
            discounts: Vec::new(),
        }
    }
}

/// A fully-populated order snapshot, normalised from partial input.
#[derive(Debug, Clone, PartialEq)]
struct NormalizedOrder {
    total: Decimal,
    tags: TagSet,
}

/// Convert a partial input object into a fully-populated snapshot.
fn normalize(input: &OrderRunInput) -> NormalizedOrder {
    NormalizedOrder {
        total: parse_amount(
            input
                .cart
                .as_ref()
                .and_then(|cart| cart.total_amount.as_deref()),
        ),
        tags: customer_tags(input.customer.as_ref()),
    }
}

/// Evaluate the order-level membership discount.
///
/// Customers without an applicable tier receive an empty discount list. Once
/// a tier resolves, exactly one record targeting the order is emitted, even
/// when the capped amount rounds to zero.
#[must_use]
pub fn evaluate(input: &OrderRunInput) -> OrderRunResult {
    let order = normalize(input);

    let Some(rule) = resolve_tier(&order.tags) else {
        return OrderRunResult::empty();
    };

    let discount = OrderDiscount {
        amount: Amount::from_decimal(capped_discount(&rule, order.total)),
        target: OrderTarget::Order,
    };

    OrderRunResult {
        discount_application_strategy: DiscountApplicationStrategy::Maximum,
        discounts: vec![discount],
    }
}

/// Run the order-level function over the host's JSON documents.
///
/// # Errors
///
/// - [`FunctionError::Input`]: the input document was not a syntactically valid input object.
/// - [`FunctionError::Output`]: the result could not be encoded.
pub fn run(input: &str) -> Result<String, FunctionError> {
    run_function(input, |input: OrderRunInput| evaluate(&input))
}
