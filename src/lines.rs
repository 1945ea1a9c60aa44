//! Line-Level Discount
//!
//! Evaluates an independent membership discount per cart line, each capped
//! separately and carrying an explanatory message, applied by the host under
//! the `First` strategy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    amounts::{Amount, parse_amount},
    discounts::capped_discount,
    host::{Customer, DiscountApplicationStrategy, FunctionError, customer_tags, run_function},
    tags::TagSet,
    tiers::{TierRule, resolve_tier},
};

/// The input object for the line-level function.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LineRunInput {
    /// The cart snapshot; missing fields degrade to an empty line list.
    pub cart: Option<LineCart>,

    /// The customer snapshot, absent for anonymous checkouts.
    pub customer: Option<Customer>,
}

/// The line-level cart shape: the ordered cart lines.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LineCart {
    /// Cart lines in presentation order.
    pub lines: Option<Vec<CartLine>>,
}

/// One distinct merchandise entry in the cart.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Identifier of the merchandise on this line.
    pub merchandise_id: Option<String>,

    /// Unit price in the host's decimal-string encoding.
    pub unit_price: Option<String>,
}

/// A discount directive against a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDiscount {
    /// The discount amount, rendered with two fractional digits.
    pub amount: Amount,

    /// The merchandise the discount applies to.
    pub target_merchandise_id: String,

    /// Shopper-facing description of the applied tier.
    pub message: String,
}

/// The result object returned to the host.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineRunResult {
    /// Always `First` for the line-level function.
    pub discount_application_strategy: DiscountApplicationStrategy,

    /// One discount directive per qualifying line.
    pub discounts: Vec<ProductDiscount>,
}

impl LineRunResult {
    fn empty() -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: Vec::new(),
        }
    }
}

/// A fully-populated cart line, normalised from partial input.
#[derive(Debug, Clone, PartialEq)]
struct NormalizedLine {
    merchandise_id: String,
    unit_price: Decimal,
}

/// A fully-populated cart snapshot, normalised from partial input.
#[derive(Debug, Clone, PartialEq)]
struct NormalizedCart {
    lines: Vec<NormalizedLine>,
    tags: TagSet,
}

/// Convert a partial input object into a fully-populated snapshot.
fn normalize(input: &LineRunInput) -> NormalizedCart {
    let lines = input
        .cart
        .as_ref()
        .and_then(|cart| cart.lines.as_ref())
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|line| NormalizedLine {
            merchandise_id: line.merchandise_id.clone().unwrap_or_default(),
            unit_price: parse_amount(line.unit_price.as_deref()),
        })
        .collect();

    NormalizedCart {
        lines,
        tags: customer_tags(input.customer.as_ref()),
    }
}

/// Evaluate the line-level membership discount.
///
/// Customers without an applicable tier receive an empty discount list.
/// Otherwise each line is discounted independently, with the tier cap applied
/// per line; lines whose capped amount is not strictly positive are skipped
/// while the rest of the cart still produces records.
#[must_use]
pub fn evaluate(input: &LineRunInput) -> LineRunResult {
    let cart = normalize(input);

    let Some(rule) = resolve_tier(&cart.tags) else {
        return LineRunResult::empty();
    };

    let discounts = cart
        .lines
        .into_iter()
        .filter_map(|line| line_discount(&rule, line))
        .collect();

    LineRunResult {
        discount_application_strategy: DiscountApplicationStrategy::First,
        discounts,
    }
}

/// Build the discount record for one line, or `None` when the line
/// contributes nothing.
fn line_discount(rule: &TierRule, line: NormalizedLine) -> Option<ProductDiscount> {
    let amount = capped_discount(rule, line.unit_price);

    // Positivity is checked before rounding; sub-cent amounts still emit a
    // record that renders as `0.00`.
    if amount <= Decimal::ZERO {
        return None;
    }

    Some(ProductDiscount {
        amount: Amount::from_decimal(amount),
        target_merchandise_id: line.merchandise_id,
        message: rule.message(),
    })
}

/// Run the line-level function over the host's JSON documents.
///
/// # Errors
///
/// - [`FunctionError::Input`]: the input document was not a syntactically valid input object.
/// - [`FunctionError::Output`]: the result could not be encoded.
pub fn run(input: &str) -> Result<String, FunctionError> {
    run_function(input, |input: LineRunInput| evaluate(&input))
}
