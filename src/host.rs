//! Host Boundary
//!
//! The invocation contract shared by both evaluators: the application
//! strategy tag, the customer record, and the JSON runner the host calls.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::tags::TagSet;

/// Errors crossing the host's JSON boundary.
///
/// The evaluators themselves are total; only decoding the input document or
/// encoding the result can fail.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// The input document was not a syntactically valid input object.
    #[error("failed to decode function input")]
    Input(#[source] serde_json::Error),

    /// The result could not be encoded back to the host.
    #[error("failed to encode function result")]
    Output(#[source] serde_json::Error),
}

/// How the host should combine this function's discounts with others.
///
/// Opaque to the evaluators beyond passing the literal tag through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountApplicationStrategy {
    /// The host applies the single largest discount.
    Maximum,

    /// The host applies the first applicable discount.
    First,
}

/// The customer snapshot supplied by the host.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Customer {
    /// Tags attached to the customer, including any membership tier labels.
    pub tags: Option<Vec<String>>,
}

impl Customer {
    /// Normalise the customer's tags for tier resolution.
    #[must_use]
    pub fn tag_set(&self) -> TagSet {
        TagSet::from(self.tags.clone().unwrap_or_default())
    }
}

/// Normalise an optional customer to a tag set, defaulting to no tags.
#[must_use]
pub fn customer_tags(customer: Option<&Customer>) -> TagSet {
    customer.map(Customer::tag_set).unwrap_or_default()
}

/// Decode an input document, evaluate it, and encode the result.
///
/// # Errors
///
/// - [`FunctionError::Input`]: the input document was not a syntactically valid input object.
/// - [`FunctionError::Output`]: the result could not be encoded.
pub fn run_function<I, O>(
    input: &str,
    evaluate: impl FnOnce(I) -> O,
) -> Result<String, FunctionError>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input = serde_json::from_str(input).map_err(FunctionError::Input)?;

    serde_json::to_string(&evaluate(input)).map_err(FunctionError::Output)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn strategy_serializes_to_platform_tags() -> TestResult {
        assert_eq!(
            serde_json::to_string(&DiscountApplicationStrategy::Maximum)?,
            r#""Maximum""#
        );
        assert_eq!(
            serde_json::to_string(&DiscountApplicationStrategy::First)?,
            r#""First""#
        );

        Ok(())
    }

    #[test]
    fn customer_tags_defaults_to_empty() {
        assert!(customer_tags(None).is_empty());
        assert!(customer_tags(Some(&Customer { tags: None })).is_empty());
    }

    #[test]
    fn customer_tag_set_normalises_duplicates() {
        let customer = Customer {
            tags: Some(vec!["Level 1".to_string(), "Level 1".to_string()]),
        };

        assert_eq!(customer.tag_set().len(), 1);
    }

    #[test]
    fn customer_deserializes_with_null_tags() -> TestResult {
        let customer: Customer = serde_json::from_str(r#"{"tags": null}"#)?;

        assert!(customer.tag_set().is_empty());

        Ok(())
    }

    #[test]
    fn run_function_surfaces_input_errors() {
        let result = run_function("not json", |customer: Customer| customer.tag_set().len());

        assert!(matches!(result, Err(FunctionError::Input(_))));
    }

    #[test]
    fn run_function_round_trips_valid_documents() -> TestResult {
        let encoded = run_function(r#"{"tags": ["a", "b"]}"#, |customer: Customer| {
            customer.tag_set().len()
        })?;

        assert_eq!(encoded, "2");

        Ok(())
    }
}
