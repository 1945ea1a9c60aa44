//! Integration tests for the line-level discount function

use testresult::TestResult;

use gratis::{
    host::FunctionError,
    lines::{self, LineRunInput},
};

const EMPTY_RESULT: &str = r#"{"discountApplicationStrategy":"First","discounts":[]}"#;

#[test]
fn customer_without_tier_tags_gets_no_discounts() -> TestResult {
    let output = lines::run(
        r#"{
            "cart": {"lines": [{"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "100.00"}]},
            "customer": {"tags": ["wholesale"]}
        }"#,
    )?;

    assert_eq!(output, EMPTY_RESULT);

    Ok(())
}

#[test]
fn qualifying_lines_each_carry_amount_target_and_message() -> TestResult {
    let output = lines::run(
        r#"{
            "cart": {"lines": [
                {"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "100.00"},
                {"merchandiseId": "gid://shop/ProductVariant/2", "unitPrice": "10.00"}
            ]},
            "customer": {"tags": ["Level 2"]}
        }"#,
    )?;

    assert_eq!(
        output,
        concat!(
            r#"{"discountApplicationStrategy":"First","discounts":["#,
            r#"{"amount":"20.00","targetMerchandiseId":"gid://shop/ProductVariant/1","message":"Membership discount: 20% off (Max $35)"},"#,
            r#"{"amount":"2.00","targetMerchandiseId":"gid://shop/ProductVariant/2","message":"Membership discount: 20% off (Max $35)"}"#,
            r#"]}"#
        )
    );

    Ok(())
}

#[test]
fn the_cap_is_consumed_per_line() -> TestResult {
    // Each expensive line is capped independently at the tier maximum.
    let output = lines::run(
        r#"{
            "cart": {"lines": [
                {"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "400.00"},
                {"merchandiseId": "gid://shop/ProductVariant/2", "unitPrice": "900.00"}
            ]},
            "customer": {"tags": ["Level 3"]}
        }"#,
    )?;

    let occurrences = output.matches(r#""amount":"50.00""#).count();

    assert_eq!(occurrences, 2, "both lines must receive the full cap");

    Ok(())
}

#[test]
fn zero_priced_lines_are_skipped_while_others_still_qualify() -> TestResult {
    let output = lines::run(
        r#"{
            "cart": {"lines": [
                {"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "0.00"},
                {"merchandiseId": "gid://shop/ProductVariant/2", "unitPrice": "30.00"}
            ]},
            "customer": {"tags": ["Level 1"]}
        }"#,
    )?;

    assert!(!output.contains("gid://shop/ProductVariant/1"));
    assert!(output.contains(
        r#"{"amount":"3.00","targetMerchandiseId":"gid://shop/ProductVariant/2","message":"Membership discount: 10% off (Max $20)"}"#
    ));

    Ok(())
}

#[test]
fn multiple_tier_tags_resolve_to_the_last_declared_tier() -> TestResult {
    let output = lines::run(
        r#"{
            "cart": {"lines": [{"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "10.00"}]},
            "customer": {"tags": ["Level 1", "Level 3"]}
        }"#,
    )?;

    assert!(output.contains(r#""amount":"3.00""#));
    assert!(output.contains("Membership discount: 30% off (Max $50)"));

    Ok(())
}

#[test]
fn empty_cart_yields_no_discounts_even_for_members() -> TestResult {
    let output = lines::run(r#"{"cart": {"lines": []}, "customer": {"tags": ["Level 3"]}}"#)?;

    assert_eq!(output, EMPTY_RESULT);

    Ok(())
}

#[test]
fn missing_cart_degrades_to_an_empty_line_list() -> TestResult {
    let output = lines::run(r#"{"customer": {"tags": ["Level 2"]}}"#)?;

    assert_eq!(output, EMPTY_RESULT);

    Ok(())
}

#[test]
fn unparseable_prices_contribute_nothing() -> TestResult {
    let output = lines::run(
        r#"{
            "cart": {"lines": [
                {"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "n/a"},
                {"merchandiseId": "gid://shop/ProductVariant/2"}
            ]},
            "customer": {"tags": ["Level 2"]}
        }"#,
    )?;

    assert_eq!(output, EMPTY_RESULT);

    Ok(())
}

#[test]
fn evaluation_is_idempotent() -> TestResult {
    let input = r#"{
        "cart": {"lines": [{"merchandiseId": "gid://shop/ProductVariant/1", "unitPrice": "42.42"}]},
        "customer": {"tags": ["Level 1"]}
    }"#;

    assert_eq!(lines::run(input)?, lines::run(input)?);

    Ok(())
}

#[test]
fn malformed_documents_surface_an_input_error() {
    let result = lines::run("[not json");

    assert!(matches!(result, Err(FunctionError::Input(_))));
}

#[test]
fn typed_input_deserializes_from_the_wire_shape() -> TestResult {
    let input: LineRunInput = serde_json::from_str(
        r#"{
            "cart": {"lines": [{"merchandiseId": "gid://shop/ProductVariant/9", "unitPrice": "12.00"}]},
            "customer": {"tags": ["Level 1"]}
        }"#,
    )?;

    let result = lines::evaluate(&input);

    assert_eq!(result.discounts.len(), 1);

    Ok(())
}
