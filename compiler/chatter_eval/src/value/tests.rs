use super::*;
use pretty_assertions::assert_eq;

#[test]
fn integral_numbers_print_without_fraction() {
    assert_eq!(Value::Number(7.0).to_string(), "7");
    assert_eq!(Value::Number(-12.0).to_string(), "-12");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
}

#[test]
fn fractional_numbers_print_shortest_form() {
    assert_eq!(Value::Number(3.5).to_string(), "3.5");
    assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
}

#[test]
fn non_finite_numbers_print_like_words() {
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
}

#[test]
fn text_undefined_and_errors_display() {
    assert_eq!(Value::text("hello world").to_string(), "hello world");
    assert_eq!(Value::Undefined.to_string(), "Undefined");
    assert_eq!(
        Value::from(RuntimeError::DivisionByZero).to_string(),
        "Error: Division by zero"
    );
}

#[test]
fn as_number_only_for_numbers() {
    assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
    assert_eq!(Value::text("2").as_number(), None);
    assert_eq!(Value::Undefined.as_number(), None);
    assert_eq!(Value::from(RuntimeError::InvalidOperands).as_number(), None);
}

#[test]
fn parses_integer_literals() {
    assert_eq!(parse_number_literal("42"), Some(42.0));
    assert_eq!(parse_number_literal("-5"), Some(-5.0));
    assert_eq!(parse_number_literal("+5"), Some(5.0));
    assert_eq!(parse_number_literal(" 8 "), Some(8.0));
}

#[test]
fn decimal_literals_truncate() {
    assert_eq!(parse_number_literal("3.9"), Some(3.0));
    assert_eq!(parse_number_literal("-3.9"), Some(-3.0));
    assert_eq!(parse_number_literal("5."), Some(5.0));
}

#[test]
fn rejects_non_numbers() {
    for token in ["", "-", "abc", "1a", ".5", "1.2.3", "1 2", "0x10"] {
        assert_eq!(parse_number_literal(token), None, "token {token:?}");
    }
}

#[test]
fn numeric_text_converts_to_number() {
    assert_eq!(
        Value::text("7").into_numeric_if_possible(),
        Value::Number(7.0)
    );
    assert_eq!(
        Value::text("3.5").into_numeric_if_possible(),
        Value::Number(3.5)
    );
    assert_eq!(
        Value::text("seven").into_numeric_if_possible(),
        Value::text("seven")
    );
    assert_eq!(
        Value::text("inf").into_numeric_if_possible(),
        Value::text("inf")
    );
}
