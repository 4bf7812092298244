//! Basic parsing tests using snapshot testing for successes and plain
//! assertions for failures (derived `Debug` formatting for error variants
//! is exercised directly in `src/error.rs`'s unit tests instead).

use parsica::*;

#[test]
fn test_item_parser() {
    let parser = item::<&str>();
    let result = parser.parse("hello");
    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            'h',
            "ello",
        ),
    )
    "###);
}

#[test]
fn test_item_parser_empty() {
    let parser = item::<&str>();
    let result = parser.parse("");
    assert_eq!(result, Err(ParseError::UnexpectedEof { input: "" }));
}

#[test]
fn test_satisfy_success() {
    let parser = satisfy(|c: &char| c.is_alphabetic());
    let result = parser.parse("hello");
    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            'h',
            "ello",
        ),
    )
    "###);
}

#[test]
fn test_satisfy_failure() {
    let parser = satisfy(|c: &char| c.is_numeric());
    let result = parser.parse("hello").unwrap_err();
    assert_eq!(result.expected_message(), "satisfy");
    assert_eq!(result.got_message(), "'h'");
}

#[test]
fn test_token_success() {
    let parser = token('h');
    let result = parser.parse("hello");
    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            'h',
            "ello",
        ),
    )
    "###);
}

#[test]
fn test_token_failure() {
    let parser = token('x');
    let result = parser.parse("hello").unwrap_err();
    assert_eq!(result.expected_message(), "'x'");
    assert_eq!(result.got_message(), "'h'");
}

#[test]
fn test_pure_parser() {
    let parser = pure(42);
    let result = parser.parse("hello");
    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            42,
            "hello",
        ),
    )
    "###);
}

#[test]
fn test_fail_parser() {
    let parser: Fail<&str, char> = fail("test error");
    let result = parser.parse("hello").unwrap_err();
    assert_eq!(result.expected_message(), "test error");
}

#[test]
fn test_any_single_is_labelled() {
    let result = any_single::<&str>().parse("").unwrap_err();
    assert_eq!(result.expected_message(), "anySingle");
}
