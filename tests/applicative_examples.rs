//! Applicative-style parsing examples combining several combinators into
//! small realistic grammars.

use parsica::*;

#[derive(Debug, PartialEq, Clone)]
struct Person {
    name: String,
    age: u32,
}

#[test]
fn test_add_parser() {
    let parser = unsigned()
        .skip(spaces())
        .skip(char('+'))
        .skip(spaces())
        .and(unsigned())
        .map(|(a, b)| a + b);

    let result = parser.parse("42 + 13");

    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            55,
            "",
        ),
    )
    "###);
}

#[test]
fn test_coordinate_parsing() {
    let parser = integer()
        .preceded_by(char('('))
        .skip(spaces())
        .skip(char(','))
        .skip(spaces())
        .and(integer())
        .skip(char(')'))
        .map(|(x, y)| (x, y));

    let result = parser.parse("(-42, 13)");

    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            (
                -42,
                13,
            ),
            "",
        ),
    )
    "###);
}

#[test]
fn test_rgb_parsing() {
    let parser = unsigned() // Red
        .preceded_by(string("rgb("))
        .skip(char(','))
        .skip(spaces())
        .and(unsigned()) // Green
        .skip(char(','))
        .skip(spaces())
        .and(unsigned()) // Blue
        .skip(char(')'))
        .map(|((r, g), b)| (r, g, b));

    let result = parser.parse("rgb(255, 128, 64)");

    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            (
                255,
                128,
                64,
            ),
            "",
        ),
    )
    "###);
}

#[test]
fn test_list_parsing() {
    let parser = sep_by(unsigned(), char(',').skip(spaces()))
        .preceded_by(char('['))
        .skip(char(']'));

    let result = parser.parse("[1, 2, 3, 4, 5]");

    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            [
                1,
                2,
                3,
                4,
                5,
            ],
            "",
        ),
    )
    "###);
}

#[test]
fn test_simple_person_parsing() {
    let parser = alpha_char()
        .many1()
        .map(|chars| chars.into_iter().collect::<String>())
        .skip(spaces())
        .and(unsigned())
        .map(|(name, age)| Person { name, age });

    let result = parser.parse("John 30");

    insta::assert_debug_snapshot!(result, @r###"
    Ok(
        (
            Person {
                name: "John",
                age: 30,
            },
            "",
        ),
    )
    "###);
}

#[test]
fn test_apply_builds_a_person_from_two_parsed_fields() {
    let build_person = |name: String| move |age: u32| Person {
        name: name.clone(),
        age,
    };
    let parser = pure(build_person)
        .apply(alpha_char().many1().map(|cs| cs.into_iter().collect()))
        .apply(unsigned().preceded_by(spaces()));

    let result = parser.parse("Ada 37");
    assert_eq!(
        result,
        Ok((
            Person {
                name: "Ada".to_string(),
                age: 37
            },
            ""
        ))
    );
}

#[test]
fn test_assemble_and_collect_over_two_letters() {
    let row = collect(vec![alpha_char(), alpha_char()]);
    assert_eq!(row.parse("ab,cd"), Ok((vec!['a', 'b'], ",cd")));

    let parser = assemble(vec![string("key"), string("="), string("value")]);
    assert_eq!(
        parser.parse("key=value;"),
        Ok(("key=value".to_string(), ";"))
    );
}
