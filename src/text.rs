//! Text and string parsing utilities: character-class primitives and a few
//! small numeric/string conveniences built on top of the core combinators.
//!
//! Classification is ASCII by default (`digit_char`, `alpha_char`, ...); the
//! `unicode_*` variants opt into `char::is_alphabetic`/`is_alphanumeric` for
//! callers that need full Unicode code-point classification.

use crate::parser::Label;
use crate::predicate::{self, is_equal, not_pred, or_pred};
use crate::{Input, ParseError, ParseResult, Parser, combinators::*};

/// Parses a specific character. `satisfy(isEqual(c)).label("char(c)")`.
///
/// ```
/// use parsica::{char, Parser};
///
/// assert_eq!(char('a').parse("abc"), Ok(('a', "bc")));
/// assert!(char('a').parse("xyz").is_err());
/// ```
pub fn char<'a>(c: char) -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    let pred = is_equal(c);
    satisfy(move |x: &char| pred(*x)).label(format!("char({c})"))
}

/// Parses `c` case-insensitively; the output preserves the actual case found
/// in the input. `satisfy(isEqual(lower(c)) or isEqual(upper(c))).label("charI(c)")`.
pub fn char_i<'a>(c: char) -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    let lower = c.to_ascii_lowercase();
    let upper = c.to_ascii_uppercase();
    let pred = or_pred(is_equal(lower), is_equal(upper));
    satisfy(move |x: &char| pred(*x)).label(format!("charI({c})"))
}

/// Parses a specific string literal verbatim. Panics (`InvalidArgument`) if
/// `s` is empty - the core requires `|s| >= 1`.
///
/// ```
/// use parsica::{string, Parser};
///
/// assert_eq!(string("hello").parse("hello world"), Ok(("hello".to_string(), " world")));
/// ```
pub fn string(s: &str) -> String_ {
    assert!(
        !s.is_empty(),
        "InvalidArgument: string() requires a non-empty literal"
    );
    String_ {
        expected: s.to_string(),
    }
}

pub struct String_ {
    expected: String,
}

impl<'a> Parser<&'a str, String> for String_ {
    fn parse(&self, mut input: &'a str) -> ParseResult<&'a str, String> {
        let original_input = input;
        let mut matched = String::new();

        for expected_char in self.expected.chars() {
            match input.uncons() {
                Some((c, remaining)) if c == expected_char => {
                    matched.push(c);
                    input = remaining;
                }
                Some((c, _)) => {
                    return Err(ParseError::expected(
                        format!("string({:?})", self.expected),
                        Some(format!("{c:?}")),
                        original_input,
                    ));
                }
                None => {
                    return Err(ParseError::expected(
                        format!("string({:?})", self.expected),
                        Some("EOF"),
                        original_input,
                    ));
                }
            }
        }

        Ok((matched, input))
    }
}

/// Macro for the repetitive `satisfy(predicate).label(name)` character-class
/// primitives: each one is a zero-argument function returning a
/// fully-labelled `satisfy`.
macro_rules! char_class {
    ($(#[$meta:meta])* $name:ident, $predicate:expr, $label:literal) => {
        $(#[$meta])*
        pub fn $name<'a>() -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
            satisfy(move |c: &char| $predicate(*c)).label($label)
        }
    };
}

char_class!(
    /// ASCII digit `0`-`9`.
    digit_char,
    predicate::is_digit,
    "digitChar"
);
char_class!(
    /// ASCII alphabetic character.
    alpha_char,
    predicate::is_alpha,
    "alphaChar"
);
char_class!(
    /// ASCII alphanumeric character.
    alpha_num_char,
    predicate::is_alpha_num,
    "alphaNumChar"
);
char_class!(
    /// ASCII uppercase letter.
    upper_char,
    predicate::is_upper,
    "upperChar"
);
char_class!(
    /// ASCII lowercase letter.
    lower_char,
    predicate::is_lower,
    "lowerChar"
);
char_class!(
    /// ASCII hexadecimal digit.
    hex_digit_char,
    predicate::is_hex_digit,
    "hexDigitChar"
);
char_class!(
    /// ASCII octal digit.
    oct_digit_char,
    predicate::is_oct_digit,
    "octDigitChar"
);
char_class!(
    /// ASCII binary digit.
    bin_digit_char,
    predicate::is_bin_digit,
    "binDigitChar"
);
char_class!(
    /// ASCII control character.
    control_char,
    predicate::is_control,
    "controlChar"
);
char_class!(
    /// Printable ASCII character (graphic plus space).
    print_char,
    predicate::is_printable,
    "printChar"
);
char_class!(
    /// ASCII punctuation character.
    punctuation_char,
    predicate::is_punctuation,
    "punctuationChar"
);
char_class!(
    /// ASCII whitespace character.
    space_char,
    predicate::is_space,
    "spaceChar"
);

/// Unicode-aware alphabetic character, for callers opting out of the
/// default ASCII classification.
pub fn unicode_alpha_char<'a>() -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    satisfy(|c: &char| c.is_alphabetic()).label("unicodeAlphaChar")
}

/// Unicode-aware alphanumeric character.
pub fn unicode_alpha_num_char<'a>()
-> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    satisfy(|c: &char| c.is_alphanumeric()).label("unicodeAlphaNumChar")
}

/// Unicode-aware whitespace character.
pub fn unicode_space_char<'a>() -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    satisfy(|c: &char| c.is_whitespace()).label("unicodeSpaceChar")
}

/// Parse zero or more whitespace characters.
pub fn spaces<'a>() -> impl Parser<&'a str, String> {
    space_char().many().map(|chars| chars.into_iter().collect())
}

/// Parse one or more whitespace characters.
pub fn spaces1<'a>() -> impl Parser<&'a str, String> {
    space_char()
        .many1()
        .map(|chars| chars.into_iter().collect())
}

/// Parse a newline character.
pub fn newline<'a>() -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    char('\n')
}

/// Parse a tab character.
pub fn tab<'a>() -> Label<Satisfy<&'a str, impl Fn(&char) -> bool + Clone>, char> {
    char('\t')
}

/// Parse an unsigned integer.
pub fn unsigned() -> Unsigned {
    Unsigned
}

pub struct Unsigned;

impl<'a> Parser<&'a str, u32> for Unsigned {
    fn parse(&self, input: &'a str) -> ParseResult<&'a str, u32> {
        let (digits, remaining) = digit_char().many1().parse(input)?;
        let digits_str: String = digits.into_iter().collect();
        match digits_str.parse::<u32>() {
            Ok(n) => Ok((n, remaining)),
            Err(_) => Err(ParseError::message("a valid unsigned integer", input)),
        }
    }
}

/// Parse a signed integer.
pub fn integer() -> Integer {
    Integer
}

pub struct Integer;

impl<'a> Parser<&'a str, i32> for Integer {
    fn parse(&self, input: &'a str) -> ParseResult<&'a str, i32> {
        char('-')
            .maybe()
            .and(unsigned())
            .map(|(sign, num)| match sign {
                Some(_) => -(num as i32),
                None => num as i32,
            })
            .parse(input)
    }
}

/// Parse any character except the given one.
pub fn not_char<'a>(c: char) -> impl Parser<&'a str, char> {
    let pred = not_pred(is_equal(c));
    satisfy(move |x: &char| pred(*x))
}

/// Parse any character from a given set.
pub fn one_of<'a>(chars: &str) -> impl Parser<&'a str, char> {
    let chars = chars.to_string();
    satisfy(move |c: &char| chars.contains(*c))
}

/// Parse any character not in the given set.
pub fn none_of<'a>(chars: &str) -> impl Parser<&'a str, char> {
    let chars = chars.to_string();
    satisfy(move |c: &char| !chars.contains(*c))
}
