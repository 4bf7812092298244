//! Character-class predicates: pure, total functions from a single character
//! to a boolean, plus the small boolean algebra that composes them.
//!
//! Classification is ASCII by default, matching the library's Non-goal of
//! "no locale-aware classification beyond basic Unicode-code-point classes
//! the host platform readily supports" - `char::is_alphabetic` and friends
//! already cover the Unicode-aware case for callers who opt into it via the
//! `unicode_*` constructors in [`crate::text`].

/// True for ASCII digits `0`-`9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// True for ASCII alphabetic characters.
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True for ASCII uppercase letters.
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// True for ASCII lowercase letters.
pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// True for ASCII hexadecimal digits (`0`-`9`, `a`-`f`, `A`-`F`).
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// True for ASCII octal digits (`0`-`7`).
pub fn is_oct_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// True for ASCII binary digits (`0`-`1`).
pub fn is_bin_digit(c: char) -> bool {
    matches!(c, '0'..='1')
}

/// True for ASCII control characters.
pub fn is_control(c: char) -> bool {
    c.is_ascii_control()
}

/// True for printable ASCII characters (graphic characters plus space).
pub fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || c == ' '
}

/// True for ASCII punctuation characters.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// True for ASCII alphanumeric characters.
pub fn is_alpha_num(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// True for ASCII whitespace characters.
pub fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Returns a predicate that is true exactly when the character equals `c`.
pub fn is_equal(c: char) -> impl Fn(char) -> bool + Clone {
    move |x: char| x == c
}

/// Returns a predicate that is true when either `p` or `q` is true
/// (short-circuiting on `p`).
pub fn or_pred<P, Q>(p: P, q: Q) -> impl Fn(char) -> bool + Clone
where
    P: Fn(char) -> bool + Clone,
    Q: Fn(char) -> bool + Clone,
{
    move |c: char| p(c) || q(c)
}

/// Returns a predicate that is true when both `p` and `q` are true
/// (short-circuiting on `p`).
pub fn and_pred<P, Q>(p: P, q: Q) -> impl Fn(char) -> bool + Clone
where
    P: Fn(char) -> bool + Clone,
    Q: Fn(char) -> bool + Clone,
{
    move |c: char| p(c) && q(c)
}

/// Returns the logical negation of `p`.
pub fn not_pred<P>(p: P) -> impl Fn(char) -> bool + Clone
where
    P: Fn(char) -> bool + Clone,
{
    move |c: char| !p(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_classes() {
        assert!(is_digit('5'));
        assert!(!is_digit('a'));
        assert!(is_alpha('a'));
        assert!(is_upper('A'));
        assert!(is_lower('a'));
        assert!(is_hex_digit('f'));
        assert!(!is_hex_digit('g'));
        assert!(is_oct_digit('7'));
        assert!(!is_oct_digit('8'));
        assert!(is_bin_digit('1'));
        assert!(!is_bin_digit('2'));
        assert!(is_control('\n'));
        assert!(is_printable('x'));
        assert!(!is_printable('\n'));
        assert!(is_punctuation('!'));
    }

    #[test]
    fn combinators_form_a_boolean_algebra() {
        let digit_or_dot = or_pred(is_digit, is_equal('.'));
        assert!(digit_or_dot('3'));
        assert!(digit_or_dot('.'));
        assert!(!digit_or_dot('x'));

        let upper_and_alpha = and_pred(is_upper, is_alpha);
        assert!(upper_and_alpha('A'));
        assert!(!upper_and_alpha('a'));

        let not_digit = not_pred(is_digit);
        assert!(not_digit('a'));
        assert!(!not_digit('5'));
    }
}
