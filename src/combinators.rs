//! Free-function combinators: higher-order constructions built purely out of
//! [`Parser`] methods. Where a free function and a method express the same
//! operation (e.g. `append`/[`Parser::append`]), the free function exists so
//! a caller composing point-free can avoid leaning on method-call position.

use crate::parser::OutputMonoid;
use crate::{Input, ParseError, ParseResult, Parser};
use std::marker::PhantomData;

/// Consumes any single item from the input.
pub fn item<I: Input>() -> Item<I> {
    Item {
        _phantom: PhantomData,
    }
}

pub struct Item<I> {
    _phantom: PhantomData<I>,
}

impl<I: Input> Parser<I, I::Item> for Item<I> {
    fn parse(&self, input: I) -> ParseResult<I, I::Item> {
        match input.uncons() {
            Some((item, remaining)) => Ok((item, remaining)),
            None => Err(ParseError::UnexpectedEof { input }),
        }
    }
}

/// Consumes any single item. An alias for [`item`] labelled the way the
/// core's primitive table names it, so a failure reads `expected "anySingle"`.
pub fn any_single<I: Input>() -> crate::parser::Label<Item<I>, I::Item> {
    item().label("anySingle")
}

/// Parses an item that satisfies the given predicate.
///
/// ```
/// use parsica::{satisfy, Parser};
///
/// let digit = satisfy(|c: &char| c.is_ascii_digit());
/// assert_eq!(digit.parse("9x"), Ok(('9', "x")));
/// assert!(digit.parse("x9").is_err());
/// ```
pub fn satisfy<I, F>(predicate: F) -> Satisfy<I, F>
where
    I: Input,
    F: Fn(&I::Item) -> bool,
{
    Satisfy {
        predicate,
        _phantom: PhantomData,
    }
}

pub struct Satisfy<I, F> {
    predicate: F,
    _phantom: PhantomData<I>,
}

impl<I, F> Parser<I, I::Item> for Satisfy<I, F>
where
    I: Input,
    F: Fn(&I::Item) -> bool,
{
    fn parse(&self, input: I) -> ParseResult<I, I::Item> {
        match input.uncons() {
            Some((item, remaining)) => {
                if (self.predicate)(&item) {
                    Ok((item, remaining))
                } else {
                    Err(ParseError::expected(
                        "satisfy",
                        Some(format!("{item:?}")),
                        input,
                    ))
                }
            }
            None => Err(ParseError::expected("satisfy", Some("EOF"), input)),
        }
    }
}

/// Parses a specific item.
pub fn token<I: Input>(expected: I::Item) -> Token<I> {
    Token { expected }
}

pub struct Token<I: Input> {
    expected: I::Item,
}

impl<I: Input> Parser<I, I::Item> for Token<I> {
    fn parse(&self, input: I) -> ParseResult<I, I::Item> {
        match input.uncons() {
            Some((item, remaining)) => {
                if item == self.expected {
                    Ok((item, remaining))
                } else {
                    Err(ParseError::expected(
                        format!("{:?}", self.expected),
                        Some(format!("{item:?}")),
                        input,
                    ))
                }
            }
            None => Err(ParseError::UnexpectedEof { input }),
        }
    }
}

/// Succeeds without consuming input. An alias for [`crate::parser::pure`].
pub fn empty<I: Input, T: Clone>(value: T) -> crate::parser::Pure<I, T> {
    crate::parser::pure(value)
}

/// Runs `a`, then `b` on the remainder, keeping `b`'s output. The core's
/// `sequence` free function.
pub fn sequence<I, T, U, A, B>(a: A, b: B) -> impl Parser<I, U>
where
    I: Input,
    A: Parser<I, T>,
    B: Parser<I, U>,
{
    b.preceded_by(a)
}

/// Runs `a`, then `b` on the remainder, keeping `a`'s output.
pub fn keep_first<I, T, U, A, B>(a: A, b: B) -> impl Parser<I, T>
where
    I: Input,
    A: Parser<I, T>,
    B: Parser<I, U>,
{
    a.skip(b)
}

/// Runs `a`, then `b` on the remainder, keeping `b`'s output. Behaviourally
/// identical to [`sequence`], labelled distinctly per the core's vocabulary.
pub fn keep_second<I, T, U, A, B>(a: A, b: B) -> impl Parser<I, U>
where
    I: Input,
    A: Parser<I, T>,
    B: Parser<I, U>,
{
    sequence(a, b).label("keepSecond")
}

/// Tries `a`; on failure, tries `b` against the original input.
pub fn either<I, T, A, B>(a: A, b: B) -> impl Parser<I, T>
where
    I: Input,
    A: Parser<I, T>,
    B: Parser<I, T>,
{
    a.or(b)
}

/// Monoidal concatenation of two successful outputs.
pub fn append<I, T, A, B>(a: A, b: B) -> impl Parser<I, T>
where
    I: Input,
    A: Parser<I, T>,
    B: Parser<I, T>,
    T: OutputMonoid,
{
    a.append(b)
}

/// Parses between two delimiters, keeping only the middle result. Composed
/// from `keep_second`/`keep_first` exactly as the core's table defines it.
///
/// Argument order is `(open, middle, close)`, matching this crate's existing
/// combinator/method chaining convention (and the teacher this crate is
/// built from) rather than the table-header order `between(open, close, m)`
/// found alongside one worked example elsewhere in the core's documentation.
/// That example's literal call order does not typecheck against its own
/// `between` definition's body (`keepSecond(open, keepFirst(m, close))`)
/// without this reordering, so `(open, middle, close)` is the resolution
/// adopted here; see `DESIGN.md`'s Open Questions section.
///
/// ```
/// use parsica::{between, char, unsigned, Parser};
///
/// let p = between(char('('), unsigned(), char(')'));
/// assert_eq!(p.parse("(42)"), Ok((42, "")));
/// ```
pub fn between<I, L, R, P, T, U, V>(left: L, parser: P, right: R) -> impl Parser<I, U>
where
    I: Input,
    L: Parser<I, T>,
    P: Parser<I, U>,
    R: Parser<I, V>,
{
    parser.preceded_by(left).skip(right)
}

/// Tries each parser in order, returning the first success; aggregates every
/// failure into a `ParseError::Many` if all fail. The core's `any`/`choice`
/// combinator (left-fold with `or`, seeded at `failure()`).
pub fn choice<I: Input, T, P: Parser<I, T>>(parsers: Vec<P>) -> Choice<I, T, P> {
    Choice {
        parsers,
        _phantom: PhantomData,
    }
}

/// Alias for [`choice`], matching the core's alternate name for the same
/// combinator.
pub fn any<I: Input, T, P: Parser<I, T>>(parsers: Vec<P>) -> Choice<I, T, P> {
    choice(parsers)
}

pub struct Choice<I, T, P> {
    parsers: Vec<P>,
    _phantom: PhantomData<(I, T)>,
}

impl<I, T, P> Parser<I, T> for Choice<I, T, P>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        if self.parsers.is_empty() {
            // choice/any of zero alternatives is a left-fold with `or`
            // seeded at `failure()`, so it reduces to `failure()` itself -
            // never build an empty `Many`, whose `expected_message()` would
            // be "" and whose `primary_input()` would panic.
            return crate::parser::failure().parse(input);
        }

        let mut errors = Vec::new();

        for parser in &self.parsers {
            match parser.parse(input.clone()) {
                Ok(result) => return Ok(result),
                Err(err) => errors.push(err),
            }
        }

        Err(ParseError::many(errors))
    }
}

/// Left-folds `parsers` with monoidal [`append`]. Panics (`InvalidArgument`)
/// if `parsers` is empty - `assemble` has no identity element to fall back
/// to, per the core's error-handling design.
pub fn assemble<I, T, P>(parsers: Vec<P>) -> Assemble<I, T, P>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid,
{
    assert!(
        !parsers.is_empty(),
        "InvalidArgument: assemble() requires at least one parser"
    );
    Assemble {
        parsers,
        _phantom: PhantomData,
    }
}

pub struct Assemble<I, T, P> {
    parsers: Vec<P>,
    _phantom: PhantomData<(I, T)>,
}

impl<I, T, P> Parser<I, T> for Assemble<I, T, P>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let mut iter = self.parsers.iter();
        let first = iter
            .next()
            .expect("assemble() constructor guarantees at least one parser");
        let (mut acc, mut remaining) = first.parse(input)?;
        for parser in iter {
            let (out, rest) = parser.parse(remaining)?;
            acc = acc.append(out);
            remaining = rest;
        }
        Ok((acc, remaining))
    }
}

/// Like [`assemble`], but each output is first wrapped in a singleton `Vec`
/// before being concatenated, so heterogeneous-looking call sites still
/// collect into a flat `Vec<T>` rather than requiring `T: OutputMonoid`.
pub fn collect<I, T, P>(parsers: Vec<P>) -> Collect<I, T, P>
where
    I: Input,
    P: Parser<I, T>,
{
    Collect {
        parsers,
        _phantom: PhantomData,
    }
}

pub struct Collect<I, T, P> {
    parsers: Vec<P>,
    _phantom: PhantomData<(I, T)>,
}

impl<I, T, P> Parser<I, Vec<T>> for Collect<I, T, P>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, Vec<T>> {
        let mut acc = Vec::with_capacity(self.parsers.len());
        let mut remaining = input;
        for parser in &self.parsers {
            let (out, rest) = parser.parse(remaining)?;
            acc.push(out);
            remaining = rest;
        }
        Ok((acc, remaining))
    }
}

/// `p.or(pure(identity))`: on failure of `p`, succeeds with the output
/// monoid's identity element rather than wrapping in `Option`. This is the
/// core's monoidal `optional`, distinct from [`Parser::optional`] (the
/// `Option`-returning Rust-idiomatic form).
pub fn optional<I, T, P>(p: P) -> impl Parser<I, T>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid + Clone,
{
    p.or(crate::parser::pure(T::identity()))
}

/// Zero or more occurrences, collected into a `Vec`. Free-function alias of
/// [`Parser::many`].
pub fn many<I, T, P>(p: P) -> impl Parser<I, Vec<T>>
where
    I: Input,
    P: Parser<I, T>,
    T: Clone,
{
    p.many()
}

/// One or more occurrences, collected into a `Vec`. Free-function alias of
/// [`Parser::many1`].
pub fn some<I, T, P>(p: P) -> impl Parser<I, Vec<T>>
where
    I: Input,
    P: Parser<I, T>,
    T: Clone,
{
    p.many1()
}

/// One or more occurrences, concatenated via the output monoid (rather than
/// collected into a `Vec`, as [`some`] does).
pub fn at_least_one<I, T, P>(p: P) -> AtLeastOne<P, T>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid,
{
    AtLeastOne {
        parser: p,
        _phantom: PhantomData,
    }
}

pub struct AtLeastOne<P, T> {
    parser: P,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, T> for AtLeastOne<P, T>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let (first, mut remaining) = self.parser.parse(input)?;
        let mut acc = first;
        loop {
            let before = remaining.clone();
            match self.parser.parse(remaining.clone()) {
                Ok((out, rest)) => {
                    if rest == before {
                        remaining = rest;
                        break;
                    }
                    acc = acc.append(out);
                    remaining = rest;
                }
                Err(_) => break,
            }
        }
        Ok((acc, remaining))
    }
}

/// Exactly `n` occurrences, concatenated via the output monoid. `n == 0` is
/// defined as `pure(identity())` per the core's design notes; `n >= 1` runs
/// the parser `n` times, failing if any repetition fails.
pub fn repeat<I, T, P>(n: usize, p: P) -> Repeat<P, T>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid,
{
    Repeat {
        n,
        parser: p,
        _phantom: PhantomData,
    }
}

pub struct Repeat<P, T> {
    n: usize,
    parser: P,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, T> for Repeat<P, T>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        if self.n == 0 {
            return Ok((T::identity(), input));
        }
        let mut remaining = input;
        let mut acc: Option<T> = None;
        for _ in 0..self.n {
            let (out, rest) = self.parser.parse(remaining)?;
            acc = Some(match acc {
                Some(prev) => prev.append(out),
                None => out,
            });
            remaining = rest;
        }
        Ok((
            acc.expect("Repeat with n > 0 always runs at least once"),
            remaining,
        ))
    }
}

/// Exactly `n` occurrences, collected into a `Vec` rather than concatenated
/// via the output monoid.
pub fn repeat_list<I, T, P>(n: usize, p: P) -> RepeatList<P, T>
where
    I: Input,
    P: Parser<I, T>,
{
    RepeatList {
        n,
        parser: p,
        _phantom: PhantomData,
    }
}

pub struct RepeatList<P, T> {
    n: usize,
    parser: P,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, Vec<T>> for RepeatList<P, T>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, Vec<T>> {
        let mut remaining = input;
        let mut acc = Vec::with_capacity(self.n);
        for _ in 0..self.n {
            let (out, rest) = self.parser.parse(remaining)?;
            acc.push(out);
            remaining = rest;
        }
        Ok((acc, remaining))
    }
}

/// Helper shared by [`sep_by`]/[`sep_by1`]: given the first matched element,
/// repeatedly parses `separator` then `parser`, backtracking to just before
/// a trailing separator that isn't followed by another element.
fn parse_sep_by_impl<I, P, S, T, U>(
    parser: &P,
    separator: &S,
    first: T,
    mut remaining: I,
) -> ParseResult<I, Vec<T>>
where
    I: Input,
    P: Parser<I, T>,
    S: Parser<I, U>,
    T: Clone,
{
    let mut results = vec![first];

    loop {
        let input_before_sep = remaining.clone();
        match separator.parse(remaining.clone()) {
            Ok((_, after_sep)) => match parser.parse(after_sep) {
                Ok((element, after_element)) => {
                    results.push(element);
                    remaining = after_element;
                }
                Err(_) => {
                    remaining = input_before_sep;
                    break;
                }
            },
            Err(_) => break,
        }
    }

    Ok((results, remaining))
}

/// Zero or more `p`s separated by `separator`. Always succeeds.
///
/// ```
/// use parsica::{sep_by, digit_char, char, Parser};
///
/// let p = sep_by(digit_char(), char(','));
/// assert_eq!(p.parse("1,2,3"), Ok((vec!['1', '2', '3'], "")));
/// assert_eq!(p.parse("x"), Ok((Vec::new(), "x")));
/// ```
pub fn sep_by<I, P, S, T, U>(parser: P, separator: S) -> SepBy<P, S, T, U>
where
    I: Input,
    P: Parser<I, T>,
    S: Parser<I, U>,
    T: Clone,
{
    SepBy {
        parser,
        separator,
        _phantom: PhantomData,
    }
}

pub struct SepBy<P, S, T, U> {
    parser: P,
    separator: S,
    _phantom: PhantomData<(T, U)>,
}

impl<I, P, S, T, U> Parser<I, Vec<T>> for SepBy<P, S, T, U>
where
    I: Input,
    P: Parser<I, T>,
    S: Parser<I, U>,
    T: Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, Vec<T>> {
        match self.parser.parse(input.clone()) {
            Ok((first, remaining)) => {
                parse_sep_by_impl(&self.parser, &self.separator, first, remaining)
            }
            Err(_) => Ok((Vec::new(), input)),
        }
    }
}

/// One or more `p`s separated by `separator`. Fails if `p` does not match at
/// the very start of the input.
pub fn sep_by1<I, P, S, T, U>(parser: P, separator: S) -> SepBy1<P, S, T, U>
where
    I: Input,
    P: Parser<I, T>,
    S: Parser<I, U>,
    T: Clone,
{
    SepBy1 {
        parser,
        separator,
        _phantom: PhantomData,
    }
}

pub struct SepBy1<P, S, T, U> {
    parser: P,
    separator: S,
    _phantom: PhantomData<(T, U)>,
}

impl<I, P, S, T, U> Parser<I, Vec<T>> for SepBy1<P, S, T, U>
where
    I: Input,
    P: Parser<I, T>,
    S: Parser<I, U>,
    T: Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, Vec<T>> {
        let (first, remaining) = self.parser.parse(input)?;
        parse_sep_by_impl(&self.parser, &self.separator, first, remaining)
    }
}

/// Succeeds with an empty string iff `p` fails at the current position;
/// never consumes input either way. The core's free-function
/// `notFollowedBy`, distinct from [`Parser::not_followed_by`] (which keeps
/// the preceding parser's own output rather than always returning `""`).
pub fn not_followed_by<I, T, P>(p: P) -> NotFollowedBy<P, T>
where
    I: Input,
    P: Parser<I, T>,
{
    NotFollowedBy {
        parser: p,
        _phantom: PhantomData,
    }
}

pub struct NotFollowedBy<P, T> {
    parser: P,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, String> for NotFollowedBy<P, T>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, String> {
        match self.parser.parse(input.clone()) {
            Ok(_) => Err(ParseError::expected(
                "notFollowedBy",
                Some(input.describe()),
                input,
            )),
            Err(_) => Ok((String::new(), input)),
        }
    }
}

/// Parses end of input.
pub fn eof<I: Input>() -> Eof<I> {
    Eof {
        _phantom: PhantomData,
    }
}

pub struct Eof<I> {
    _phantom: PhantomData<I>,
}

impl<I: Input> Parser<I, ()> for Eof<I> {
    fn parse(&self, input: I) -> ParseResult<I, ()> {
        if input.is_empty() {
            Ok(((), input))
        } else {
            Err(ParseError::expected(
                "end of input",
                Some(input.describe()),
                input,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{char, digit_char};

    #[test]
    fn between_extracts_the_middle() {
        let p = between(char('('), digit_char().many(), char(')'));
        let (digits, remaining) = p.parse("(123)x").unwrap();
        assert_eq!(digits, vec!['1', '2', '3']);
        assert_eq!(remaining, "x");
    }

    #[test]
    fn sep_by_allows_empty() {
        let p = sep_by(digit_char(), char(','));
        assert_eq!(p.parse("abc"), Ok((Vec::new(), "abc")));
    }

    #[test]
    fn sep_by1_requires_one() {
        let p = sep_by1(digit_char(), char(','));
        assert!(p.parse("abc").is_err());
        assert_eq!(p.parse("1,2,3"), Ok((vec!['1', '2', '3'], "")));
    }

    #[test]
    fn assemble_concatenates_strings() {
        use crate::text::string;
        let p = assemble(vec![string("foo"), string("bar")]);
        assert_eq!(p.parse("foobar!"), Ok(("foobar".to_string(), "!")));
    }

    #[test]
    fn assemble_panics_on_empty_list() {
        let result = std::panic::catch_unwind(|| {
            assemble::<&str, String, crate::text::String_>(Vec::new())
        });
        assert!(result.is_err());
    }

    #[test]
    fn collect_wraps_each_output() {
        let p = collect(vec![digit_char(), digit_char()]);
        assert_eq!(p.parse("12x"), Ok((vec!['1', '2'], "x")));
    }

    #[test]
    fn monoidal_optional_falls_back_to_identity() {
        let p = optional(digit_char().map(|c| c.to_string()));
        assert_eq!(p.parse("abc"), Ok((String::new(), "abc")));
        assert_eq!(p.parse("5x"), Ok(("5".to_string(), "x")));
    }

    #[test]
    fn at_least_one_concatenates_via_monoid() {
        let p = at_least_one(digit_char().map(|c| c.to_string()));
        assert_eq!(p.parse("123x"), Ok(("123".to_string(), "x")));
        assert!(p.parse("x").is_err());
    }

    #[test]
    fn repeat_zero_is_identity() {
        let p = repeat(0, digit_char().map(|c| c.to_string()));
        assert_eq!(p.parse("abc"), Ok((String::new(), "abc")));
    }

    #[test]
    fn repeat_n_concatenates_exactly_n() {
        let p = repeat(3, digit_char().map(|c| c.to_string()));
        assert_eq!(p.parse("123x"), Ok(("123".to_string(), "x")));
        assert!(p.parse("12x").is_err());
    }

    #[test]
    fn repeat_list_collects_exactly_n() {
        let p = repeat_list(3, digit_char());
        assert_eq!(p.parse("123x"), Ok((vec!['1', '2', '3'], "x")));
    }

    #[test]
    fn not_followed_by_free_function_never_consumes() {
        let p = not_followed_by(char('b'));
        assert_eq!(p.parse("ac"), Ok((String::new(), "ac")));
        assert!(p.parse("bc").is_err());
    }

    #[test]
    fn choice_aggregates_errors_when_all_fail() {
        let p = choice(vec![char('a'), char('b')]);
        let err = p.parse("xyz").unwrap_err();
        assert_eq!(err.expected_message(), "char(a) or char(b)");
    }

    #[test]
    fn choice_of_zero_alternatives_reduces_to_failure() {
        let p: Choice<&str, char, Token<&str>> = choice(Vec::new());
        let err = p.parse("xyz").unwrap_err();
        assert_eq!(err.expected_message(), "<failure>");
    }
}
