//! Core `Parser` trait and its Applicative/Monadic/Alternative combinators.
//!
//! A `Parser<I, T>` is realized as a trait rather than a boxed closure: every
//! combinator below (`Map`, `And`, `Or`, ...) is its own small struct
//! implementing `Parser<I, T>`, so a composition tree is fully monomorphized
//! and carries no dynamic dispatch unless a caller explicitly reaches for
//! [`crate::recursive`]. This mirrors the zero-cost combinator style used
//! throughout this corpus.
//!
//! Parsers are immutable and referentially transparent modulo their `input`
//! argument: running the same parser on the same input twice always
//! produces the same result, and nothing here holds interior mutable state.

use crate::{Input, ParseError, ParseResult};
use std::marker::PhantomData;

/// A parser that consumes input of type `I` and produces a value of type `T`.
///
/// Every combinator method returns a new `Parser`; none of them mutate an
/// existing parser.
pub trait Parser<I: Input, T> {
    /// Run the parser on the given input. Never panics on a rejected input;
    /// rejection is reported as `Err(ParseError)`.
    fn parse(&self, input: I) -> ParseResult<I, T>;

    /// Replaces the `expected` message of any failure produced by this
    /// parser with `name`. Success is unchanged. Labels nest: if a labelled
    /// parser is itself relabelled by an outer `label`, only the outermost
    /// label is observed by the caller on failure.
    fn label(self, name: impl Into<String>) -> Label<Self, T>
    where
        Self: Sized,
    {
        Label {
            parser: self,
            name: name.into(),
            _phantom: PhantomData,
        }
    }

    /// Applicative map: transform the result of a successful parse.
    fn map<U, F>(self, f: F) -> Map<Self, F, T, U>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        Map {
            parser: self,
            f,
            _phantom: PhantomData,
        }
    }

    /// Attaches additional context to any failure from this parser, without
    /// discarding the inner error (unlike `label`, which replaces it).
    fn map_err_context(self, context: impl Into<String>) -> MapErrContext<Self, T>
    where
        Self: Sized,
    {
        MapErrContext {
            parser: self,
            context: context.into(),
            _phantom: PhantomData,
        }
    }

    /// Applicative sequence: parse two things in sequence, keeping both results.
    fn and<U, P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Parser<I, U>,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// Parse this, then that, keeping only the result of this.
    /// Realizes the core's `keepFirst`/`thenIgnore` operation.
    fn skip<U, P>(self, other: P) -> Skip<Self, P, T, U>
    where
        Self: Sized,
        P: Parser<I, U>,
    {
        Skip {
            left: self,
            right: other,
            _phantom: PhantomData,
        }
    }

    /// Alias for [`Parser::skip`], named to match the core vocabulary's
    /// `thenIgnore`.
    fn then_ignore<U, P>(self, other: P) -> Skip<Self, P, T, U>
    where
        Self: Sized,
        P: Parser<I, U>,
    {
        self.skip(other)
    }

    /// Parse that, then this, keeping only the result of this. Realizes the
    /// core's `keepSecond`/`sequence` operation when called as
    /// `second.preceded_by(first)`.
    fn preceded_by<U, P>(self, other: P) -> PrecededBy<P, Self, T, U>
    where
        Self: Sized,
        P: Parser<I, U>,
    {
        PrecededBy {
            first: other,
            second: self,
            _phantom: PhantomData,
        }
    }

    /// Monadic bind: parse this, then use the result to determine the next parser.
    fn bind<U, F, P>(self, f: F) -> Bind<Self, F, T, U>
    where
        Self: Sized,
        F: Fn(T) -> P,
        P: Parser<I, U>,
    {
        Bind {
            parser: self,
            f,
            _phantom: PhantomData,
        }
    }

    /// Alternative: try this parser, if it fails try the other, against the
    /// ORIGINAL input (full backtracking - there is no committed choice in
    /// this core).
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Parser<I, T>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    /// On failure, succeeds with the output monoid's identity element
    /// instead of propagating the failure; never consumes input on the
    /// failing branch. This is the core's `optional`: the method form shares
    /// the exact monoidal-identity contract of the free function
    /// ([`crate::combinators::optional`]) - unlike `notFollowedBy`, the spec
    /// does not differentiate method vs. free-function behaviour here.
    fn optional(self) -> Monoidal<Self>
    where
        Self: Sized,
        T: OutputMonoid + Clone,
    {
        Monoidal { parser: self }
    }

    /// Make this parser optional, Rust-idiomatic `Option`-returning form:
    /// `Some(result)` on success, `None` on failure. Distinct from
    /// [`Parser::optional`], which returns `T` itself via the output
    /// monoid's identity element rather than wrapping it in `Option`.
    fn maybe(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional { parser: self }
    }

    /// Parse zero or more occurrences, collecting into a `Vec`.
    fn many(self) -> Many<Self>
    where
        Self: Sized,
        T: Clone,
    {
        Many { parser: self }
    }

    /// Parse one or more occurrences, collecting into a `Vec`.
    fn many1(self) -> Many1<Self>
    where
        Self: Sized,
        T: Clone,
    {
        Many1 { parser: self }
    }

    /// Fold over zero or more occurrences with an accumulator.
    fn fold_many0<A, F>(self, init: A, f: F) -> FoldMany0<Self, A, F, T>
    where
        Self: Sized,
        F: FnMut(A, T) -> A,
    {
        FoldMany0 {
            parser: self,
            init,
            f,
            _phantom: PhantomData,
        }
    }

    /// Fold over one or more occurrences with an accumulator.
    fn fold_many1<A, F>(self, init: A, f: F) -> FoldMany1<Self, A, F, T>
    where
        Self: Sized,
        F: FnMut(A, T) -> A,
    {
        FoldMany1 {
            parser: self,
            init,
            f,
            _phantom: PhantomData,
        }
    }

    /// Combines two successful outputs via the output monoid (string
    /// concatenation, or element-wise list concatenation). Fails with
    /// whichever side fails first.
    fn append<P>(self, other: P) -> Append<Self, P, T>
    where
        Self: Sized,
        P: Parser<I, T>,
        T: OutputMonoid,
    {
        Append {
            left: self,
            right: other,
            _phantom: PhantomData,
        }
    }

    /// Where this parser's output is a unary function, runs this then
    /// `arg`, then applies the parsed function to the parsed argument.
    fn apply<U, V, P>(self, arg: P) -> Apply<Self, P, T, U, V>
    where
        Self: Sized,
        T: Fn(U) -> V,
        P: Parser<I, U>,
    {
        Apply {
            func: self,
            arg,
            _phantom: PhantomData,
        }
    }

    /// Succeeds with this parser's output iff, after consuming this, `other`
    /// would fail at the new remainder. Never consumes what `other` would
    /// match.
    fn not_followed_by<U, P>(self, other: P) -> NotFollowedByKeep<Self, P, T, U>
    where
        Self: Sized,
        P: Parser<I, U>,
    {
        NotFollowedByKeep {
            parser: self,
            lookahead: other,
            _phantom: PhantomData,
        }
    }

    /// Returns the consumed input slice instead of this parser's output.
    /// Only available for inputs that support contiguous slicing (`&str`,
    /// `&[u8]`).
    fn recognize(self) -> Recognize<Self, T>
    where
        Self: Sized,
        I: crate::input::Sliceable,
    {
        Recognize {
            parser: self,
            _phantom: PhantomData,
        }
    }

    /// Emits `tracing::trace!` events on entry/exit of this parser, behind
    /// the `trace` feature so the default build pays nothing for it.
    #[cfg(feature = "trace")]
    fn trace(self, name: impl Into<String>) -> crate::trace::Trace<Self, T>
    where
        Self: Sized,
        I: std::fmt::Debug,
        T: std::fmt::Debug,
    {
        crate::trace::Trace {
            parser: self,
            name: name.into(),
            _phantom: PhantomData,
        }
    }
}

/// The monoid each `append`/monoidal-`optional` output type must implement:
/// an identity element and an associative combination. Implemented here for
/// `String` (concatenation) and `Vec<T>` (element-wise concatenation) - the
/// two output shapes this core's combinators are defined over.
///
/// This statically resolves the open question of how `append`/`optional`
/// should handle outputs that are "neither string nor list": such an output
/// simply does not implement `OutputMonoid`, so a mismatched use is a
/// compile error rather than a `IncompatibleAppend` runtime failure. See
/// `DESIGN.md` for the rationale.
pub trait OutputMonoid: Sized {
    /// The identity element: appending it to any `x` yields `x`.
    fn identity() -> Self;
    /// Associative combination of `self` and `other`.
    fn append(self, other: Self) -> Self;
}

impl OutputMonoid for String {
    fn identity() -> Self {
        String::new()
    }

    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> OutputMonoid for Vec<T> {
    fn identity() -> Self {
        Vec::new()
    }

    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

// ---------------------------------------------------------------------
// Applicative combinators
// ---------------------------------------------------------------------

/// Label combinator - rewrites the `expected` side of a failure.
pub struct Label<P, T> {
    parser: P,
    name: String,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, T> for Label<P, T>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        self.parser
            .parse(input)
            .map_err(|e| e.relabel(self.name.clone()))
    }
}

/// Map combinator - transforms parser output.
pub struct Map<P, F, T, U> {
    parser: P,
    f: F,
    _phantom: PhantomData<(T, U)>,
}

impl<I, T, U, P, F> Parser<I, U> for Map<P, F, T, U>
where
    I: Input,
    P: Parser<I, T>,
    F: Fn(T) -> U,
{
    fn parse(&self, input: I) -> ParseResult<I, U> {
        self.parser
            .parse(input)
            .map(|(result, remaining)| ((self.f)(result), remaining))
    }
}

/// Attaches context to any failure produced downstream, preserving the
/// original `expected`/`got` as a suffix.
pub struct MapErrContext<P, T> {
    parser: P,
    context: String,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, T> for MapErrContext<P, T>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        self.parser
            .parse(input)
            .map_err(|e| e.with_context(self.context.clone()))
    }
}

/// And combinator - parses two things in sequence, keeping both.
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<I, T, U, L, R> Parser<I, (T, U)> for And<L, R>
where
    I: Input,
    L: Parser<I, T>,
    R: Parser<I, U>,
{
    fn parse(&self, input: I) -> ParseResult<I, (T, U)> {
        let (left_result, input1) = self.left.parse(input)?;
        let (right_result, input2) = self.right.parse(input1)?;
        Ok(((left_result, right_result), input2))
    }
}

/// Skip combinator - parse left then right, keep only left result.
pub struct Skip<L, R, T, U> {
    left: L,
    right: R,
    _phantom: PhantomData<(T, U)>,
}

impl<I, T, U, L, R> Parser<I, T> for Skip<L, R, T, U>
where
    I: Input,
    L: Parser<I, T>,
    R: Parser<I, U>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let (left_result, input1) = self.left.parse(input)?;
        let (_, input2) = self.right.parse(input1)?;
        Ok((left_result, input2))
    }
}

/// PrecededBy combinator - parse first then second, keep only second result.
pub struct PrecededBy<F, S, T, U> {
    first: F,
    second: S,
    _phantom: PhantomData<(T, U)>,
}

impl<I, T, U, F, S> Parser<I, T> for PrecededBy<F, S, T, U>
where
    I: Input,
    F: Parser<I, U>,
    S: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let (_, input1) = self.first.parse(input)?;
        self.second.parse(input1)
    }
}

// ---------------------------------------------------------------------
// Monadic combinators
// ---------------------------------------------------------------------

/// Bind combinator - monadic sequencing.
pub struct Bind<P, F, T, U> {
    parser: P,
    f: F,
    _phantom: PhantomData<(T, U)>,
}

impl<I, T, U, P, F, Q> Parser<I, U> for Bind<P, F, T, U>
where
    I: Input,
    P: Parser<I, T>,
    F: Fn(T) -> Q,
    Q: Parser<I, U>,
{
    fn parse(&self, input: I) -> ParseResult<I, U> {
        let (result, input1) = self.parser.parse(input)?;
        (self.f)(result).parse(input1)
    }
}

// ---------------------------------------------------------------------
// Choice combinators
// ---------------------------------------------------------------------

/// Or combinator - try left, if it fails try right, both against the
/// original input (no consumption is observable from a failed `left`).
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<I, T, L, R> Parser<I, T> for Or<L, R>
where
    I: Input,
    L: Parser<I, T>,
    R: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        match self.left.parse(input.clone()) {
            Ok(result) => Ok(result),
            Err(left_err) => match self.right.parse(input) {
                Ok(result) => Ok(result),
                Err(right_err) => Err(ParseError::many(vec![left_err, right_err])),
            },
        }
    }
}

/// Optional combinator - makes a parser optional, `Option<T>`-returning.
/// Backs [`Parser::maybe`].
pub struct Optional<P> {
    parser: P,
}

impl<I, T, P> Parser<I, Option<T>> for Optional<P>
where
    I: Input,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, Option<T>> {
        match self.parser.parse(input.clone()) {
            Ok((result, remaining)) => Ok((Some(result), remaining)),
            Err(_) => Ok((None, input)),
        }
    }
}

/// Monoidal combinator - backs [`Parser::optional`]: on failure, falls back
/// to the output monoid's identity element rather than wrapping in `Option`.
pub struct Monoidal<P> {
    parser: P,
}

impl<I, T, P> Parser<I, T> for Monoidal<P>
where
    I: Input,
    P: Parser<I, T>,
    T: OutputMonoid + Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        match self.parser.parse(input.clone()) {
            Ok(result) => Ok(result),
            Err(_) => Ok((T::identity(), input)),
        }
    }
}

// ---------------------------------------------------------------------
// Repetition combinators
// ---------------------------------------------------------------------

/// Generic fold over zero or more parser repetitions.
///
/// Implemented iteratively (not via recursion) so `many`/`fold_many0` stay
/// stack-safe on long inputs, and detects a non-progressing body (a parser
/// that succeeds without consuming input) by stopping rather than looping
/// forever - this answers the core's "NonProgressing" open question in
/// favor of detection over undefined behaviour.
fn fold_many0<I, T, P, A, F>(parser: &P, init: A, mut f: F, mut input: I) -> ParseResult<I, A>
where
    I: Input,
    P: Parser<I, T>,
    F: FnMut(A, T) -> A,
{
    let mut acc = init;
    loop {
        let before = input.clone();
        match parser.parse(input.clone()) {
            Ok((result, remaining)) => {
                if remaining == before {
                    input = remaining;
                    break;
                }
                acc = f(acc, result);
                input = remaining;
            }
            Err(_) => break,
        }
    }
    Ok((acc, input))
}

/// Generic fold over one or more parser repetitions.
fn fold_many1<I, T, P, A, F>(parser: &P, init: A, mut f: F, input: I) -> ParseResult<I, A>
where
    I: Input,
    P: Parser<I, T>,
    F: FnMut(A, T) -> A,
{
    let (first, remaining) = parser.parse(input)?;
    let acc = f(init, first);
    fold_many0(parser, acc, f, remaining)
}

/// Many combinator - zero or more occurrences.
pub struct Many<P> {
    parser: P,
}

impl<I, T, P> Parser<I, Vec<T>> for Many<P>
where
    I: Input,
    P: Parser<I, T>,
    T: Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, Vec<T>> {
        fold_many0(
            &self.parser,
            Vec::new(),
            |mut acc, item| {
                acc.push(item);
                acc
            },
            input,
        )
    }
}

/// Many1 combinator - one or more occurrences.
pub struct Many1<P> {
    parser: P,
}

impl<I, T, P> Parser<I, Vec<T>> for Many1<P>
where
    I: Input,
    P: Parser<I, T>,
    T: Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, Vec<T>> {
        fold_many1(
            &self.parser,
            Vec::new(),
            |mut acc, item| {
                acc.push(item);
                acc
            },
            input,
        )
    }
}

/// FoldMany0 combinator - fold over zero or more occurrences.
pub struct FoldMany0<P, A, F, T> {
    parser: P,
    init: A,
    f: F,
    _phantom: PhantomData<T>,
}

impl<I, T, A, P, F> Parser<I, A> for FoldMany0<P, A, F, T>
where
    I: Input,
    P: Parser<I, T>,
    A: Clone,
    F: FnMut(A, T) -> A + Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, A> {
        fold_many0(&self.parser, self.init.clone(), self.f.clone(), input)
    }
}

/// FoldMany1 combinator - fold over one or more occurrences.
pub struct FoldMany1<P, A, F, T> {
    parser: P,
    init: A,
    f: F,
    _phantom: PhantomData<T>,
}

impl<I, T, A, P, F> Parser<I, A> for FoldMany1<P, A, F, T>
where
    I: Input,
    P: Parser<I, T>,
    A: Clone,
    F: FnMut(A, T) -> A + Clone,
{
    fn parse(&self, input: I) -> ParseResult<I, A> {
        fold_many1(&self.parser, self.init.clone(), self.f.clone(), input)
    }
}

// ---------------------------------------------------------------------
// Monoidal / applicative extras
// ---------------------------------------------------------------------

/// Append combinator - monoidal concatenation of two outputs.
pub struct Append<L, R, T> {
    left: L,
    right: R,
    _phantom: PhantomData<T>,
}

impl<I, T, L, R> Parser<I, T> for Append<L, R, T>
where
    I: Input,
    L: Parser<I, T>,
    R: Parser<I, T>,
    T: OutputMonoid,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let (left_out, input1) = self.left.parse(input)?;
        let (right_out, input2) = self.right.parse(input1)?;
        Ok((left_out.append(right_out), input2))
    }
}

/// Apply combinator - applies a parsed unary function to a parsed argument.
pub struct Apply<F, P, T, U, V> {
    func: F,
    arg: P,
    _phantom: PhantomData<(T, U, V)>,
}

impl<I, T, U, V, F, P> Parser<I, V> for Apply<F, P, T, U, V>
where
    I: Input,
    F: Parser<I, T>,
    T: Fn(U) -> V,
    P: Parser<I, U>,
{
    fn parse(&self, input: I) -> ParseResult<I, V> {
        let (f, input1) = self.func.parse(input)?;
        let (arg, input2) = self.arg.parse(input1)?;
        Ok((f(arg), input2))
    }
}

/// NotFollowedBy (method form) - keeps this parser's output, but only
/// succeeds if `lookahead` would fail at the resulting remainder. Never
/// consumes what `lookahead` would have matched.
pub struct NotFollowedByKeep<P, Q, T, U> {
    parser: P,
    lookahead: Q,
    _phantom: PhantomData<(T, U)>,
}

impl<I, T, U, P, Q> Parser<I, T> for NotFollowedByKeep<P, Q, T, U>
where
    I: Input,
    P: Parser<I, T>,
    Q: Parser<I, U>,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let (out, remaining) = self.parser.parse(input)?;
        match self.lookahead.parse(remaining.clone()) {
            Ok(_) => Err(ParseError::expected(
                "notFollowedBy",
                Some(remaining.describe()),
                remaining,
            )),
            Err(_) => Ok((out, remaining)),
        }
    }
}

/// Recognize combinator - returns the consumed input slice instead of the
/// wrapped parser's output.
pub struct Recognize<P, T> {
    parser: P,
    _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, I> for Recognize<P, T>
where
    I: crate::input::Sliceable,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> ParseResult<I, I> {
        let original = input.clone();
        let before_len = input.len().expect("Sliceable inputs report a length");
        let (_, remaining) = self.parser.parse(input)?;
        let after_len = remaining.len().expect("Sliceable inputs report a length");
        let consumed = before_len - after_len;
        Ok((original.slice_prefix(consumed), remaining))
    }
}

/// Lifts a value into the parser context: always succeeds, consumes nothing.
pub fn pure<I: Input, T: Clone>(value: T) -> Pure<I, T> {
    Pure {
        value,
        _phantom: PhantomData,
    }
}

pub struct Pure<I, T> {
    value: T,
    _phantom: PhantomData<I>,
}

impl<I: Input, T: Clone> Parser<I, T> for Pure<I, T> {
    fn parse(&self, input: I) -> ParseResult<I, T> {
        Ok((self.value.clone(), input))
    }
}

/// Always fails with expected `"<failure>"`, regardless of input.
pub fn fail<I: Input, T>(message: impl Into<String>) -> Fail<I, T> {
    Fail {
        message: message.into(),
        _phantom: PhantomData,
    }
}

/// The core's zero-argument `failure()` primitive: always fails with the
/// fixed message `"<failure>"`. An alias of `fail("<failure>")`, provided
/// so callers following the primitive table literally don't have to supply
/// a message.
pub fn failure<I: Input, T>() -> Fail<I, T> {
    fail("<failure>")
}

pub struct Fail<I, T> {
    message: String,
    _phantom: PhantomData<(I, T)>,
}

impl<I: Input, T> Parser<I, T> for Fail<I, T> {
    fn parse(&self, input: I) -> ParseResult<I, T> {
        Err(ParseError::message(self.message.clone(), input))
    }
}

/// Apply a binary function to two parser results.
pub fn map2<I, P1, P2, T1, T2, R, F>(p1: P1, p2: P2, f: F) -> impl Parser<I, R>
where
    I: Input,
    P1: Parser<I, T1>,
    P2: Parser<I, T2>,
    F: Fn(T1, T2) -> R,
{
    p1.and(p2).map(move |(a, b)| f(a, b))
}

/// Apply a ternary function to three parser results.
pub fn map3<I, P1, P2, P3, T1, T2, T3, R, F>(p1: P1, p2: P2, p3: P3, f: F) -> impl Parser<I, R>
where
    I: Input,
    P1: Parser<I, T1>,
    P2: Parser<I, T2>,
    P3: Parser<I, T3>,
    F: Fn(T1, T2, T3) -> R,
{
    p1.and(p2).and(p3).map(move |((a, b), c)| f(a, b, c))
}

/// Parse two parsers and return their results as a tuple.
pub fn tuple2<I, P1, P2, T1, T2>(p1: P1, p2: P2) -> impl Parser<I, (T1, T2)>
where
    I: Input,
    P1: Parser<I, T1>,
    P2: Parser<I, T2>,
{
    p1.and(p2)
}

/// Parse three parsers and return their results as a tuple.
pub fn tuple3<I, P1, P2, P3, T1, T2, T3>(p1: P1, p2: P2, p3: P3) -> impl Parser<I, (T1, T2, T3)>
where
    I: Input,
    P1: Parser<I, T1>,
    P2: Parser<I, T2>,
    P3: Parser<I, T3>,
{
    p1.and(p2).and(p3).map(|((a, b), c)| (a, b, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{item, satisfy};
    use crate::text::{char, string};

    #[test]
    fn functor_identity() {
        let r1 = char('a').parse("abc");
        let r2 = char('a').map(|x| x).parse("abc");
        assert_eq!(r1, r2);
    }

    #[test]
    fn functor_composition() {
        let f = |c: char| c.to_ascii_uppercase();
        let g = move |c: char| format!("{c}{c}");
        let p1 = char('a').map(f).map(g.clone());
        let p2 = char('a').map(move |c| g(f(c)));
        assert_eq!(p1.parse("abc"), p2.parse("abc"));
    }

    #[test]
    fn monad_left_identity() {
        let f = |c: char| char(c);
        let r1 = pure::<&str, char>('x').bind(f).parse("xyz");
        let r2 = f('x').parse("xyz");
        assert_eq!(r1, r2);
    }

    #[test]
    fn monad_right_identity() {
        let r1 = char('a').bind(pure).parse("abc");
        let r2 = char('a').parse("abc");
        assert_eq!(r1, r2);
    }

    #[test]
    fn alternative_left_identity() {
        let r1 = fail::<&str, char>("nope").or(char('a')).parse("abc");
        let r2 = char('a').parse("abc");
        assert_eq!(r1, r2);
    }

    #[test]
    fn alternative_right_identity() {
        let r1 = char('a').or(fail::<&str, char>("nope")).parse("abc");
        let r2 = char('a').parse("abc");
        assert_eq!(r1, r2);
    }

    #[test]
    fn no_consumption_on_failure_of_or() {
        let result = char('z').or(char('a')).parse("abc");
        assert_eq!(result, Ok(('a', "bc")));
    }

    #[test]
    fn not_followed_by_zero_consumption() {
        assert!(item::<&str>()
            .not_followed_by(satisfy(|c: &char| *c == 'b'))
            .parse("ac")
            .is_ok());
        assert!(item::<&str>()
            .not_followed_by(satisfy(|c: &char| *c == 'b'))
            .parse("ab")
            .is_err());
    }

    #[test]
    fn label_preserves_success_and_rewrites_failure() {
        assert_eq!(
            char('a').label("identifier start").parse("abc"),
            Ok(('a', "bc"))
        );
        let err = char('a')
            .label("identifier start")
            .parse("xyz")
            .unwrap_err();
        assert_eq!(err.expected_message(), "identifier start");
    }

    #[test]
    fn maybe_is_always_a_success() {
        assert!(char('a').maybe().parse("xyz").is_ok());
        assert!(char('a').maybe().parse("abc").is_ok());
    }

    #[test]
    fn optional_falls_back_to_monoid_identity() {
        let p = string("a").optional();
        assert_eq!(p.parse("xyz"), Ok((String::new(), "xyz")));
        assert_eq!(p.parse("abc"), Ok(("a".to_string(), "bc")));
    }

    #[test]
    fn append_concatenates_strings() {
        let p = string("foo").append(string("bar"));
        assert_eq!(p.parse("foobarbaz"), Ok(("foobar".to_string(), "baz")));
    }

    #[test]
    fn apply_applies_parsed_function_to_parsed_argument() {
        let func = pure::<&str, _>(|n: u32| n * 2);
        let p = func.apply(crate::text::unsigned());
        assert_eq!(p.parse("21"), Ok((42, "")));
    }

    #[test]
    fn recognize_returns_consumed_slice() {
        let p = char('a').and(char('b')).recognize();
        assert_eq!(p.parse("abc"), Ok(("ab", "c")));
    }
}
