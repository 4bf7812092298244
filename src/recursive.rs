//! Recursion cell: a one-shot mutable slot that lets a grammar refer to
//! itself before its body exists.
//!
//! Ownership of a recursive grammar would otherwise have to contain a cycle
//! (the body contains a reference to itself). Rather than lean on `Rc`
//! reference cycles directly, the cell stores its body behind a `RefCell`
//! and the parser tree threads through `Rc<dyn Parser<I, T>>` handles, so
//! tearing down the grammar just means dropping the outermost `Recursive`
//! handle - there is exactly one cycle, confined to this module, instead of
//! one per recursive use site.

use crate::{Input, ParseError, ParseResult, Parser};
use std::cell::RefCell;
use std::rc::Rc;

/// A forward-declared parser. Build with [`Recursive::new`] or the
/// [`recursive`] convenience function, then call [`Recursive::recurse`]
/// exactly once to install its body.
pub struct Recursive<I, T> {
    cell: Rc<RefCell<Option<Rc<dyn Parser<I, T>>>>>,
}

impl<I, T> Clone for Recursive<I, T> {
    fn clone(&self) -> Self {
        Recursive {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<I, T> Recursive<I, T>
where
    I: Input + 'static,
    T: 'static,
{
    /// Creates an unbound recursion cell. Running it before [`recurse`] is
    /// called fails with `expected "unbound recursion"`.
    ///
    /// [`recurse`]: Recursive::recurse
    pub fn new() -> Self {
        Recursive {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// Installs `body` as this cell's parser. Panics (`DoubleBind`) if
    /// called more than once on the same cell.
    pub fn recurse<P>(&self, body: P)
    where
        P: Parser<I, T> + 'static,
    {
        let mut slot = self.cell.borrow_mut();
        assert!(
            slot.is_none(),
            "DoubleBind: recurse() called twice on the same recursion cell"
        );
        *slot = Some(Rc::new(body));
    }
}

impl<I, T> Default for Recursive<I, T>
where
    I: Input + 'static,
    T: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T> Parser<I, T> for Recursive<I, T>
where
    I: Input,
{
    fn parse(&self, input: I) -> ParseResult<I, T> {
        let body = self.cell.borrow().clone();
        match body {
            Some(parser) => parser.parse(input),
            None => Err(ParseError::expected(
                "unbound recursion",
                Some(input.describe()),
                input,
            )),
        }
    }
}

/// Builds a self-referential parser in one step: `builder` receives a
/// clone of the cell (so it can close over itself to express recursive
/// calls) and must return the grammar's body, which is then installed.
///
/// ```
/// use parsica::{recursive, digit_char, between, char, Parser};
///
/// // expr := digit | '(' expr ')'
/// let expr = recursive(|expr| digit_char().or(between(char('('), expr, char(')'))));
///
/// assert_eq!(expr.parse("5"), Ok(('5', "")));
/// assert_eq!(expr.parse("((5))"), Ok(('5', "")));
/// assert!(expr.parse("((5)").is_err());
/// ```
pub fn recursive<I, T, P, F>(builder: F) -> Recursive<I, T>
where
    I: Input + 'static,
    T: 'static,
    P: Parser<I, T> + 'static,
    F: FnOnce(Recursive<I, T>) -> P,
{
    let cell = Recursive::new();
    let body = builder(cell.clone());
    cell.recurse(body);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{char, digit_char};

    #[test]
    fn unbound_recursion_fails() {
        let cell: Recursive<&str, char> = Recursive::new();
        let err = cell.parse("abc").unwrap_err();
        assert_eq!(err.expected_message(), "unbound recursion");
    }

    #[test]
    #[should_panic(expected = "DoubleBind")]
    fn recurse_twice_panics() {
        let cell: Recursive<&str, char> = Recursive::new();
        cell.recurse(char('a'));
        cell.recurse(char('b'));
    }

    #[test]
    fn recursive_grammar_parses_nested_parens() {
        // digit | '(' expr ')'
        let expr = recursive(|expr| {
            digit_char().or(crate::combinators::between(char('('), expr, char(')')))
        });

        assert_eq!(expr.parse("5"), Ok(('5', "")));
        assert_eq!(expr.parse("((5))"), Ok(('5', "")));
        assert!(expr.parse("((5)").is_err());
    }
}
