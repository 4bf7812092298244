//! Error types for the parser combinator library.
//!
//! A parse failure is always carried as the `Err` side of [`ParseResult`]; it
//! is never raised as a panic. The only things that panic are programmer
//! errors (malformed combinator arguments, double-binding a recursive
//! parser, misusing a recursion cell before it is defined in an unreachable
//! way) - those indicate a bug in the grammar under construction, not a
//! rejected input, and are not meant to be caught by the combinator algebra.

use std::fmt;

/// Result type used throughout the parser library: either a parsed value and
/// the remaining input, or a [`ParseError`] describing why parsing failed.
pub type ParseResult<I, T> = Result<(T, I), ParseError<I>>;

/// Error type representing parsing failures.
///
/// Every variant carries enough information to answer `expected()`/`got()`:
/// the most specific label in scope, and a short description of the
/// offending input (a character, or `"EOF"`).
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError<I> {
    /// Unexpected end of input.
    UnexpectedEof {
        /// The input at the point where more data was required.
        input: I,
    },
    /// Expected something but found something else.
    Expected {
        expected: String,
        found: Option<String>,
        input: I,
    },
    /// Custom error with a message, used by `fail()` and internal bookkeeping.
    Message { message: String, input: I },
    /// Multiple errors, produced by combinators that try several
    /// alternatives and all of them fail (`or`, `choice`, `any`).
    Many(Vec<ParseError<I>>),
}

impl<I> ParseError<I> {
    /// Create a new expected error.
    pub fn expected(
        expected: impl Into<String>,
        found: Option<impl Into<String>>,
        input: I,
    ) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            found: found.map(|f| f.into()),
            input,
        }
    }

    /// Create a new message error.
    pub fn message(message: impl Into<String>, input: I) -> Self {
        ParseError::Message {
            message: message.into(),
            input,
        }
    }

    /// Create a new "many errors" error, as produced by alternatives that
    /// all fail.
    pub fn many(errors: Vec<ParseError<I>>) -> Self {
        ParseError::Many(errors)
    }

    /// The most specific label in scope (the `expected` side of a failure).
    /// Empty for the rare case of an empty `Many`.
    pub fn expected_message(&self) -> String {
        match self {
            ParseError::UnexpectedEof { .. } => "more input".to_string(),
            ParseError::Expected { expected, .. } => expected.clone(),
            ParseError::Message { message, .. } => message.clone(),
            ParseError::Many(errors) => {
                let parts: Vec<String> = errors.iter().map(|e| e.expected_message()).collect();
                parts.join(" or ")
            }
        }
    }

    /// A short description of the offending input (the `got` side of a
    /// failure). Delegates to the first error for `Many`.
    pub fn got_message(&self) -> String
    where
        I: Clone,
    {
        match self {
            ParseError::UnexpectedEof { .. } => "EOF".to_string(),
            ParseError::Expected { found, .. } => found.clone().unwrap_or_default(),
            ParseError::Message { .. } => String::new(),
            ParseError::Many(errors) => errors
                .first()
                .map(|e| e.got_message())
                .unwrap_or_default(),
        }
    }

    /// A representative input position for this error: the position of the
    /// first error, recursing into `Many`. Used by `label` to rebuild a
    /// relabelled error without needing to know which branch is "correct".
    pub fn primary_input(&self) -> &I {
        match self {
            ParseError::UnexpectedEof { input }
            | ParseError::Expected { input, .. }
            | ParseError::Message { input, .. } => input,
            ParseError::Many(errors) => errors
                .first()
                .expect("ParseError::Many must not be empty")
                .primary_input(),
        }
    }

    /// Rewrites the `expected` side of this error to `label`, preserving the
    /// `got`/input side. This is the mechanism behind [`crate::Parser::label`]:
    /// labels replace *what* was expected, never *what was actually found*.
    pub fn relabel(self, label: impl Into<String>) -> Self
    where
        I: Clone,
    {
        let label = label.into();
        match self {
            ParseError::UnexpectedEof { input } => ParseError::Expected {
                expected: label,
                found: Some("EOF".to_string()),
                input,
            },
            ParseError::Expected { found, input, .. } => ParseError::Expected {
                expected: label,
                found,
                input,
            },
            ParseError::Message { input, .. } => ParseError::Expected {
                expected: label,
                found: None,
                input,
            },
            ParseError::Many(ref errors) => {
                let input = errors
                    .first()
                    .expect("ParseError::Many must not be empty")
                    .primary_input()
                    .clone();
                ParseError::Expected {
                    expected: label,
                    found: Some(self.got_message()),
                    input,
                }
            }
        }
    }

    /// Attaches additional context to this error without discarding it -
    /// used internally to narrate a combinator's position in the grammar
    /// (e.g. "while parsing the body of a repeat"). Unlike `relabel`, this
    /// appends rather than replaces.
    pub fn with_context(self, context: impl Into<String>) -> Self
    where
        I: Clone,
    {
        let context = context.into();
        let input = self.primary_input().clone();
        ParseError::Expected {
            expected: format!("{} ({})", context, self.expected_message()),
            found: Some(self.got_message()),
            input,
        }
    }
}

impl<I> fmt::Display for ParseError<I>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof { input } => {
                write!(f, "unexpected end of input at {input:?}")
            }
            ParseError::Expected {
                expected,
                found,
                input,
            } => {
                write!(f, "expected {expected}")?;
                if let Some(found) = found {
                    write!(f, ", found {found}")?;
                }
                write!(f, " at {input:?}")
            }
            ParseError::Message { message, input } => {
                write!(f, "{message} at {input:?}")
            }
            ParseError::Many(errors) => {
                write!(f, "multiple errors: ")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl<I> std::error::Error for ParseError<I> where I: fmt::Debug + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabel_preserves_found() {
        let err: ParseError<&str> = ParseError::expected("digit", Some("'a'"), "abc");
        let relabelled = err.relabel("number");
        assert_eq!(relabelled.expected_message(), "number");
        assert_eq!(relabelled.got_message(), "'a'");
    }

    #[test]
    fn relabel_eof_carries_eof_as_found() {
        let err: ParseError<&str> = ParseError::UnexpectedEof { input: "" };
        let relabelled = err.relabel("digit");
        assert_eq!(relabelled.expected_message(), "digit");
        assert_eq!(relabelled.got_message(), "EOF");
    }

    #[test]
    fn many_aggregates_expected_messages() {
        let err: ParseError<&str> = ParseError::many(vec![
            ParseError::expected("a", None::<String>, "x"),
            ParseError::expected("b", None::<String>, "x"),
        ]);
        assert_eq!(err.expected_message(), "a or b");
    }
}
