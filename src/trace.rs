//! Parser-level tracing, gated behind the `trace` Cargo feature so the
//! default build never links `tracing` or pays for the `Debug` bounds it
//! requires.

use crate::{Input, Parser};
use std::marker::PhantomData;

/// Wraps a parser with `tracing::trace!` events on entry and exit. Attach
/// via [`crate::Parser::trace`].
pub struct Trace<P, T> {
    pub(crate) parser: P,
    pub(crate) name: String,
    pub(crate) _phantom: PhantomData<T>,
}

impl<I, T, P> Parser<I, T> for Trace<P, T>
where
    I: Input + std::fmt::Debug,
    T: std::fmt::Debug,
    P: Parser<I, T>,
{
    fn parse(&self, input: I) -> crate::ParseResult<I, T> {
        tracing::trace!(parser = %self.name, input = ?input, "entering");
        let result = self.parser.parse(input);
        match &result {
            Ok((output, remaining)) => {
                tracing::trace!(parser = %self.name, output = ?output, remaining = ?remaining, "succeeded");
            }
            Err(error) => {
                tracing::trace!(parser = %self.name, error = ?error, "failed");
            }
        }
        result
    }
}
