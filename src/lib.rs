//! A parser combinator library inspired by Parsec and Haskell's parser combinators.
//!
//! This library provides a functional approach to parsing with support for general
//! input stream types, not just text. You can parse HTML DOM, JSON structures, or
//! any type that implements the required iterator traits.

pub mod combinators;
pub mod error;
pub mod input;
pub mod parser;
pub mod predicate;
pub mod recursive;
pub mod text;
#[cfg(feature = "trace")]
pub mod trace;

pub use combinators::*;
pub use error::{ParseError, ParseResult};
pub use input::{Input, Sliceable};
pub use parser::{Fail, Monoidal, Optional, OutputMonoid, Parser, Pure, fail, failure, pure};
pub use recursive::{Recursive, recursive};
pub use text::*;
#[cfg(feature = "trace")]
pub use trace::Trace;