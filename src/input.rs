//! Input stream trait: a lightweight, read-only handle to a cursor over a sequence.
//!
//! An `Input` is never mutated in place. Advancing past an item returns a new,
//! independent handle (`uncons` returns `(item, rest)`); the original handle is
//! left untouched. For `&str`/`&[u8]` this is a pointer/length update, so slicing
//! never copies the underlying bytes.

/// Trait for types that can be used as input to parsers.
///
/// This allows parsing over any type that can provide iterator-like access,
/// not just strings or byte slices. Examples include HTML DOM trees, JSON values,
/// or custom data structures.
pub trait Input: Clone + PartialEq {
    /// The type of individual items in the input stream
    type Item: Clone + PartialEq + std::fmt::Debug;

    /// Returns the next item from the input stream, along with the remaining input.
    /// Returns None if the input is empty.
    fn uncons(&self) -> Option<(Self::Item, Self)>;

    /// Returns true if the input stream is empty
    fn is_empty(&self) -> bool {
        self.uncons().is_none()
    }

    /// Returns the length of remaining input, if known
    fn len(&self) -> Option<usize> {
        None
    }

    /// A short, human-readable description of the input, used to populate the
    /// `got` side of a parse failure (e.g. "EOF" or a short excerpt).
    fn describe(&self) -> String;
}

/// A narrower capability than [`Input`]: inputs that are contiguous slices
/// and can hand back a prefix of themselves as a value of the same type.
/// Backs [`crate::Parser::recognize`] - only `&str` and `&[u8]` implement
/// it, since `Vec<T>` has no borrowed-slice form to return without
/// allocating a fresh owned copy for every recognized span.
pub trait Sliceable: Input {
    /// Returns the first `len` items of this input as a value of the same
    /// type. `len` must not exceed `self.len()`.
    fn slice_prefix(&self, len: usize) -> Self;
}

impl<'a> Sliceable for &'a str {
    fn slice_prefix(&self, len: usize) -> Self {
        &self[..len]
    }
}

impl<'a> Sliceable for &'a [u8] {
    fn slice_prefix(&self, len: usize) -> Self {
        &self[..len]
    }
}

/// Implementation for string slices - the most common case
impl<'a> Input for &'a str {
    type Item = char;

    fn uncons(&self) -> Option<(Self::Item, Self)> {
        let mut chars = self.chars();
        chars.next().map(|c| (c, &self[c.len_utf8()..]))
    }

    fn len(&self) -> Option<usize> {
        Some(str::len(self))
    }

    fn describe(&self) -> String {
        if self.is_empty() {
            "EOF".to_string()
        } else {
            let excerpt: String = self.chars().take(16).collect();
            format!("{excerpt:?}")
        }
    }
}

/// Implementation for byte slices
impl<'a> Input for &'a [u8] {
    type Item = u8;

    fn uncons(&self) -> Option<(Self::Item, Self)> {
        if self.is_empty() {
            None
        } else {
            Some((self[0], &self[1..]))
        }
    }

    fn len(&self) -> Option<usize> {
        Some(<[u8]>::len(self))
    }

    fn describe(&self) -> String {
        if self.is_empty() {
            "EOF".to_string()
        } else {
            let n = self.len().min(16);
            format!("{:?}", &self[..n])
        }
    }
}

/// Implementation for Vecs
impl<T: Clone + PartialEq + std::fmt::Debug> Input for Vec<T> {
    type Item = T;

    fn uncons(&self) -> Option<(Self::Item, Self)> {
        if self.is_empty() {
            None
        } else {
            Some((self[0].clone(), self[1..].to_vec()))
        }
    }

    fn len(&self) -> Option<usize> {
        Some(Vec::len(self))
    }

    fn describe(&self) -> String {
        if self.is_empty() {
            "EOF".to_string()
        } else {
            let n = self.len().min(16);
            format!("{:?}", &self[..n])
        }
    }
}
