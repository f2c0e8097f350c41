//! Dot-separated version segments
//!
//! A version is made of three segments: the numeric core, the prerelease
//! identifiers and the build identifiers. They share indexing, rendering and
//! ordering through [`OrderedSegment`], while each type keeps its own element
//! sanitation and comparison rules.

mod identifier;
mod numbers;

pub use identifier::{Identifier, IdentifierSegment};
pub use numbers::NumbersSegment;
pub(crate) use numbers::parse_number;

use std::cmp::Ordering;
use std::fmt;

/// Shared behaviour of the numeric core and identifier segments.
pub trait OrderedSegment: fmt::Display {
    type Element: fmt::Display;

    /// The sanitized elements of this segment, in order.
    fn elements(&self) -> &[Self::Element];

    /// Precedence of this segment relative to another of the same kind.
    fn compare(&self, other: &Self) -> Ordering;

    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.elements().get(index)
    }

    fn len(&self) -> usize {
        self.elements().len()
    }

    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}

/// Renders elements joined by dots.
pub(crate) fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{}", element)?;
    }
    Ok(())
}

/// True for a non-empty run of ASCII digits.
pub(crate) fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
