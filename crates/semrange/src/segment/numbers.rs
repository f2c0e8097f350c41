//! The numeric core of a version

use std::cmp::Ordering;
use std::fmt;

use super::{is_digits, write_joined, OrderedSegment};
use crate::SemverError;

/// Dot-separated non-negative integers (`major.minor.patch`, possibly longer
/// when parsed loosely).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumbersSegment {
    elements: Vec<u64>,
}

impl NumbersSegment {
    /// Parse dot-separated digit groups. Every group must be non-empty digits.
    pub fn parse(segment: &str) -> Result<Self, SemverError> {
        let elements = segment
            .split('.')
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NumbersSegment { elements })
    }

    pub fn from_elements(elements: Vec<u64>) -> Self {
        NumbersSegment { elements }
    }

    /// Zero-pad to at least `len` elements
    pub fn padded(mut self, len: usize) -> Self {
        if self.elements.len() < len {
            self.elements.resize(len, 0);
        }
        self
    }

    /// A copy with the element at `index` incremented and every later element reset to zero.
    pub fn increment(&self, index: usize) -> Result<Self, SemverError> {
        let element = self
            .elements
            .get(index)
            .ok_or(SemverError::IndexOutOfRange(index))?;
        let incremented = element.checked_add(1).ok_or_else(|| SemverError::NumberOverflow {
            segment: self.to_string(),
            index,
        })?;
        let mut elements = self.elements.clone();
        elements[index] = incremented;
        for element in elements.iter_mut().skip(index + 1) {
            *element = 0;
        }
        Ok(NumbersSegment { elements })
    }

    /// The elements without trailing zeros; two segments are order-equal iff these match.
    pub fn significant(&self) -> &[u64] {
        let end = self
            .elements
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |i| i + 1);
        &self.elements[..end]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.elements.iter()
    }
}

impl Default for NumbersSegment {
    fn default() -> Self {
        NumbersSegment {
            elements: vec![0, 0, 1],
        }
    }
}

impl OrderedSegment for NumbersSegment {
    type Element = u64;

    fn elements(&self) -> &[u64] {
        &self.elements
    }

    /// Element-wise over the longer of the two, the shorter one zero-padded.
    fn compare(&self, other: &Self) -> Ordering {
        let len = self.elements.len().max(other.elements.len());
        (0..len)
            .map(|i| {
                let a = self.elements.get(i).copied().unwrap_or(0);
                let b = other.elements.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for NumbersSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.elements)
    }
}

pub(crate) fn parse_number(value: &str) -> Result<u64, SemverError> {
    if !is_digits(value) {
        return Err(SemverError::InvalidNumber(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| SemverError::InvalidNumber(value.to_string()))
}
