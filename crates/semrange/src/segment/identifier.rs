//! Prerelease and build identifiers

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

use super::{is_digits, write_joined, OrderedSegment};
use crate::SemverError;

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z0-9-]+$").unwrap();
}

/// One element of a prerelease or build segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A digit-only identifier, stored as its integer value
    Numeric(u64),
    /// Any other `[A-Za-z0-9-]+` identifier
    AlphaNumeric(String),
}

impl Identifier {
    /// Sanitize a raw identifier: digits become integers, `[A-Za-z0-9-]+`
    /// stays a string, anything else is rejected.
    pub fn parse(value: &str) -> Result<Self, SemverError> {
        if is_digits(value) {
            return value
                .parse()
                .map(Identifier::Numeric)
                .map_err(|_| SemverError::InvalidIdentifier(value.to_string()));
        }
        if IDENTIFIER_RE.is_match(value) {
            return Ok(Identifier::AlphaNumeric(value.to_string()));
        }
        Err(SemverError::InvalidIdentifier(value.to_string()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => Some(*n),
            Identifier::AlphaNumeric(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Identifier::Numeric(_) => None,
            Identifier::AlphaNumeric(s) => Some(s),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
            // Numeric identifiers always have lower precedence
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Numeric(value)
    }
}

/// A dot-separated list of identifiers, used for prerelease and build data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IdentifierSegment {
    elements: Vec<Identifier>,
}

impl IdentifierSegment {
    /// Create an empty segment
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dot-separated identifier list. The empty string is the empty segment.
    pub fn parse(segment: &str) -> Result<Self, SemverError> {
        if segment.is_empty() {
            return Ok(Self::new());
        }
        Self::from_elements(segment.split('.'))
    }

    /// Build a segment from raw element strings, sanitizing each of them.
    pub fn from_elements<I, S>(elements: I) -> Result<Self, SemverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let elements = elements
            .into_iter()
            .map(|e| Identifier::parse(e.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(IdentifierSegment { elements })
    }

    /// Append an element
    pub fn push(&mut self, value: &str) -> Result<(), SemverError> {
        self.elements.push(Identifier::parse(value)?);
        Ok(())
    }

    /// Replace the element at `index`, or append when `index` is one past the end.
    pub fn set(&mut self, index: usize, value: &str) -> Result<(), SemverError> {
        let identifier = Identifier::parse(value)?;
        match index.cmp(&self.elements.len()) {
            Ordering::Less => self.elements[index] = identifier,
            Ordering::Equal => self.elements.push(identifier),
            Ordering::Greater => return Err(SemverError::IndexOutOfRange(index)),
        }
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Option<Identifier> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.elements.iter()
    }
}

impl OrderedSegment for IdentifierSegment {
    type Element = Identifier;

    fn elements(&self) -> &[Identifier] {
        &self.elements
    }

    /// An empty segment outranks any non-empty one (a release sorts above
    /// its prereleases). Otherwise elements decide pairwise and the longer
    /// segment wins a tie.
    fn compare(&self, other: &Self) -> Ordering {
        match (self.elements.is_empty(), other.elements.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| a.cmp(b))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| self.elements.len().cmp(&other.elements.len())),
        }
    }
}

impl FromIterator<Identifier> for IdentifierSegment {
    fn from_iter<T: IntoIterator<Item = Identifier>>(iter: T) -> Self {
        IdentifierSegment {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IdentifierSegment {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for IdentifierSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.elements)
    }
}
