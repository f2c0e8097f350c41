//! `Range` - a disjunction of conjunctions of primitives

use std::fmt;
use std::str::FromStr;

use crate::expression::{Expression, Primitive, RangeParser};
use crate::{SemverError, Version};

/// A parsed range expression such as `^1.2.3 || >=2.5.0 <3`.
///
/// A version matches when every primitive of at least one disjunct matches.
#[derive(Debug, Clone)]
pub struct Range {
    original: String,
    elements: Vec<Vec<Primitive>>,
}

impl Range {
    /// Parse a range expression
    pub fn parse(range: &str) -> Result<Self, SemverError> {
        let elements = RangeParser::parse_range_set(range)?;
        let parsed = Range {
            original: range.to_string(),
            elements,
        };
        log::debug!("Parsed range \"{}\" as \"{}\"", range, parsed.normalized_string());
        Ok(parsed)
    }

    /// Build a range directly from disjuncts of primitives.
    pub fn from_elements(elements: Vec<Vec<Primitive>>) -> Result<Self, SemverError> {
        let mut range = Range {
            original: String::new(),
            elements,
        };
        if range.elements.is_empty() || range.elements.iter().any(|conjunct| conjunct.is_empty()) {
            return Err(SemverError::EmptyRangePart(range.normalized_string()));
        }
        range.original = range.normalized_string();
        Ok(range)
    }

    /// The disjuncts, each a list of primitives that must all match
    pub fn elements(&self) -> &[Vec<Primitive>] {
        &self.elements
    }

    /// The text this range was parsed from
    pub fn original_string(&self) -> &str {
        &self.original
    }

    /// Primitives joined by spaces, disjuncts joined by `" || "`
    pub fn normalized_string(&self) -> String {
        self.elements
            .iter()
            .map(|conjunct| {
                conjunct
                    .iter()
                    .map(|p| p.normalized_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" || ")
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.elements
            .iter()
            .any(|conjunct| conjunct.iter().all(|p| p.matches(version)))
    }
}

impl Expression for Range {
    fn matches(&self, version: &Version) -> bool {
        Range::matches(self, version)
    }

    fn normalized_string(&self) -> String {
        Range::normalized_string(self)
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Range {}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_string())
    }
}

impl FromStr for Range {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Range {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Range {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Range::parse(&s).map_err(serde::de::Error::custom)
    }
}
