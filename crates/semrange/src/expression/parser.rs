//! Range expression parsing
//!
//! A range is a `||`-separated list of disjuncts. Each disjunct is either a
//! hyphen range `A - B` or a whitespace-separated list of simple constraints
//! like `>=1.2.3`, `^1.2`, `~1.2.3-beta` or `1.x`.

use lazy_static::lazy_static;
use regex::Regex;

use super::generator;
use super::{Operator, Primitive, RangeOperator};
use crate::version_parser::{VersionParser, CORE_LENGTH};
use crate::{SemverError, Version};

lazy_static! {
    // Pattern for splitting by OR (|| or |)
    static ref OR_CONSTRAINT_RE: Regex = Regex::new(r"\s*\|\|?\s*").unwrap();

    // A whole disjunct of the form `A - B`
    static ref HYPHEN_RE: Regex = Regex::new(r"^\s*(\S+)\s+-\s+(\S+)\s*$").unwrap();

    // Operator, partial version, optional prerelease qualifier
    static ref SIMPLE_CONSTRAINT_RE: Regex =
        Regex::new(r"(?i)^\s*(\^|~|!=|<>|[><]?=?)([\dx*.]+)(?:-([a-z0-9.\-]+))?\s*$").unwrap();

    // An operator on its own, as in `>= 1.2.3`
    static ref BARE_OPERATOR_RE: Regex = Regex::new(r"^(?:\^|~|!=|<>|[><]=?|=)$").unwrap();
}

/// Turns range strings into a disjunction of conjunctions of primitives
pub struct RangeParser;

impl RangeParser {
    /// Parse a complete range. An empty range, or an empty disjunct as in
    /// `1.2.3 ||`, is the same as `*`.
    pub fn parse_range_set(range: &str) -> Result<Vec<Vec<Primitive>>, SemverError> {
        OR_CONSTRAINT_RE
            .split(range.trim())
            .map(|disjunct| {
                if disjunct.trim().is_empty() {
                    return Ok(vec![Primitive::wildcard()]);
                }
                Self::parse_conjunction(disjunct)
            })
            .collect()
    }

    /// Parse one disjunct: a hyphen range or a list of simple constraints.
    pub fn parse_conjunction(disjunct: &str) -> Result<Vec<Primitive>, SemverError> {
        if let Some(caps) = HYPHEN_RE.captures(disjunct) {
            return Self::parse_hyphen(&caps[1], &caps[2]);
        }

        let mut primitives = Vec::new();
        for constraint in split_and_constraints(disjunct) {
            primitives.extend(Self::parse_simple(&constraint)?);
        }
        Ok(primitives)
    }

    /// `lower - upper`, inclusive on both ends. An upper bound with fewer
    /// than three numeric groups covers everything it is a prefix of, so
    /// `1.2 - 2.3` ends before `2.4.0`.
    pub fn parse_hyphen(lower: &str, upper: &str) -> Result<Vec<Primitive>, SemverError> {
        let lower = Version::parse(lower).map_err(|e| hyphen_error(lower, e))?;
        let parsed = VersionParser::parse_semver2(upper).map_err(|e| hyphen_error(upper, e))?;
        let explicit_numbers = parsed.explicit_numbers;
        let upper_version = Version::from_parsed(parsed, upper);

        let upper_primitive = if explicit_numbers < CORE_LENGTH {
            let ceiling = upper_version
                .increment(explicit_numbers - 1)
                .map_err(|e| hyphen_error(upper, e))?;
            Primitive::new(ceiling, Operator::LessThan, false)
        } else {
            Primitive::new(upper_version, Operator::GreaterThan, true)
        };

        Ok(vec![Primitive::new(lower, Operator::LessThan, true), upper_primitive])
    }

    /// Parse one simple constraint such as `>=1.2.3`, `^1.2` or `1.x`.
    pub fn parse_simple(constraint: &str) -> Result<Vec<Primitive>, SemverError> {
        let caps = SIMPLE_CONSTRAINT_RE
            .captures(constraint)
            .ok_or_else(|| SemverError::InvalidConstraint(constraint.trim().to_string()))?;

        let operator = RangeOperator::from_symbol(&caps[1])?;
        let primitives = generator::expand(operator, &caps[2], caps.get(3).map(|m| m.as_str()))?;

        log::trace!(
            "Expanded constraint \"{}\" into [{}]",
            constraint,
            primitives.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" ")
        );

        Ok(primitives)
    }
}

fn hyphen_error(bound: &str, source: SemverError) -> SemverError {
    SemverError::InvalidHyphenBound {
        bound: bound.to_string(),
        source: Box::new(source),
    }
}

/// Split a disjunct on whitespace, joining an operator that stands alone
/// to the token after it.
fn split_and_constraints(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut pending: Option<&str> = None;

    for token in input.split_whitespace() {
        match pending.take() {
            Some(operator) => parts.push(format!("{}{}", operator, token)),
            None if BARE_OPERATOR_RE.is_match(token) => pending = Some(token),
            None => parts.push(token.to_string()),
        }
    }
    // A trailing operator is left for the constraint grammar to reject
    if let Some(operator) = pending {
        parts.push(operator.to_string());
    }

    parts
}
