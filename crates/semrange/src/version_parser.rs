//! Version string parsing
//!
//! Two grammars are supported. The strict Semver2 grammar accepts an optional
//! `v`/`=` prefix, one to three numeric groups, an optional `-prerelease` and
//! an optional `+build`. The loose grammar splits on `.` and `-` and takes the
//! leading run of digit-only tokens as the numeric core.

use lazy_static::lazy_static;
use regex::Regex;

use crate::segment::{
    is_digits, parse_number, Identifier, IdentifierSegment, NumbersSegment, OrderedSegment,
};
use crate::SemverError;

/// Number of numeric groups in a canonical version
pub const CORE_LENGTH: usize = 3;

lazy_static! {
    static ref SEMVER2_RE: Regex =
        Regex::new(r"(?i)^[=v\s]*([\d.]+)(?:-([a-z0-9.\-]+))?(?:\+([a-z0-9.\-]+))?\s*$").unwrap();

    static ref LOOSE_SPLIT_RE: Regex = Regex::new(r"[.\-]").unwrap();
}

/// Which grammar produced a version, or which grammars a caller accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compliance {
    /// Strict Semantic Versioning 2.0 grammar only
    #[default]
    Semver2,
    /// Strict grammar first, loose grammar as a fallback
    Loose,
}

/// The three sections of a parsed version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub numbers: NumbersSegment,
    pub prerelease: IdentifierSegment,
    pub build: IdentifierSegment,
    pub compliance: Compliance,
    /// How many numeric groups the input actually spelled out, before padding
    pub explicit_numbers: usize,
}

/// Converts raw strings into version sections
pub struct VersionParser;

impl VersionParser {
    /// Try the strict grammar, then the loose one.
    ///
    /// On success the second element holds the errors of the grammars that
    /// were tried and rejected the input. When every grammar fails the
    /// strict error is returned, being the most descriptive.
    pub fn parse(version: &str) -> Result<(ParsedVersion, Vec<SemverError>), SemverError> {
        let strict_error = match Self::parse_semver2(version) {
            Ok(parsed) => return Ok((parsed, Vec::new())),
            Err(e) => e,
        };

        log::trace!("Strict parse of \"{}\" failed ({}), trying loose grammar", version, strict_error);

        match Self::parse_loose(version) {
            Ok(parsed) => Ok((parsed, vec![strict_error])),
            Err(loose_error) => {
                log::trace!("Loose parse of \"{}\" failed ({})", version, loose_error);
                Err(strict_error)
            }
        }
    }

    /// Parse using the grammars the given compliance level allows.
    pub fn parse_with(version: &str, compliance: Compliance) -> Result<ParsedVersion, SemverError> {
        match compliance {
            Compliance::Semver2 => Self::parse_semver2(version),
            Compliance::Loose => Self::parse(version).map(|(parsed, _)| parsed),
        }
    }

    /// Strict Semver2 grammar
    pub fn parse_semver2(version: &str) -> Result<ParsedVersion, SemverError> {
        let caps = SEMVER2_RE
            .captures(version)
            .ok_or_else(|| SemverError::InvalidSemver2(version.to_string()))?;

        let numbers = NumbersSegment::parse(caps.get(1).map_or("", |m| m.as_str()))?;
        if numbers.len() > CORE_LENGTH {
            return Err(SemverError::TooManyNumbers {
                version: version.to_string(),
                count: numbers.len(),
            });
        }
        let explicit_numbers = numbers.len();

        Ok(ParsedVersion {
            numbers: numbers.padded(CORE_LENGTH),
            prerelease: IdentifierSegment::parse(caps.get(2).map_or("", |m| m.as_str()))?,
            build: IdentifierSegment::parse(caps.get(3).map_or("", |m| m.as_str()))?,
            compliance: Compliance::Semver2,
            explicit_numbers,
        })
    }

    /// Loose grammar: the leading digit-only tokens form the numeric core,
    /// every token from the first non-digit one onwards is prerelease.
    /// Build data is never recognised.
    pub fn parse_loose(version: &str) -> Result<ParsedVersion, SemverError> {
        let trimmed = version
            .trim()
            .trim_start_matches(|c: char| c == '=' || c == 'v' || c == 'V' || c.is_whitespace());

        let mut numbers = Vec::new();
        let mut prerelease = Vec::new();
        for token in LOOSE_SPLIT_RE.split(trimmed) {
            if prerelease.is_empty() && is_digits(token) {
                numbers.push(parse_number(token)?);
            } else {
                prerelease.push(Identifier::parse(token)?);
            }
        }

        if numbers.is_empty() {
            return Err(SemverError::NoVersionNumbers(version.to_string()));
        }
        let explicit_numbers = numbers.len();

        Ok(ParsedVersion {
            numbers: NumbersSegment::from_elements(numbers).padded(CORE_LENGTH),
            prerelease: prerelease.into_iter().collect(),
            build: IdentifierSegment::new(),
            compliance: Compliance::Loose,
            explicit_numbers,
        })
    }
}
