//! Error type shared by version parsing and range parsing

use thiserror::Error;

/// Every failure the crate can report.
///
/// Variants are distinguished by message; all of them are raised while a
/// [`Version`](crate::Version) or [`Range`](crate::Range) is being built, so a
/// partially constructed value is never observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("Could not parse Semver2 string \"{0}\"")]
    InvalidSemver2(String),
    #[error("\"{0}\" is not a numeric version segment value")]
    InvalidNumber(String),
    #[error("\"{0}\" is not a valid version segment element")]
    InvalidIdentifier(String),
    #[error("Semver string \"{version}\" contains {count} version numbers, should be 3 at most")]
    TooManyNumbers { version: String, count: usize },
    #[error("No usable version numbers detected in \"{0}\"")]
    NoVersionNumbers(String),
    #[error("Could not parse simple constraint \"{0}\"")]
    InvalidConstraint(String),
    #[error("Could not parse hyphen range bound \"{bound}\"")]
    InvalidHyphenBound {
        bound: String,
        #[source]
        source: Box<SemverError>,
    },
    #[error("Inequality operator requires exact version, got \"{0}\"")]
    InequalityRequiresExactVersion(String),
    #[error("Unknown operator \"{0}\"")]
    UnknownOperator(String),
    #[error("Invalid primitive operator \"{0}\"")]
    InvalidPrimitiveOperator(String),
    #[error("Index {0} does not exist in segment")]
    IndexOutOfRange(usize),
    #[error("Range part cannot be empty in \"{0}\"")]
    EmptyRangePart(String),
    #[error("Incrementing element {index} of \"{segment}\" overflows")]
    NumberOverflow { segment: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_name_offending_text() {
        assert_eq!(
            SemverError::InvalidNumber("1a".to_string()).to_string(),
            "\"1a\" is not a numeric version segment value"
        );
        assert_eq!(
            SemverError::TooManyNumbers { version: "1.2.3.4".to_string(), count: 4 }.to_string(),
            "Semver string \"1.2.3.4\" contains 4 version numbers, should be 3 at most"
        );
    }

    #[test]
    fn test_overflow_message() {
        let err = SemverError::NumberOverflow { segment: "1.18446744073709551615.0".to_string(), index: 1 };
        assert_eq!(err.to_string(), "Incrementing element 1 of \"1.18446744073709551615.0\" overflows");
    }

    #[test]
    fn test_hyphen_bound_keeps_source() {
        let err = SemverError::InvalidHyphenBound {
            bound: "x.y".to_string(),
            source: Box::new(SemverError::InvalidSemver2("x.y".to_string())),
        };
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "Could not parse Semver2 string \"x.y\"");
    }
}
