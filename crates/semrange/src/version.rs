//! The `Version` value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::expression::Expression;
use crate::segment::{Identifier, IdentifierSegment, NumbersSegment, OrderedSegment};
use crate::version_parser::{Compliance, ParsedVersion, VersionParser, CORE_LENGTH};
use crate::SemverError;

/// An immutable, parsed version.
///
/// Ordering and equality follow Semantic Versioning precedence: the numeric
/// core first (zero-padded, so `1.0.0 == 1.0.0.0`), then the prerelease
/// identifiers, with a release outranking every prerelease of the same core.
/// Build metadata never takes part.
#[derive(Debug, Clone)]
pub struct Version {
    numbers: NumbersSegment,
    prerelease: IdentifierSegment,
    build: IdentifierSegment,
    original: String,
    compliance: Compliance,
}

impl Version {
    /// Parse with the strict Semver2 grammar.
    pub fn parse(version: &str) -> Result<Self, SemverError> {
        Self::parse_with(version, Compliance::Semver2)
    }

    /// Parse with the grammars `compliance` allows.
    ///
    /// With [`Compliance::Loose`] the strict grammar is still tried first;
    /// if both fail the strict error is returned.
    pub fn parse_with(version: &str, compliance: Compliance) -> Result<Self, SemverError> {
        let parsed = VersionParser::parse_with(version, compliance)?;
        Ok(Self::from_parsed(parsed, version))
    }

    pub(crate) fn from_parsed(parsed: ParsedVersion, original: &str) -> Self {
        Version {
            numbers: parsed.numbers,
            prerelease: parsed.prerelease,
            build: parsed.build,
            original: original.to_string(),
            compliance: parsed.compliance,
        }
    }

    /// A plain `major.minor.patch` release
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_segments(
            NumbersSegment::from_elements(vec![major, minor, patch]),
            IdentifierSegment::new(),
            IdentifierSegment::new(),
        )
    }

    /// Assemble a version from already sanitized segments. A numeric core
    /// shorter than three elements is zero-padded.
    pub fn from_segments(numbers: NumbersSegment, prerelease: IdentifierSegment, build: IdentifierSegment) -> Self {
        let numbers = numbers.padded(CORE_LENGTH);
        let compliance = if numbers.len() > CORE_LENGTH {
            Compliance::Loose
        } else {
            Compliance::Semver2
        };
        let mut version = Version {
            numbers,
            prerelease,
            build,
            original: String::new(),
            compliance,
        };
        version.original = version.normalized_string();
        version
    }

    pub fn numbers(&self) -> &NumbersSegment {
        &self.numbers
    }

    pub fn prerelease(&self) -> &IdentifierSegment {
        &self.prerelease
    }

    pub fn build(&self) -> &IdentifierSegment {
        &self.build
    }

    pub fn major(&self) -> u64 {
        self.numbers.get(0).copied().unwrap_or(0)
    }

    pub fn minor(&self) -> u64 {
        self.numbers.get(1).copied().unwrap_or(0)
    }

    pub fn patch(&self) -> u64 {
        self.numbers.get(2).copied().unwrap_or(0)
    }

    pub fn prerelease_element(&self, index: usize) -> Option<&Identifier> {
        self.prerelease.get(index)
    }

    pub fn build_element(&self, index: usize) -> Option<&Identifier> {
        self.build.get(index)
    }

    /// The numeric core, e.g. `1.2.3`
    pub fn version_number(&self) -> String {
        self.numbers.to_string()
    }

    pub fn prerelease_string(&self) -> String {
        self.prerelease.to_string()
    }

    pub fn build_string(&self) -> String {
        self.build.to_string()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Which grammar accepted this version
    pub fn compliance(&self) -> Compliance {
        self.compliance
    }

    /// True when only the loose grammar could make sense of the input
    pub fn is_loosely_matched(&self) -> bool {
        self.compliance == Compliance::Loose
    }

    /// The text this version was parsed from
    pub fn original_string(&self) -> &str {
        &self.original
    }

    /// `major.minor.patch[-prerelease][+build]`
    pub fn normalized_string(&self) -> String {
        let mut out = self.numbers.to_string();
        if !self.prerelease.is_empty() {
            out.push('-');
            out.push_str(&self.prerelease.to_string());
        }
        if !self.build.is_empty() {
            out.push('+');
            out.push_str(&self.build.to_string());
        }
        out
    }

    pub fn compare(&self, other: &Version) -> Ordering {
        self.numbers
            .compare(&other.numbers)
            .then_with(|| self.prerelease.compare(&other.prerelease))
    }

    pub fn equals(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn greater_than_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn less_than_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// A new version with the numeric element at `index` incremented, every
    /// later element zeroed and prerelease and build dropped.
    pub fn increment(&self, index: usize) -> Result<Version, SemverError> {
        let numbers = self.numbers.increment(index)?;
        Ok(Self::from_segments(numbers, IdentifierSegment::new(), IdentifierSegment::new()))
    }

    /// The first release outside this version's caret range.
    ///
    /// Increments the leftmost non-zero numeric element and zeroes the rest;
    /// an all-zero core yields `0.0.1`. Fails when that element is `u64::MAX`.
    pub fn next_significant(&self) -> Result<Version, SemverError> {
        let numbers = match self.numbers.iter().position(|&n| n != 0) {
            Some(index) => self.numbers.increment(index)?,
            None => NumbersSegment::default(),
        };
        Ok(Self::from_segments(numbers, IdentifierSegment::new(), IdentifierSegment::new()))
    }

    /// The highest version of `versions`; on ties the earliest one wins.
    pub fn greatest<'a, I>(versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().fold(None, |best, candidate| match best {
            Some(current) if !candidate.greater_than(current) => Some(current),
            _ => Some(candidate),
        })
    }

    /// The lowest version of `versions`; on ties the earliest one wins.
    pub fn lowest<'a, I>(versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().fold(None, |best, candidate| match best {
            Some(current) if !candidate.less_than(current) => Some(current),
            _ => Some(candidate),
        })
    }

    /// Whether this version is matched by `expression`
    pub fn satisfies<E: Expression + ?Sized>(&self, expression: &E) -> bool {
        expression.matches(self)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::from_segments(NumbersSegment::default(), IdentifierSegment::new(), IdentifierSegment::new())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numbers.significant().hash(state);
        self.prerelease.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_string())
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.normalized_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_accessors() {
        let version = v("v1.2.3-beta.4+exp.sha.5114f85");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.prerelease_element(0).and_then(|e| e.as_str()), Some("beta"));
        assert_eq!(version.prerelease_element(1).and_then(|e| e.as_number()), Some(4));
        assert_eq!(version.prerelease_element(2), None);
        assert_eq!(version.build_element(2).and_then(|e| e.as_str()), Some("5114f85"));
        assert_eq!(version.version_number(), "1.2.3");
        assert_eq!(version.prerelease_string(), "beta.4");
        assert_eq!(version.build_string(), "exp.sha.5114f85");
        assert_eq!(version.original_string(), "v1.2.3-beta.4+exp.sha.5114f85");
        assert_eq!(version.normalized_string(), "1.2.3-beta.4+exp.sha.5114f85");
        assert!(version.is_prerelease());
        assert!(!version.is_loosely_matched());
    }

    #[test]
    fn test_short_forms_are_padded() {
        assert_eq!(v("1").normalized_string(), "1.0.0");
        assert_eq!(v("1.2").normalized_string(), "1.2.0");
        assert_eq!(v("=1.2-rc").normalized_string(), "1.2.0-rc");
    }

    #[test]
    fn test_strict_and_loose_parsing() {
        assert!(Version::parse("1.2.3.4").is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());

        let loose = Version::parse_with("1.2.3.4-b", Compliance::Loose).unwrap();
        assert!(loose.is_loosely_matched());
        assert_eq!(loose.normalized_string(), "1.2.3.4-b");

        let strict = Version::parse_with("1.2.3", Compliance::Loose).unwrap();
        assert_eq!(strict.compliance(), Compliance::Semver2);

        assert_eq!(
            Version::parse_with("foo", Compliance::Loose).unwrap_err(),
            SemverError::InvalidSemver2("foo".to_string())
        );
    }

    #[test]
    fn test_compare_numbers() {
        assert!(v("1.0.0").less_than(&v("2.0.0")));
        assert!(v("1.10.0").greater_than(&v("1.9.0")));
        assert!(v("1.2.3").less_than_or_equal(&v("1.2.3")));
        assert!(v("1.2.3").greater_than_or_equal(&v("1.2.3")));
        assert!(v("1.0.0").equals(&v("1")));

        let four = Version::parse_with("1.0.0.0", Compliance::Loose).unwrap();
        assert_eq!(v("1.0.0").compare(&four), Ordering::Equal);
        let four = Version::parse_with("1.0.0.1", Compliance::Loose).unwrap();
        assert_eq!(v("1.0.0").compare(&four), Ordering::Less);
    }

    #[test]
    fn test_prerelease_precedence() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_mixed_prerelease_order_is_transitive() {
        let mut versions = vec![v("1.0.0-1a"), v("1.0.0-10"), v("1.0.0-9"), v("1.0.0-a")];
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, ["1.0.0-9", "1.0.0-10", "1.0.0-1a", "1.0.0-a"]);

        assert!(v("1.0.0-9") < v("1.0.0-10"));
        assert!(v("1.0.0-10") < v("1.0.0-1a"));
        assert!(v("1.0.0-9") < v("1.0.0-1a"));
    }

    #[test]
    fn test_build_is_ignored() {
        assert_eq!(v("1.0.0+x").compare(&v("1.0.0+y")), Ordering::Equal);
        assert_eq!(v("1.0.0+x"), v("1.0.0"));

        let set: HashSet<Version> = [v("1.0.0+x"), v("1.0.0+y"), v("1.0")].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_next_significant() {
        assert_eq!(v("1.2.3").next_significant().unwrap().to_string(), "2.0.0");
        assert_eq!(v("0.2.3").next_significant().unwrap().to_string(), "0.3.0");
        assert_eq!(v("0.0.3").next_significant().unwrap().to_string(), "0.0.4");
        assert_eq!(v("0.0.0").next_significant().unwrap().to_string(), "0.0.1");
        assert_eq!(v("1.2.3-beta+b").next_significant().unwrap().to_string(), "2.0.0");
    }

    #[test]
    fn test_next_significant_overflow() {
        let max = v(&format!("0.{}.5", u64::MAX));
        assert_eq!(
            max.next_significant().unwrap_err(),
            SemverError::NumberOverflow { segment: format!("0.{}.5", u64::MAX), index: 1 }
        );
    }

    #[test]
    fn test_increment() {
        let version = v("1.2.3-beta+b");
        assert_eq!(version.increment(1).unwrap().to_string(), "1.3.0");
        assert_eq!(version.increment(2).unwrap().to_string(), "1.2.4");
        assert_eq!(version.increment(3).unwrap_err(), SemverError::IndexOutOfRange(3));
        assert!(matches!(
            v(&format!("{}.0.0", u64::MAX)).increment(0).unwrap_err(),
            SemverError::NumberOverflow { index: 0, .. }
        ));
        // The source version is untouched
        assert_eq!(version.to_string(), "1.2.3-beta+b");
    }

    #[test]
    fn test_greatest_and_lowest() {
        let versions = [v("1.0.0+first"), v("2.0.0-rc"), v("1.0.0+second"), v("2.0.0-rc+other")];
        assert_eq!(Version::greatest(&versions).unwrap().build_string(), "");
        assert_eq!(Version::greatest(&versions).unwrap().prerelease_string(), "rc");
        assert_eq!(Version::lowest(&versions).unwrap().build_string(), "first");
        assert_eq!(Version::greatest(&[] as &[Version]), None);
    }

    #[test]
    fn test_construction() {
        assert_eq!(Version::default().to_string(), "0.0.1");
        assert_eq!(Version::new(4, 5, 6).to_string(), "4.5.6");
        assert_eq!(Version::new(4, 5, 6).original_string(), "4.5.6");

        let version = Version::from_segments(
            NumbersSegment::from_elements(vec![2]),
            IdentifierSegment::parse("rc.1").unwrap(),
            IdentifierSegment::parse("linux").unwrap(),
        );
        assert_eq!(version.to_string(), "2.0.0-rc.1+linux");
    }

    #[test]
    fn test_normalized_string_round_trips() {
        for input in ["v1.2", "1.2.3-alpha.1+build.5", "=0.0.7-x-y"] {
            let version = v(input);
            let reparsed = v(&version.normalized_string());
            assert_eq!(version, reparsed);
            assert_eq!(version.normalized_string(), reparsed.normalized_string());
        }
    }
}
