//! Version comparison utilities over plain strings

use std::cmp::Ordering;

use crate::{Compliance, Version};

/// Comparator for comparing version strings.
///
/// Both sides are parsed with the loose grammar as a fallback. A string that
/// does not parse never compares true.
pub struct Comparator;

impl Comparator {
    /// `version1` sorts after `version2`. Build metadata is ignored.
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::ordering(version1, version2) == Some(Ordering::Greater)
    }

    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        matches!(Self::ordering(version1, version2), Some(Ordering::Greater | Ordering::Equal))
    }

    /// `version1` sorts before `version2`; a prerelease sorts before its release.
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::ordering(version1, version2) == Some(Ordering::Less)
    }

    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        matches!(Self::ordering(version1, version2), Some(Ordering::Less | Ordering::Equal))
    }

    /// Same precedence, so `1.0` equals `1.0.0+build` and `1.0.0.0`.
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::ordering(version1, version2) == Some(Ordering::Equal)
    }

    /// Different precedence. False, not true, when either side is unparseable.
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        matches!(Self::ordering(version1, version2), Some(Ordering::Less | Ordering::Greater))
    }

    /// Dispatch on an operator string (`>`, `>=`, `<`, `<=`, `=`/`==`,
    /// `!=`/`<>`). Unknown operators compare false.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        match operator {
            ">" => Self::greater_than(version1, version2),
            ">=" => Self::greater_than_or_equal_to(version1, version2),
            "<" => Self::less_than(version1, version2),
            "<=" => Self::less_than_or_equal_to(version1, version2),
            "=" | "==" => Self::equal_to(version1, version2),
            "!=" | "<>" => Self::not_equal_to(version1, version2),
            _ => false,
        }
    }

    /// Loose parse of both sides, `None` when either fails.
    fn ordering(version1: &str, version2: &str) -> Option<Ordering> {
        let a = Version::parse_with(version1, Compliance::Loose).ok()?;
        let b = Version::parse_with(version2, Compliance::Loose).ok()?;
        Some(a.compare(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0"));
        assert!(!Comparator::greater_than("1.25.0", "1.25.0"));
        assert!(!Comparator::greater_than("1.25.0", "1.26.0"));
        assert!(Comparator::greater_than("1.0.0", "1.0.0-rc.1"));
    }

    #[test]
    fn test_less_than() {
        assert!(Comparator::less_than("1.25.0", "1.26.0"));
        assert!(Comparator::less_than("1.0.0-alpha", "1.0.0-alpha.1"));
        assert!(!Comparator::less_than("1.25.0", "1.25.0"));
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0"));
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25"));
    }

    #[test]
    fn test_equality() {
        assert!(Comparator::equal_to("1.0.0+linux", "v1.0"));
        assert!(Comparator::equal_to("1.0.0.0", "1.0.0"));
        assert!(!Comparator::equal_to("1.0.0-rc", "1.0.0"));
        assert!(Comparator::not_equal_to("1.0.0-rc", "1.0.0"));
        assert!(Comparator::compare("1.0.0", "<>", "1.0.1"));
    }

    #[test]
    fn test_unparseable_never_matches() {
        assert!(!Comparator::equal_to("dev-master", "dev-master"));
        assert!(!Comparator::not_equal_to("dev-master", "1.0.0"));
        assert!(!Comparator::compare("1.0.0", "~", "1.0.0"));
    }

    #[test]
    fn test_loose_inputs_compare() {
        // Four numeric groups and a dotless prerelease only parse loosely
        assert!(Comparator::greater_than("1.2.3.4", "1.2.3"));
        assert!(Comparator::less_than("2.0b1", "2.0.0"));
        assert!(Comparator::compare("1.2.3.4", ">=", "1.2.3.4"));
        assert!(!Comparator::less_than_or_equal_to("1.2.3", "beta"));
    }
}
