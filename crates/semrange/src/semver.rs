//! Semver facade providing high-level version operations on strings

use crate::{Compliance, Range, SemverError, Version};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range. Invalid input never does.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Ok(version) = Version::parse_with(version, Compliance::Loose) else {
            return false;
        };
        match Range::parse(range) {
            Ok(range) => range.matches(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let Ok(range) = Range::parse(range) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter(|v| {
                Version::parse_with(v, Compliance::Loose)
                    .map(|version| range.matches(&version))
                    .unwrap_or(false)
            })
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse a range for repeated matching.
    pub fn parse_range(range: &str) -> Result<Range, SemverError> {
        Range::parse(range)
    }

    /// Sort versions in ascending order, dropping unparseable ones
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse_with(v, Compliance::Loose).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            if ascending {
                a.compare(b)
            } else {
                b.compare(a)
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
