//! An ordered list of versions

use std::ops::Index;

use crate::{Compliance, SemverError, Version};

/// Versions in insertion order, sortable by precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList {
    versions: Vec<Version>,
}

impl VersionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every string with the given compliance level. The first
    /// failure aborts the whole list.
    pub fn parse<I, S>(versions: I, compliance: Compliance) -> Result<Self, SemverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let versions = versions
            .into_iter()
            .map(|v| Version::parse_with(v.as_ref(), compliance))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VersionList { versions })
    }

    pub fn push(&mut self, version: Version) {
        self.versions.push(version);
    }

    pub fn get(&self, index: usize) -> Option<&Version> {
        self.versions.get(index)
    }

    /// Replace the version at `index`, or append when `index` is one past the end.
    pub fn set(&mut self, index: usize, version: Version) -> Result<(), SemverError> {
        if index < self.versions.len() {
            self.versions[index] = version;
        } else if index == self.versions.len() {
            self.versions.push(version);
        } else {
            return Err(SemverError::IndexOutOfRange(index));
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<Version> {
        if index < self.versions.len() {
            Some(self.versions.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }

    /// Call `f` with each index and version, in order
    pub fn each<F: FnMut(usize, &Version)>(&self, mut f: F) {
        for (i, version) in self.versions.iter().enumerate() {
            f(i, version);
        }
    }

    pub fn values(&self) -> &[Version] {
        &self.versions
    }

    /// The normalized string of every version
    pub fn string_values(&self) -> Vec<String> {
        self.versions.iter().map(|v| v.normalized_string()).collect()
    }

    /// Sort ascending. Equal versions keep their relative order.
    pub fn sort(&mut self) {
        self.versions.sort_by(|a, b| a.compare(b));
    }

    /// Sort descending. Equal versions keep their relative order.
    pub fn rsort(&mut self) {
        self.versions.sort_by(|a, b| b.compare(a));
    }
}

impl Index<usize> for VersionList {
    type Output = Version;

    fn index(&self, index: usize) -> &Version {
        &self.versions[index]
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<T: IntoIterator<Item = Version>>(iter: T) -> Self {
        VersionList {
            versions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}

impl IntoIterator for VersionList {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(versions: &[&str]) -> VersionList {
        VersionList::parse(versions, Compliance::Semver2).unwrap()
    }

    #[test]
    fn test_sort_and_rsort() {
        let mut versions = list(&["1.0.0", "0.1.0", "2.0.0-rc.1", "1.0.0-alpha", "2.0.0"]);
        versions.sort();
        assert_eq!(
            versions.string_values(),
            ["0.1.0", "1.0.0-alpha", "1.0.0", "2.0.0-rc.1", "2.0.0"]
        );
        versions.rsort();
        assert_eq!(
            versions.string_values(),
            ["2.0.0", "2.0.0-rc.1", "1.0.0", "1.0.0-alpha", "0.1.0"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_versions() {
        let mut versions = list(&["1.0.0+b", "0.5.0", "1.0.0+a"]);
        versions.sort();
        assert_eq!(versions.string_values(), ["0.5.0", "1.0.0+b", "1.0.0+a"]);
    }

    #[test]
    fn test_editing() {
        let mut versions = list(&["1.0.0", "2.0.0"]);
        versions.set(0, Version::new(0, 9, 0)).unwrap();
        versions.set(2, Version::new(3, 0, 0)).unwrap();
        assert_eq!(versions.set(9, Version::new(4, 0, 0)).unwrap_err(), SemverError::IndexOutOfRange(9));
        assert_eq!(versions.len(), 3);
        assert_eq!(versions[0].to_string(), "0.9.0");

        assert_eq!(versions.remove(1).unwrap().to_string(), "2.0.0");
        assert!(versions.remove(5).is_none());

        versions.push(Version::new(5, 0, 0));
        let mut seen = Vec::new();
        versions.each(|i, v| seen.push(format!("{}:{}", i, v)));
        assert_eq!(seen, ["0:0.9.0", "1:3.0.0", "2:5.0.0"]);
    }

    #[test]
    fn test_parse_failures() {
        assert!(VersionList::parse(["1.0.0", "1.2.3.4"], Compliance::Semver2).is_err());
        let loose = VersionList::parse(["1.0.0", "1.2.3.4"], Compliance::Loose).unwrap();
        assert!(loose[1].is_loosely_matched());
    }

    #[test]
    fn test_collect() {
        let versions: VersionList = (1..=3).map(|major| Version::new(major, 0, 0)).collect();
        assert_eq!(versions.values().len(), 3);
        assert_eq!(versions.iter().map(|v| v.major()).sum::<u64>(), 6);
    }
}
