//! An insertion-ordered map keyed by version strings

use indexmap::IndexMap;

use crate::{SemverError, Version};

/// Maps version strings to values, remembering the parsed version of each
/// key. Iteration follows insertion order until [`sort`](Self::sort) or
/// [`rsort`](Self::rsort) reorders the entries by precedence.
#[derive(Debug, Clone)]
pub struct VersionMap<V> {
    entries: IndexMap<String, (Version, V)>,
}

impl<V> VersionMap<V> {
    pub fn new() -> Self {
        VersionMap {
            entries: IndexMap::new(),
        }
    }

    /// Insert under `key`, which must be a valid version string. Returns the
    /// previous value stored under the same key.
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>, SemverError> {
        let version = Version::parse(key)?;
        Ok(self
            .entries
            .insert(key.to_string(), (version, value))
            .map(|(_, previous)| previous))
    }

    /// Insert keyed by the version's normalized string.
    pub fn insert_version(&mut self, version: Version, value: V) -> Option<V> {
        self.entries
            .insert(version.normalized_string(), (version, value))
            .map(|(_, previous)| previous)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).map(|(_, value)| value)
    }

    pub fn get_version(&self, key: &str) -> Option<&Version> {
        self.entries.get(key).map(|(version, _)| version)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<(Version, V)> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys as they were inserted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Normalized string of every key's version
    pub fn string_keys(&self) -> Vec<String> {
        self.entries.values().map(|(version, _)| version.normalized_string()).collect()
    }

    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.entries.values().map(|(version, _)| version)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Version, &V)> {
        self.entries
            .iter()
            .map(|(key, (version, value))| (key.as_str(), version, value))
    }

    /// Call `f` with each key, version and value, in order
    pub fn each<F: FnMut(&str, &Version, &V)>(&self, mut f: F) {
        for (key, version, value) in self.iter() {
            f(key, version, value);
        }
    }

    /// Order entries by ascending version. Equal versions keep their relative order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|_, (a, _), _, (b, _)| a.compare(b));
    }

    /// Order entries by descending version. Equal versions keep their relative order.
    pub fn rsort(&mut self) {
        self.entries.sort_by(|_, (a, _), _, (b, _)| b.compare(a));
    }
}

impl<V> Default for VersionMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> VersionMap<&'static str> {
        let mut map = VersionMap::new();
        map.insert("2.0.0", "two").unwrap();
        map.insert("v1.0", "one").unwrap();
        map.insert("1.5.0-beta", "one and a half").unwrap();
        map
    }

    #[test]
    fn test_insertion_order() {
        let map = map();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["2.0.0", "v1.0", "1.5.0-beta"]);
        assert_eq!(map.string_keys(), ["2.0.0", "1.0.0", "1.5.0-beta"]);
        assert_eq!(map.get("v1.0"), Some(&"one"));
        assert_eq!(map.get_version("v1.0").unwrap().to_string(), "1.0.0");
        assert!(map.get("1.0.0").is_none());
    }

    #[test]
    fn test_sort_and_rsort() {
        let mut map = map();
        map.sort();
        assert_eq!(map.values().copied().collect::<Vec<_>>(), ["one", "one and a half", "two"]);
        map.rsort();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["2.0.0", "1.5.0-beta", "v1.0"]);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut map = map();
        assert_eq!(map.insert("2.0.0", "deux").unwrap(), Some("two"));
        assert!(map.insert("not-a-version", "nope").is_err());
        assert_eq!(map.len(), 3);

        assert_eq!(map.insert_version(Version::new(3, 0, 0), "three"), None);
        assert!(map.contains_key("3.0.0"));

        let (version, value) = map.remove("v1.0").unwrap();
        assert_eq!(version, Version::new(1, 0, 0));
        assert_eq!(value, "one");
        assert_eq!(map.keys().collect::<Vec<_>>(), ["2.0.0", "1.5.0-beta", "3.0.0"]);

        let mut seen = Vec::new();
        map.each(|key, version, value| seen.push(format!("{}={}:{}", key, version, value)));
        assert_eq!(seen[0], "2.0.0=2.0.0:deux");
        assert_eq!(map.versions().count(), 3);
    }
}
