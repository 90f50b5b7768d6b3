//! Session cache of repository star counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Star counts keyed by `owner/name`.
///
/// Serialized as a flat JSON object (`{"acme/widget": 42}`). When loading,
/// entries whose value is not a non-negative integer are dropped so that a
/// partially damaged cache still yields its good entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct StarCache(BTreeMap<String, u64>);

impl StarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, repo: &str) -> Option<u64> {
        self.0.get(repo).copied()
    }

    pub fn contains(&self, repo: &str) -> bool {
        self.0.contains_key(repo)
    }

    /// Record a count. Returns the previous value, if any.
    pub fn insert(&mut self, repo: impl Into<String>, stars: u64) -> Option<u64> {
        self.0.insert(repo.into(), stars)
    }

    /// Add entries from `other` that this cache does not have yet.
    ///
    /// Existing entries win; counts are never overwritten within a session.
    /// Returns the number of entries added.
    pub fn merge_missing(&mut self, other: StarCache) -> usize {
        let mut added = 0;
        for (repo, stars) in other.0 {
            if let std::collections::btree_map::Entry::Vacant(slot) = self.0.entry(repo) {
                slot.insert(stars);
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for StarCache {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(repo, value)| value.as_u64().map(|stars| (repo, stars)))
                .collect(),
        )
    }
}

impl Serialize for StarCache {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl FromIterator<(String, u64)> for StarCache {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Badge text for a resolved count.
pub fn star_label(stars: u64) -> String {
    format!("★ {stars}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_object() {
        let mut cache = StarCache::new();
        cache.insert("acme/widget", 42);
        assert_eq!(
            serde_json::to_string(&cache).unwrap(),
            r#"{"acme/widget":42}"#
        );
    }

    #[test]
    fn test_deserialize_drops_non_numeric_entries() {
        let cache: StarCache = serde_json::from_str(
            r#"{"a/ok": 7, "b/str": "7", "c/neg": -1, "d/null": null, "e/float": 1.5}"#,
        )
        .unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a/ok"), Some(7));
        assert!(!cache.contains("b/str"));
    }

    #[test]
    fn test_deserialize_rejects_non_objects() {
        assert!(serde_json::from_str::<StarCache>("[1, 2]").is_err());
        assert!(serde_json::from_str::<StarCache>("null").is_err());
    }

    #[test]
    fn test_merge_missing_keeps_existing_counts() {
        let mut cache: StarCache = [("a/a".to_string(), 1)].into_iter().collect();
        let other: StarCache = [("a/a".to_string(), 99), ("b/b".to_string(), 2)]
            .into_iter()
            .collect();

        assert_eq!(cache.merge_missing(other), 1);
        assert_eq!(cache.get("a/a"), Some(1));
        assert_eq!(cache.get("b/b"), Some(2));
    }

    #[test]
    fn test_star_label() {
        assert_eq!(star_label(0), "★ 0");
        assert_eq!(star_label(1234), "★ 1234");
    }
}
