use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Which registry set produced a suffix match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixKind {
    /// One-label suffix: match is root + suffix (2 labels)
    Single,
    /// Two-label suffix: match is root + suffix (3 labels)
    Double,
}

impl SuffixKind {
    /// Number of labels in a domain matched with this suffix kind.
    pub fn label_count(self) -> usize {
        match self {
            SuffixKind::Single => 2,
            SuffixKind::Double => 3,
        }
    }
}

/// Accepted suffix match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixMatch {
    /// Root label plus suffix, original casing preserved (e.g. "Example.co.uk")
    pub domain: String,
    /// Suffix set that matched
    pub kind: SuffixKind,
}

impl SuffixMatch {
    /// The leftmost label of the matched domain.
    pub fn root_label(&self) -> &str {
        self.domain.split('.').next().unwrap_or_default()
    }

    /// The matched suffix (e.g. "co.uk").
    pub fn suffix(&self) -> &str {
        self.domain
            .split_once('.')
            .map(|(_, suffix)| suffix)
            .unwrap_or_default()
    }
}

/// Domains found in one scan, each list in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Full matched label sequences (e.g. "sub.example.com")
    pub domains: Vec<String>,
    /// Root domains that differ from their full match (e.g. "example.com")
    pub root_domains: Vec<String>,
}

impl Extraction {
    /// Check if nothing was found
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty() && self.root_domains.is_empty()
    }
}

/// Insertion-ordered set of strings, scoped to one extraction call.
#[derive(Debug, Default)]
pub(crate) struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` unless already present. Returns true if inserted.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.seen.contains(item) {
            return false;
        }
        self.seen.insert(item.to_string());
        self.items.push(item.to_string());
        true
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count() {
        assert_eq!(SuffixKind::Single.label_count(), 2);
        assert_eq!(SuffixKind::Double.label_count(), 3);
    }

    #[test]
    fn test_suffix_match_parts() {
        let m = SuffixMatch {
            domain: "Example.co.uk".to_string(),
            kind: SuffixKind::Double,
        };
        assert_eq!(m.root_label(), "Example");
        assert_eq!(m.suffix(), "co.uk");
    }

    #[test]
    fn test_ordered_set_keeps_first_seen_order() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b.com"));
        assert!(set.insert("a.com"));
        assert!(!set.insert("b.com"));
        assert_eq!(set.into_vec(), vec!["b.com", "a.com"]);
    }

    #[test]
    fn test_extraction_serializes() {
        let extraction = Extraction {
            domains: vec!["sub.example.com".to_string()],
            root_domains: vec!["example.com".to_string()],
        };
        let json = serde_json::to_string(&extraction).unwrap();
        assert_eq!(
            json,
            r#"{"domains":["sub.example.com"],"root_domains":["example.com"]}"#
        );
    }

    #[test]
    fn test_suffix_kind_serializes_lowercase() {
        let json = serde_json::to_string(&SuffixKind::Double).unwrap();
        assert_eq!(json, r#""double""#);
    }
}
