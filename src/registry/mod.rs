//! Public-suffix registry.
//!
//! Holds three membership sets, all keyed by lower-cased strings:
//! - single-label suffixes (`com`, `xyz`)
//! - double-label suffixes (`co.uk`, `com.cn`)
//! - blacklisted root labels (`div`, `list`), code tokens that are never
//!   the leftmost label of a trusted match
//!
//! The built-in registry is seeded once from static corpora and shared
//! read-only for the life of the process.
//!
//! ## Example
//!
//! ```
//! use domain_extractor_r::SuffixRegistry;
//!
//! let registry = SuffixRegistry::builtin();
//! assert!(registry.is_single_suffix("com"));
//! assert!(registry.is_single_suffix(".COM"));
//! assert!(registry.is_double_suffix("co.uk"));
//! assert!(registry.is_blacklisted_root("div"));
//! ```

mod data;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::{ExtractError, Result};

pub use data::{BLACKLISTED_ROOT_LABELS, DOUBLE_SUFFIXES, SINGLE_SUFFIXES};

static BUILTIN: Lazy<SuffixRegistry> =
    Lazy::new(|| SuffixRegistry::new(SINGLE_SUFFIXES, DOUBLE_SUFFIXES, BLACKLISTED_ROOT_LABELS));

/// Immutable suffix and blacklist membership sets.
#[derive(Debug, Clone, Default)]
pub struct SuffixRegistry {
    single: HashSet<String>,
    double: HashSet<String>,
    blacklist: HashSet<String>,
}

impl SuffixRegistry {
    /// Create a registry from suffix and blacklist corpora.
    ///
    /// Entries are lower-cased and stripped of leading dots, so `".COM"`
    /// and `"com"` land on the same key.
    pub fn new<S: AsRef<str>>(single: &[S], double: &[S], blacklist: &[S]) -> Self {
        let registry = Self {
            single: single.iter().map(|s| normalize_key(s.as_ref())).collect(),
            double: double.iter().map(|s| normalize_key(s.as_ref())).collect(),
            blacklist: blacklist.iter().map(|s| normalize_key(s.as_ref())).collect(),
        };
        debug!(
            "suffix registry built: {} single, {} double, {} blacklisted",
            registry.single.len(),
            registry.double.len(),
            registry.blacklist.len()
        );
        registry
    }

    /// The process-wide registry seeded from the built-in corpora.
    pub fn builtin() -> &'static SuffixRegistry {
        &BUILTIN
    }

    /// Add single-label suffixes.
    pub fn with_single_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.single
            .extend(suffixes.into_iter().map(|s| normalize_key(s.as_ref())));
        self
    }

    /// Add double-label suffixes.
    pub fn with_double_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.double
            .extend(suffixes.into_iter().map(|s| normalize_key(s.as_ref())));
        self
    }

    /// Add blacklisted root labels.
    pub fn with_blacklist<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blacklist
            .extend(labels.into_iter().map(|s| normalize_key(s.as_ref())));
        self
    }

    /// Add suffixes parsed from suffix-list text.
    ///
    /// One entry per line, `#` starts a comment. One-label entries become
    /// single suffixes, two-label entries double suffixes.
    pub fn extend_from_suffix_list(mut self, text: &str) -> Result<Self> {
        let (single, double) = parse_suffix_list(text)?;
        debug!(
            "suffix list parsed: {} single, {} double",
            single.len(),
            double.len()
        );
        self.single.extend(single);
        self.double.extend(double);
        Ok(self)
    }

    /// Add suffixes from a suffix-list file.
    pub fn load_suffix_list_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        debug!("loading suffix list from {}", path.display());
        self.extend_from_suffix_list(&text)
    }

    /// Whether `label` is a known single-label suffix.
    pub fn is_single_suffix(&self, label: &str) -> bool {
        self.single.contains(lookup_key(label).as_ref())
    }

    /// Whether `pair` (two labels joined by a dot) is a known double suffix.
    pub fn is_double_suffix(&self, pair: &str) -> bool {
        self.double.contains(lookup_key(pair).as_ref())
    }

    /// Whether `label` may never be the root label of a match.
    pub fn is_blacklisted_root(&self, label: &str) -> bool {
        self.blacklist.contains(lookup_key(label).as_ref())
    }

    /// Number of single-label suffixes.
    pub fn single_len(&self) -> usize {
        self.single.len()
    }

    /// Number of double-label suffixes.
    pub fn double_len(&self) -> usize {
        self.double.len()
    }

    /// Check if the registry has no suffixes
    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.double.is_empty()
    }
}

fn normalize_key(entry: &str) -> String {
    entry.trim().trim_start_matches('.').to_lowercase()
}

/// Lookup key for a query, allocating only when the query needs folding.
fn lookup_key(query: &str) -> Cow<'_, str> {
    let query = query.trim_start_matches('.');
    if query.chars().any(char::is_uppercase) {
        Cow::Owned(query.to_lowercase())
    } else {
        Cow::Borrowed(query)
    }
}

fn is_suffix_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

/// Parse suffix-list text into (single, double) entries.
fn parse_suffix_list(text: &str) -> Result<(Vec<String>, Vec<String>)> {
    let mut single = Vec::new();
    let mut double = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;

        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let entry = normalize_key(line);
        if entry.is_empty() {
            continue;
        }

        let labels: Vec<&str> = entry.split('.').collect();
        let well_formed = labels
            .iter()
            .all(|label| !label.is_empty() && label.chars().all(is_suffix_char));
        if !well_formed || labels.len() > 2 {
            return Err(ExtractError::InvalidSuffix {
                line: line_num,
                entry: line.trim().to_string(),
            });
        }

        if labels.len() == 1 {
            single.push(entry);
        } else {
            double.push(entry);
        }
    }

    Ok((single, double))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_lookups() {
        let registry = SuffixRegistry::builtin();
        assert!(registry.is_single_suffix("com"));
        assert!(registry.is_single_suffix("xyz"));
        assert!(registry.is_double_suffix("co.uk"));
        assert!(registry.is_double_suffix("com.cn"));
        assert!(!registry.is_single_suffix("invalidtld"));
        assert!(!registry.is_double_suffix("example.com"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = SuffixRegistry::builtin();
        assert!(registry.is_single_suffix("COM"));
        assert!(registry.is_double_suffix("Co.UK"));
        assert!(registry.is_blacklisted_root("DIV"));
    }

    #[test]
    fn test_leading_dot_is_equivalent() {
        let registry = SuffixRegistry::builtin();
        assert!(registry.is_single_suffix(".com"));
        assert!(registry.is_double_suffix(".co.uk"));
    }

    #[test]
    fn test_empty_lookup_is_false() {
        let registry = SuffixRegistry::builtin();
        assert!(!registry.is_single_suffix(""));
        assert!(!registry.is_double_suffix(""));
        assert!(!registry.is_blacklisted_root(""));
    }

    #[test]
    fn test_new_normalizes_entries() {
        let registry = SuffixRegistry::new(&[".TEST"], &["Co.Test"], &["Foo"]);
        assert!(registry.is_single_suffix("test"));
        assert!(registry.is_double_suffix("co.test"));
        assert!(registry.is_blacklisted_root("foo"));
        assert_eq!(registry.single_len(), 1);
        assert_eq!(registry.double_len(), 1);
    }

    #[test]
    fn test_default_is_empty() {
        let registry = SuffixRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.is_single_suffix("com"));
    }

    #[test]
    fn test_builder_extends_builtin() {
        let registry = SuffixRegistry::builtin()
            .clone()
            .with_single_suffixes(["internal"])
            .with_double_suffixes(["corp.internal"])
            .with_blacklist(["foo"]);
        assert!(registry.is_single_suffix("internal"));
        assert!(registry.is_double_suffix("corp.internal"));
        assert!(registry.is_blacklisted_root("foo"));
        assert!(registry.is_single_suffix("com"));
    }

    #[test]
    fn test_parse_suffix_list() {
        let text = "
# private suffixes
lan
.home.arpa   # leading dot is stripped
Corp.LAN
";
        let (single, double) = parse_suffix_list(text).unwrap();
        assert_eq!(single, vec!["lan".to_string()]);
        assert_eq!(double, vec!["home.arpa".to_string(), "corp.lan".to_string()]);
    }

    #[test]
    fn test_parse_suffix_list_rejects_three_labels() {
        let result = parse_suffix_list("com\na.b.c\n");
        match result {
            Err(ExtractError::InvalidSuffix { line, entry }) => {
                assert_eq!(line, 2);
                assert_eq!(entry, "a.b.c");
            }
            other => panic!("expected InvalidSuffix, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_suffix_list_rejects_bad_characters() {
        assert!(parse_suffix_list("foo_bar").is_err());
        assert!(parse_suffix_list("co..uk").is_err());
        assert!(parse_suffix_list("uk.").is_err());
    }

    #[test]
    fn test_parse_suffix_list_accepts_unicode_labels() {
        let (single, _) = parse_suffix_list("рф").unwrap();
        assert_eq!(single, vec!["рф".to_string()]);
    }

    #[test]
    fn test_load_suffix_list_file() {
        use std::io::Write;
        let dir = std::env::temp_dir().join("domain_extractor_test_registry");
        let _ = fs::create_dir_all(&dir);
        let file_path = dir.join("suffixes.txt");
        let mut f = fs::File::create(&file_path).unwrap();
        writeln!(f, "internal").unwrap();
        writeln!(f, "corp.internal").unwrap();
        drop(f);

        let registry = SuffixRegistry::default()
            .load_suffix_list_file(&file_path)
            .unwrap();
        assert!(registry.is_single_suffix("internal"));
        assert!(registry.is_double_suffix("corp.internal"));

        let _ = fs::remove_file(&file_path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_load_suffix_list_file_not_found() {
        let result =
            SuffixRegistry::default().load_suffix_list_file("/nonexistent/path/suffixes.txt");
        assert!(matches!(result, Err(ExtractError::IoError(_))));
    }
}
