use crate::registry::SuffixRegistry;
use crate::types::{SuffixKind, SuffixMatch};

/// Find the minimal trailing boundary of `labels` that forms root + suffix.
///
/// Precedence:
/// - 2 labels: rejected if the pair is itself a double suffix ("co.uk"),
///   otherwise accepted when the last label is a single suffix.
/// - 3+ labels: a double suffix on the last two labels wins over a single
///   suffix on the last label, so "foo.co.uk" keeps "co.uk" as one unit.
///
/// No heuristic filtering happens here; see [`super::filter`].
pub fn match_suffix<S: AsRef<str>>(registry: &SuffixRegistry, labels: &[S]) -> Option<SuffixMatch> {
    let n = labels.len();
    if n <= 1 {
        return None;
    }

    let last = labels[n - 1].as_ref();
    let second = labels[n - 2].as_ref();
    let pair = join_trimmed(&[second, last]);

    if n == 2 {
        if registry.is_double_suffix(&pair) {
            return None;
        }
        if registry.is_single_suffix(last.trim_end_matches('.')) {
            return Some(SuffixMatch {
                domain: pair,
                kind: SuffixKind::Single,
            });
        }
        return None;
    }

    if registry.is_double_suffix(&pair) {
        let third = labels[n - 3].as_ref();
        return Some(SuffixMatch {
            domain: join_trimmed(&[third, second, last]),
            kind: SuffixKind::Double,
        });
    }

    if registry.is_single_suffix(last) {
        return Some(SuffixMatch {
            domain: pair,
            kind: SuffixKind::Single,
        });
    }

    None
}

/// Join labels with '.', dropping stray trailing dots.
fn join_trimmed(labels: &[&str]) -> String {
    labels.join(".").trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static SuffixRegistry {
        SuffixRegistry::builtin()
    }

    #[test]
    fn test_too_few_labels() {
        assert!(match_suffix::<&str>(registry(), &[]).is_none());
        assert!(match_suffix(registry(), &["com"]).is_none());
    }

    #[test]
    fn test_two_labels_single_suffix() {
        let m = match_suffix(registry(), &["example", "com"]).unwrap();
        assert_eq!(m.domain, "example.com");
        assert_eq!(m.kind, SuffixKind::Single);
    }

    #[test]
    fn test_two_labels_double_suffix_alone_rejected() {
        // "co.uk" is a suffix, not a domain, even though "uk" is a single suffix
        assert!(match_suffix(registry(), &["co", "uk"]).is_none());
        assert!(match_suffix(registry(), &["com", "cn"]).is_none());
    }

    #[test]
    fn test_double_suffix_takes_precedence() {
        let m = match_suffix(registry(), &["foo", "co", "uk"]).unwrap();
        assert_eq!(m.domain, "foo.co.uk");
        assert_eq!(m.kind, SuffixKind::Double);
    }

    #[test]
    fn test_boundary_is_minimal() {
        let m = match_suffix(registry(), &["a", "b", "sub", "example", "com"]).unwrap();
        assert_eq!(m.domain, "example.com");

        let m = match_suffix(registry(), &["www", "shop", "example", "com", "cn"]).unwrap();
        assert_eq!(m.domain, "example.com.cn");
    }

    #[test]
    fn test_unknown_suffix() {
        assert!(match_suffix(registry(), &["bad", "invalidtld"]).is_none());
        assert!(match_suffix(registry(), &["sub", "bad", "invalidtld"]).is_none());
    }

    #[test]
    fn test_preserves_case() {
        let m = match_suffix(registry(), &["WWW", "Example", "COM"]).unwrap();
        assert_eq!(m.domain, "Example.COM");
    }

    #[test]
    fn test_empty_trailing_label_never_matches() {
        assert!(match_suffix(registry(), &["example", "com", ""]).is_none());
    }

    #[test]
    fn test_works_with_owned_labels() {
        let labels = vec!["mail".to_string(), "example".to_string(), "org".to_string()];
        let m = match_suffix(registry(), &labels).unwrap();
        assert_eq!(m.domain, "example.org");
    }
}
