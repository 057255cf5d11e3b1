//! Suffix matching over label sequences.
//!
//! [`match_suffix`] finds the root + suffix boundary, [`accept_root_label`]
//! suppresses likely false positives, and [`DomainMatcher`] runs both as one
//! gate.

mod filter;
mod suffix;

pub use filter::accept_root_label;
pub use suffix::match_suffix;

use crate::registry::SuffixRegistry;
use crate::types::SuffixMatch;

/// Suffix matcher with the heuristic filter applied to every positive match.
#[derive(Debug, Clone, Copy)]
pub struct DomainMatcher<'a> {
    registry: &'a SuffixRegistry,
    case_heuristic: bool,
}

impl<'a> DomainMatcher<'a> {
    /// Create a matcher over `registry` with the case heuristic enabled.
    pub fn new(registry: &'a SuffixRegistry) -> Self {
        Self {
            registry,
            case_heuristic: true,
        }
    }

    /// Enable or disable rejection of camelCase root labels.
    pub fn with_case_heuristic(mut self, enabled: bool) -> Self {
        self.case_heuristic = enabled;
        self
    }

    /// Match `labels` and accept the result only if its root label passes the filter.
    pub fn match_labels<S: AsRef<str>>(&self, labels: &[S]) -> Option<SuffixMatch> {
        let matched = match_suffix(self.registry, labels)?;
        if accept_root_label(self.registry, matched.root_label(), self.case_heuristic) {
            Some(matched)
        } else {
            None
        }
    }

    /// Split `text` on '.' and match the resulting labels.
    ///
    /// Leading and trailing dots are ignored.
    pub fn match_str(&self, text: &str) -> Option<SuffixMatch> {
        let text = text.trim_matches('.');
        if text.is_empty() {
            return None;
        }
        let labels: Vec<&str> = text.split('.').collect();
        self.match_labels(&labels)
    }
}
