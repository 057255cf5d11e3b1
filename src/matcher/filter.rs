use crate::registry::SuffixRegistry;

/// Whether `root` may stand as the root label of an accepted match.
///
/// Rejects blacklisted code tokens and one-character labels. With
/// `case_heuristic` on, also rejects labels with an upper-case letter after
/// the first character ("myVar", "getElementById"), which are program
/// identifiers far more often than domain labels.
pub fn accept_root_label(registry: &SuffixRegistry, root: &str, case_heuristic: bool) -> bool {
    if registry.is_blacklisted_root(root) {
        return false;
    }
    if root.len() <= 1 {
        return false;
    }
    if case_heuristic {
        let mut chars = root.chars();
        chars.next();
        if chars.any(char::is_uppercase) {
            return false;
        }
    }
    true
}
