//! Extraction entry points.
//!
//! [`Extractor`] ties a [`SuffixRegistry`] to [`ExtractorOptions`] and runs
//! the optional decode pass, the scanner, and root-domain derivation. Each
//! call owns its own dedup sets; nothing is shared between calls.

use crate::decode::decode_obfuscated;
use crate::error::{ExtractError, Result};
use crate::matcher::DomainMatcher;
use crate::registry::SuffixRegistry;
use crate::scanner::{Scanner, DEFAULT_LABEL_LEN_LIMIT};
use crate::types::{Extraction, OrderedSet, SuffixMatch};

/// Extractor options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Run the decoding pre-pass before scanning
    pub decode: bool,
    /// Labels this long or longer are discarded as noise
    pub label_len_limit: usize,
    /// Reject root labels with an upper-case letter after the first character
    pub case_heuristic: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            decode: false,
            label_len_limit: DEFAULT_LABEL_LEN_LIMIT,
            case_heuristic: true,
        }
    }
}

impl ExtractorOptions {
    /// Create new extractor options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the decoding pre-pass.
    pub fn with_decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Set the label length limit.
    pub fn with_label_len_limit(mut self, limit: usize) -> Self {
        self.label_len_limit = limit;
        self
    }

    /// Enable or disable the camelCase root label heuristic.
    pub fn with_case_heuristic(mut self, enabled: bool) -> Self {
        self.case_heuristic = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.label_len_limit == 0 {
            return Err(ExtractError::ConfigError(
                "label_len_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Domain extractor over a suffix registry.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    registry: &'a SuffixRegistry,
    options: ExtractorOptions,
}

impl Default for Extractor<'static> {
    fn default() -> Self {
        Self {
            registry: SuffixRegistry::builtin(),
            options: ExtractorOptions::default(),
        }
    }
}

impl<'a> Extractor<'a> {
    /// Create an extractor over `registry`.
    pub fn new(registry: &'a SuffixRegistry, options: ExtractorOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { registry, options })
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    fn matcher(&self) -> DomainMatcher<'a> {
        DomainMatcher::new(self.registry).with_case_heuristic(self.options.case_heuristic)
    }

    /// Match `domain` as a whole, returning the root + suffix boundary.
    pub fn match_domain(&self, domain: &str) -> Option<SuffixMatch> {
        self.matcher().match_str(domain)
    }

    /// Whether `text`, split on '.', ends in a known suffix with an acceptable root label.
    pub fn has_domain_suffix(&self, text: &str) -> bool {
        self.match_domain(text).is_some()
    }

    /// Root domain of `domain`, or `domain` unchanged when it does not match.
    pub fn root_domain_of(&self, domain: &str) -> String {
        match self.match_domain(domain) {
            Some(matched) => matched.domain,
            None => domain.to_string(),
        }
    }

    /// Scan `text` once.
    ///
    /// `domains` holds each distinct full match, `root_domains` each
    /// distinct root that differs from its full match, both in discovery
    /// order.
    pub fn scan(&self, text: &str) -> Extraction {
        let decoded;
        let text = if self.options.decode {
            decoded = decode_obfuscated(text);
            decoded.as_str()
        } else {
            text
        };

        let mut domains = OrderedSet::new();
        let mut root_domains = OrderedSet::new();
        let scanner = Scanner::new(self.matcher()).with_label_len_limit(self.options.label_len_limit);

        scanner.scan(text, |domain| {
            if !domains.insert(&domain) {
                return;
            }
            let root = self.root_domain_of(&domain);
            if root != domain {
                root_domains.insert(&root);
            }
        });

        Extraction {
            domains: domains.into_vec(),
            root_domains: root_domains.into_vec(),
        }
    }

    /// Distinct root domains followed by distinct full matches.
    pub fn extract_domains(&self, text: &str) -> Vec<String> {
        let extraction = self.scan(text);
        let mut out = OrderedSet::new();
        for domain in extraction.root_domains.iter().chain(&extraction.domains) {
            out.insert(domain);
        }
        out.into_vec()
    }

    /// Distinct root domain of every match.
    pub fn extract_root_domains(&self, text: &str) -> Vec<String> {
        let extraction = self.scan(text);
        self.roots_of(extraction.root_domains.iter().chain(&extraction.domains))
    }

    /// Full matches plus their distinct root domains, both in discovery order.
    pub fn extract_domains_and_roots(&self, text: &str) -> (Vec<String>, Vec<String>) {
        let extraction = self.scan(text);
        let roots = self.roots_of(extraction.domains.iter().chain(&extraction.root_domains));
        (extraction.domains, roots)
    }

    fn roots_of<'d>(&self, domains: impl Iterator<Item = &'d String>) -> Vec<String> {
        let mut roots = OrderedSet::new();
        for domain in domains {
            roots.insert(&self.root_domain_of(domain));
        }
        roots.into_vec()
    }
}

/// Whether `text` is a domain ending in a known suffix.
///
/// ```
/// use domain_extractor_r::has_domain_suffix;
///
/// assert!(has_domain_suffix("example.com"));
/// assert!(has_domain_suffix("foo.co.uk"));
/// assert!(!has_domain_suffix("co.uk"));
/// assert!(!has_domain_suffix("myVar.com"));
/// ```
pub fn has_domain_suffix(text: &str) -> bool {
    Extractor::default().has_domain_suffix(text)
}

/// Extract domains and their root domains from `text`.
///
/// With `decode_first`, percent, backslash-hex and unicode escapes are
/// undone before scanning.
///
/// ```
/// use domain_extractor_r::extract_domains;
///
/// let domains = extract_domains("hello www.yaklang.com or yaklang.io", false);
/// assert_eq!(domains, vec!["yaklang.com", "www.yaklang.com", "yaklang.io"]);
///
/// let domains = extract_domains(r#"{"message":"%79%61%6b%6c%61%6e%67.com"}"#, true);
/// assert_eq!(domains, vec!["yaklang.com"]);
/// ```
pub fn extract_domains(text: &str, decode_first: bool) -> Vec<String> {
    let options = ExtractorOptions::new().with_decode(decode_first);
    Extractor {
        registry: SuffixRegistry::builtin(),
        options,
    }
    .extract_domains(text)
}

/// Extract the distinct root domains found in `text`.
///
/// ```
/// use domain_extractor_r::extract_root_domains;
///
/// let roots = extract_root_domains("hello www.yaklang.com or www.yaklang.io");
/// assert_eq!(roots, vec!["yaklang.com", "yaklang.io"]);
/// ```
pub fn extract_root_domains(text: &str) -> Vec<String> {
    Extractor::default().extract_root_domains(text)
}

/// Extract full matches and root domains from `text`.
pub fn extract_domains_and_roots(text: &str) -> (Vec<String>, Vec<String>) {
    Extractor::default().extract_domains_and_roots(text)
}

/// Root domain of `domain`, or `domain` unchanged when it does not match.
///
/// ```
/// use domain_extractor_r::root_domain_of;
///
/// assert_eq!(root_domain_of("mail.google.com"), "google.com");
/// assert_eq!(root_domain_of("www.bbc.co.uk"), "bbc.co.uk");
/// assert_eq!(root_domain_of("localhost"), "localhost");
/// ```
pub fn root_domain_of(domain: &str) -> String {
    Extractor::default().root_domain_of(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = ExtractorOptions::default();
        assert!(!options.decode);
        assert!(options.case_heuristic);
        assert_eq!(options.label_len_limit, DEFAULT_LABEL_LEN_LIMIT);
    }

    #[test]
    fn test_options_builder() {
        let options = ExtractorOptions::new()
            .with_decode(true)
            .with_label_len_limit(64)
            .with_case_heuristic(false);
        assert!(options.decode);
        assert!(!options.case_heuristic);
        assert_eq!(options.label_len_limit, 64);
    }

    #[test]
    fn test_zero_label_limit_rejected() {
        let options = ExtractorOptions::new().with_label_len_limit(0);
        let result = Extractor::new(SuffixRegistry::builtin(), options);
        assert!(matches!(result, Err(ExtractError::ConfigError(_))));
    }

    #[test]
    fn test_extractor_keeps_options() {
        let options = ExtractorOptions::new()
            .with_decode(true)
            .with_label_len_limit(128)
            .with_case_heuristic(false);
        let extractor = Extractor::new(SuffixRegistry::builtin(), options).unwrap();
        assert!(extractor.options().decode);
        assert!(!extractor.options().case_heuristic);
        assert_eq!(extractor.options().label_len_limit, 128);
        assert_eq!(
            Extractor::default().options().label_len_limit,
            DEFAULT_LABEL_LEN_LIMIT
        );
    }

    #[test]
    fn test_scan_separates_roots() {
        let extraction = Extractor::default().scan("sub.example.com and example.com and foo.org");
        assert_eq!(
            extraction.domains,
            vec!["sub.example.com", "example.com", "foo.org"]
        );
        assert_eq!(extraction.root_domains, vec!["example.com"]);
    }

    #[test]
    fn test_scan_empty() {
        assert!(Extractor::default().scan("").is_empty());
        assert!(Extractor::default().scan("no domains here").is_empty());
    }

    #[test]
    fn test_root_domain_identity_fallback() {
        let extractor = Extractor::default();
        assert_eq!(extractor.root_domain_of(""), "");
        assert_eq!(extractor.root_domain_of("bad.invalidtld"), "bad.invalidtld");
        assert_eq!(extractor.root_domain_of("co.uk"), "co.uk");
    }

    #[test]
    fn test_root_domain_trims_dots() {
        assert_eq!(root_domain_of(".www.example.com."), "example.com");
    }

    #[test]
    fn test_decode_option() {
        let registry = SuffixRegistry::builtin();
        let plain = Extractor::new(registry, ExtractorOptions::new()).unwrap();
        let decoding = Extractor::new(registry, ExtractorOptions::new().with_decode(true)).unwrap();

        let text = "%77%77%77%2e%65%78%61%6d%70%6c%65%2e%63%6f%6d";
        assert!(plain.extract_domains(text).is_empty());
        assert_eq!(
            decoding.extract_domains(text),
            vec!["example.com", "www.example.com"]
        );
    }

    #[test]
    fn test_custom_registry() {
        let registry = SuffixRegistry::default().with_single_suffixes(["internal"]);
        let extractor = Extractor::new(&registry, ExtractorOptions::default()).unwrap();
        assert_eq!(
            extractor.extract_domains("ping db.corp.internal and example.com"),
            vec!["corp.internal", "db.corp.internal"]
        );
    }

    #[test]
    fn test_case_heuristic_option() {
        let registry = SuffixRegistry::builtin();
        let relaxed =
            Extractor::new(registry, ExtractorOptions::new().with_case_heuristic(false)).unwrap();
        assert_eq!(relaxed.extract_domains("myVar.com"), vec!["myVar.com"]);
        assert!(extract_domains("myVar.com", false).is_empty());
    }
}
