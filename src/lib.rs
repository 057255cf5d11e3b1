//! Domain Extractor - pull domain names out of unstructured text
//!
//! This library finds domains in source code, logs, HTML and configuration
//! dumps without tokenizing the input first:
//! - Single-pass byte scanner over raw text
//! - Public-suffix matching with double-label precedence (`foo.co.uk`)
//! - False-positive suppression for code tokens (`this.list`, `myVar.com`)
//! - Optional decoding of percent, backslash-hex and unicode escapes
//! - Root domain derivation and per-call deduplication
//!
//! # Example
//!
//! ```rust
//! use domain_extractor_r::{extract_domains_and_roots, root_domain_of};
//!
//! let text = "visit http://sub.example.com/path and also bad.invalidtld";
//! let (domains, roots) = extract_domains_and_roots(text);
//! assert_eq!(domains, vec!["sub.example.com"]);
//! assert_eq!(roots, vec!["example.com"]);
//!
//! assert_eq!(root_domain_of("foo.co.uk"), "foo.co.uk");
//! ```
//!
//! # Custom suffixes
//!
//! ```rust
//! use domain_extractor_r::{Extractor, ExtractorOptions, SuffixRegistry};
//!
//! let registry = SuffixRegistry::builtin()
//!     .clone()
//!     .extend_from_suffix_list("internal\ncorp.lan\n")
//!     .unwrap();
//! let extractor = Extractor::new(&registry, ExtractorOptions::new().with_decode(true)).unwrap();
//!
//! let extraction = extractor.scan("db.prod.internal %77%77%77.example.com");
//! assert_eq!(extraction.domains, vec!["db.prod.internal", "www.example.com"]);
//! assert_eq!(extraction.root_domains, vec!["prod.internal", "example.com"]);
//! ```
//!
//! ## Matching rules
//!
//! | Input | Result | Why |
//! |-------|--------|-----|
//! | `example.com` | `example.com` | single suffix `com` |
//! | `foo.co.uk` | `foo.co.uk` | double suffix `co.uk` beats `uk` |
//! | `co.uk` | no match | a bare suffix is not a domain |
//! | `a.com` | no match | root label too short, blacklisted |
//! | `myVar.com` | no match | camelCase root label |
//! | `Example.com` | `Example.com` | casing is preserved |

pub mod decode;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod registry;
pub mod scanner;
pub mod types;

// Re-export commonly used items
pub use decode::decode_obfuscated;
pub use error::{ExtractError, Result};
pub use extract::{
    extract_domains, extract_domains_and_roots, extract_root_domains, has_domain_suffix,
    root_domain_of, Extractor, ExtractorOptions,
};
pub use matcher::{accept_root_label, match_suffix, DomainMatcher};
pub use registry::SuffixRegistry;
pub use scanner::{Scanner, DEFAULT_LABEL_LEN_LIMIT};
pub use types::{Extraction, SuffixKind, SuffixMatch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let code = r#"
// fetch config
const api = "https://api.example.com/v1";
const cdn = 'static.cdn.example.co.uk';
this.list.push(response.data);
const obfuscated = "%73%68%6f%70.example.org";
log("mirror: api.example.com");
"#;

        // Without decoding only the escape's trailing hex digits join the host
        let (domains, roots) = extract_domains_and_roots(code);
        assert_eq!(
            domains,
            vec!["api.example.com", "static.cdn.example.co.uk", "70.example.org"]
        );
        assert_eq!(roots, vec!["example.com", "example.co.uk", "example.org"]);

        // With decoding it surfaces
        let decoded = extract_domains(code, true);
        assert!(decoded.contains(&"shop.example.org".to_string()));
        assert!(decoded.contains(&"example.org".to_string()));

        // Root domains are a fixed point
        for root in &roots {
            assert_eq!(&root_domain_of(root), root);
        }
    }
}
