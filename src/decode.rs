//! Best-effort reversal of layered text obfuscation.
//!
//! Four passes run in order over the whole string:
//! 1. doubled percent-encoding (`%2541%2542`) is unwrapped one level
//! 2. backslash-hex escapes (`\x68`, `\\x68`) become literal bytes
//! 3. JSON unicode escapes (`\u0068`, `\\u0068`) become literal characters
//! 4. percent-encoded runs (`%68%74`) are decoded
//!
//! Runs of consecutive escapes decode together so multi-byte UTF-8 sequences
//! and surrogate pairs come out as single characters. Bytes that are not
//! valid UTF-8 become U+FFFD. A unicode run that fails to decode is left
//! as-is.

use std::borrow::Cow;

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DOUBLE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:%25[0-9a-fA-F]{2}){2,}")
        .expect("DOUBLE_URL_PATTERN: hardcoded regex is invalid")
});

static HEX_ESCAPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\\{1,2}x[0-9a-fA-F]{2})+")
        .expect("HEX_ESCAPE_PATTERN: hardcoded regex is invalid")
});

static UNICODE_ESCAPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\\{1,2}u[0-9a-fA-F]{4})+")
        .expect("UNICODE_ESCAPE_PATTERN: hardcoded regex is invalid")
});

static URL_ENCODED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:%[0-9a-fA-F]{2})+").expect("URL_ENCODED_PATTERN: hardcoded regex is invalid")
});

type Stage = for<'a> fn(&'a str) -> Cow<'a, str>;

const STAGES: [(&str, Stage); 4] = [
    ("double-url", unwrap_double_url),
    ("hex-escape", unescape_hex),
    ("unicode-escape", unescape_unicode),
    ("url-encoded", decode_url),
];

/// Apply all decode passes to `text`.
///
/// # Example
///
/// ```
/// use domain_extractor_r::decode_obfuscated;
///
/// assert_eq!(decode_obfuscated("%68%74%74%70"), "http");
/// assert_eq!(decode_obfuscated(r"\x68\x69"), "hi");
/// assert_eq!(decode_obfuscated(r"\u0079\u0061\u006b"), "yak");
/// ```
pub fn decode_obfuscated(text: &str) -> String {
    let mut current = text.to_string();
    for (name, stage) in STAGES {
        let decoded = match stage(&current) {
            Cow::Owned(decoded) => decoded,
            Cow::Borrowed(_) => continue,
        };
        // An empty substitution result never replaces the input
        if !decoded.is_empty() {
            trace!("decode stage {} rewrote input", name);
            current = decoded;
        }
    }
    current
}

/// `%2541%2542` -> `%41%42`
fn unwrap_double_url(text: &str) -> Cow<'_, str> {
    DOUBLE_URL_PATTERN.replace_all(text, |caps: &Captures| caps[0].replace("%25", "%"))
}

/// `\x68\x69` -> `hi`
fn unescape_hex(text: &str) -> Cow<'_, str> {
    HEX_ESCAPE_PATTERN.replace_all(text, |caps: &Captures| {
        let fragment = &caps[0];
        decode_hex_run(fragment, 'x').unwrap_or_else(|| fragment.to_string())
    })
}

/// `\u0068\u0069` -> `hi`
fn unescape_unicode(text: &str) -> Cow<'_, str> {
    UNICODE_ESCAPE_PATTERN.replace_all(text, |caps: &Captures| {
        let fragment = &caps[0];
        let quoted = format!("\"{}\"", fragment.replace("\\\\", "\\"));
        serde_json::from_str::<String>(&quoted).unwrap_or_else(|_| fragment.to_string())
    })
}

/// `%68%74` -> `ht`
fn decode_url(text: &str) -> Cow<'_, str> {
    URL_ENCODED_PATTERN.replace_all(text, |caps: &Captures| {
        let fragment = &caps[0];
        decode_hex_run(fragment, '%').unwrap_or_else(|| fragment.to_string())
    })
}

/// Decode a run of escapes, each `marker` followed by two hex digits.
///
/// Invalid UTF-8 bytes are replaced with U+FFFD so the rest of the run
/// still decodes.
fn decode_hex_run(fragment: &str, marker: char) -> Option<String> {
    let digits: String = fragment
        .split(marker)
        .skip(1)
        .filter_map(|piece| piece.get(..2))
        .collect();
    let bytes = hex::decode(digits).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regexes_compile() {
        assert!(DOUBLE_URL_PATTERN.is_match("%2541%2542"));
        assert!(HEX_ESCAPE_PATTERN.is_match(r"\x41"));
        assert!(UNICODE_ESCAPE_PATTERN.is_match(r"\u0041"));
        assert!(URL_ENCODED_PATTERN.is_match("%41"));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(decode_obfuscated("%68%74%74%70"), "http");
        assert_eq!(
            decode_obfuscated("visit %79%61%6b%6c%61%6e%67.com"),
            "visit yaklang.com"
        );
    }

    #[test]
    fn test_hex_escapes() {
        assert_eq!(decode_obfuscated(r"\x68\x69"), "hi");
        assert_eq!(decode_obfuscated(r"\\x68\\x69"), "hi");
        assert_eq!(decode_obfuscated(r"a\x2eb"), "a.b");
    }

    #[test]
    fn test_hex_escape_utf8_sequence() {
        assert_eq!(decode_obfuscated(r"\xe4\xbd\xa0"), "你");
    }

    #[test]
    fn test_invalid_hex_byte_does_not_block_run() {
        assert_eq!(decode_obfuscated(r"\xff\x77\x77\x77"), "\u{FFFD}www");

        let domains = crate::extract_domains(r"fetch('\xff\x77\x77\x77.example.com')", true);
        assert!(domains.contains(&"www.example.com".to_string()), "got {:?}", domains);
        assert!(!domains.contains(&"x77.example.com".to_string()), "got {:?}", domains);
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(decode_obfuscated(r"\u0079\u0061\u006b"), "yak");
        assert_eq!(decode_obfuscated(r"\\u0079\\u0061\\u006b"), "yak");
        assert_eq!(decode_obfuscated(r"\ud83d\ude00"), "\u{1F600}");
    }

    #[test]
    fn test_lone_surrogate_left_unchanged() {
        assert_eq!(decode_obfuscated(r"\ud83d"), r"\ud83d");
    }

    #[test]
    fn test_double_url_unwrapped_one_level() {
        assert_eq!(unwrap_double_url("%2568%2569"), "%68%69");
        // Stage 4 then finishes the job
        assert_eq!(decode_obfuscated("%2568%2569"), "hi");
    }

    #[test]
    fn test_single_double_url_group_not_unwrapped() {
        // Needs at least two consecutive %25xx groups
        assert_eq!(unwrap_double_url("%2541"), "%2541");
    }

    #[test]
    fn test_invalid_percent_byte_does_not_block_run() {
        assert_eq!(decode_obfuscated("%ff%77%77%77"), "\u{FFFD}www");

        let text = "q=%ff%77%77%77%2e%65%78%61%6d%70%6c%65%2e%63%6f%6d";
        let domains = crate::extract_domains(text, true);
        assert!(domains.contains(&"www.example.com".to_string()), "got {:?}", domains);
    }

    #[test]
    fn test_malformed_percent_left_unchanged() {
        assert_eq!(decode_obfuscated("100%zz"), "100%zz");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(decode_obfuscated("hello example.com"), "hello example.com");
        assert_eq!(decode_obfuscated(""), "");
    }

    #[test]
    fn test_mixed_layers() {
        let text = r#"{"u":"%77%77%77.example.c\x6fm"}"#;
        assert_eq!(decode_obfuscated(text), r#"{"u":"www.example.com"}"#);
    }
}
