//! Single-pass byte scanner.
//!
//! Walks the input one byte at a time, accumulating runs of label bytes
//! (`[0-9A-Za-z-]`) into a label series split on `.`. Any other byte, a
//! `.` with no pending label, or end of input is a boundary: the series is
//! handed to the [`DomainMatcher`] and then discarded.
//!
//! Labels are borrowed slices of the input, so the scan allocates only the
//! series vector and the joined matches.

use log::trace;

use crate::matcher::DomainMatcher;

/// Labels this long or longer are dropped.
pub const DEFAULT_LABEL_LEN_LIMIT: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between labels; no pending label bytes.
    Boundary,
    /// Inside a label that started at this byte offset.
    InLabel(usize),
}

fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Byte scanner emitting every accepted label series.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    matcher: DomainMatcher<'a>,
    label_len_limit: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(matcher: DomainMatcher<'a>) -> Self {
        Self {
            matcher,
            label_len_limit: DEFAULT_LABEL_LEN_LIMIT,
        }
    }

    /// Set the length at which labels are discarded as noise.
    pub fn with_label_len_limit(mut self, limit: usize) -> Self {
        self.label_len_limit = limit;
        self
    }

    /// Scan `text`, calling `on_match` with each accepted series joined by '.'.
    ///
    /// Matches are reported in discovery order; duplicates are not filtered.
    pub fn scan<F>(&self, text: &str, mut on_match: F)
    where
        F: FnMut(String),
    {
        let bytes = text.as_bytes();
        let mut series: Vec<&str> = Vec::new();
        let mut state = State::Boundary;

        for (i, &b) in bytes.iter().enumerate() {
            if is_label_byte(b) {
                if state == State::Boundary {
                    state = State::InLabel(i);
                }
                continue;
            }

            if let State::InLabel(start) = state {
                self.close_label(&text[start..i], &mut series);
                state = State::Boundary;
                if b == b'.' {
                    continue;
                }
            }

            self.flush(&mut series, &mut on_match);
        }

        if let State::InLabel(start) = state {
            self.close_label(&text[start..], &mut series);
        }
        self.flush(&mut series, &mut on_match);
    }

    /// Scan `text` and collect the matches.
    pub fn scan_to_vec(&self, text: &str) -> Vec<String> {
        let mut matches = Vec::new();
        self.scan(text, |m| matches.push(m));
        matches
    }

    fn close_label<'t>(&self, label: &'t str, series: &mut Vec<&'t str>) {
        if label.len() < self.label_len_limit {
            series.push(label);
        }
    }

    fn flush<F>(&self, series: &mut Vec<&str>, on_match: &mut F)
    where
        F: FnMut(String),
    {
        if series.len() > 1 && self.matcher.match_labels(series.as_slice()).is_some() {
            let domain = series.join(".");
            trace!("scanner matched {}", domain);
            on_match(domain);
        }
        series.clear();
    }
}
