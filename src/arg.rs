//! Kernel argument model and classification.
//!
//! A kernel argument is either a bare key (`quiet`) or a key with a value
//! (`console=ttyS0`). Classification compares one desired argument against
//! the token list of a single boot entry and never fails.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt;

/// One kernel boot argument: a key and an optional value.
///
/// `foo` carries no value; `foo=` carries the empty value. The two are
/// distinct and compare as changed against each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KernelArg {
    key: String,
    value: Option<String>,
}

impl KernelArg {
    /// Parse a raw `key` or `key=value` token.
    ///
    /// Splits on the first `=`; everything after it, including nothing,
    /// is the value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((key, value)) => Self {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                key: raw.to_string(),
                value: None,
            },
        }
    }

    /// The argument key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The argument value, if one was given.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for KernelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.key),
            None => write!(f, "{}", self.key),
        }
    }
}

/// Relationship between one desired argument and one boot entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgPresence {
    /// No token in the entry shares the desired key.
    Missing,
    /// The first key match carries the desired value (or both are bare).
    Present,
    /// The first key match carries a different value.
    Changed,
}

/// Classify one desired argument against one entry's argument tokens.
///
/// The first token whose key matches wins; later duplicates never
/// influence the result. Pure and total.
#[must_use]
pub fn classify(desired: &KernelArg, tokens: &[String]) -> ArgPresence {
    for token in tokens {
        let current = KernelArg::parse(token);
        if current.key() == desired.key() {
            return if current.value() == desired.value() {
                ArgPresence::Present
            } else {
                ArgPresence::Changed
            };
        }
    }
    ArgPresence::Missing
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use itertools::Itertools;

    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_bare_key() {
        let arg = KernelArg::parse("quiet");
        assert_eq!(arg.key(), "quiet");
        assert_eq!(arg.value(), None);
    }

    #[test]
    fn parse_key_value() {
        let arg = KernelArg::parse("console=ttyS0");
        assert_eq!(arg.key(), "console");
        assert_eq!(arg.value(), Some("ttyS0"));
    }

    #[test]
    fn parse_empty_value_is_not_bare() {
        let bare = KernelArg::parse("foo");
        let empty = KernelArg::parse("foo=");
        assert_eq!(empty.value(), Some(""));
        assert_ne!(bare, empty);
    }

    #[test]
    fn parse_value_keeps_later_equals_signs() {
        let arg = KernelArg::parse("root=UUID=abc=def");
        assert_eq!(arg.key(), "root");
        assert_eq!(arg.value(), Some("UUID=abc=def"));
    }

    #[test]
    fn display_round_trips() {
        for raw in ["quiet", "console=ttyS0", "foo="] {
            assert_eq!(KernelArg::parse(raw).to_string(), raw);
        }
    }

    // Classification table from the module's observable behavior, checked
    // under every permutation of the entry tokens. Only the first matching
    // key governs the result, so permuting duplicate-key inputs may move a
    // different match first; those rows keep a single key occurrence.
    #[test]
    fn classify_table_under_permutation() {
        let table: &[(ArgPresence, &str, &[&str])] = &[
            (ArgPresence::Present, "foo", &["foo", "bar"]),
            (ArgPresence::Changed, "foo", &["foo=bar", "bar"]),
            (ArgPresence::Missing, "foo", &["bar", "qux"]),
            (ArgPresence::Present, "foo=bar", &["foo=bar", "baz"]),
            (ArgPresence::Changed, "foo=bar", &["foo=baz", "bar"]),
            (ArgPresence::Changed, "foo=bar", &["foo", "baz"]),
            (ArgPresence::Missing, "foo=bar", &["baz=bar", "qux"]),
        ];

        for (expected, raw, entry) in table {
            let desired = KernelArg::parse(raw);
            for perm in entry.iter().permutations(entry.len()) {
                let toks: Vec<String> = perm.iter().map(ToString::to_string).collect();
                assert_eq!(
                    *expected,
                    classify(&desired, &toks),
                    "desired={raw} tokens={toks:?}"
                );
            }
        }
    }

    #[test]
    fn classify_first_match_wins_with_duplicate_keys() {
        let desired = KernelArg::parse("foo");
        assert_eq!(
            ArgPresence::Changed,
            classify(&desired, &tokens(&["foo=bar", "foo", "quux"]))
        );
        assert_eq!(
            ArgPresence::Present,
            classify(&desired, &tokens(&["foo", "foo=bar", "quux"]))
        );
    }

    #[test]
    fn classify_empty_entry_is_missing() {
        let desired = KernelArg::parse("foo");
        assert_eq!(ArgPresence::Missing, classify(&desired, &[]));
    }
}
