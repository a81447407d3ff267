//! Parser for the textual report produced by `grubby --info`.
//!
//! The report lists one block per boot entry. Only the `args="..."` line of
//! each block matters here; index, kernel, root, initrd, title and id lines
//! are entry metadata outside the diffing concern and are skipped.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use crate::error::{Error, Result};

/// Marker that opens an argument-list line in grubby output.
const ARGS_MARKER: &str = "args=\"";

/// The argument list of one grubby-reported boot entry.
///
/// A read-only snapshot taken once per run. Token order is preserved as
/// reported; matching does not depend on it beyond first-match-wins.
#[derive(Debug, Clone)]
pub struct BootEntry {
    tokens: Vec<String>,
}

impl BootEntry {
    /// The raw argument tokens of this entry, in reported order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Parse `grubby --info` output into one [`BootEntry`] per reported entry.
///
/// # Errors
///
/// Returns [`Error::MalformedReport`] if an `args="` line does not end with
/// its closing quote, and [`Error::NoEntries`] if the report contains no
/// argument-list line at all. Both are fatal: the caller must not write
/// against a report it cannot trust, and cannot reconcile against an empty
/// universe of entries.
pub fn parse_info_report(output: &str, kernel_path: &str) -> Result<Vec<BootEntry>> {
    let mut entries = Vec::new();

    for line in output.lines() {
        let Some(rest) = line.strip_prefix(ARGS_MARKER) else {
            continue;
        };
        let quoted = rest
            .strip_suffix('"')
            .ok_or_else(|| Error::MalformedReport {
                line: line.to_string(),
            })?;
        entries.push(BootEntry {
            tokens: quoted.split(' ').map(ToString::to_string).collect(),
        });
    }

    if entries.is_empty() {
        return Err(Error::NoEntries {
            kernel_path: kernel_path.to_string(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    const SINGLE_ENTRY: &str = "\
index=0
kernel=/boot/vmlinuz-6.8.0
args=\"foo bar=baz\"
root=/dev/mapper/root
initrd=/boot/initramfs-6.8.0.img
title=\"Fedora Linux\"
id=\"abc123\"
";

    const MULTI_ENTRY: &str = "\
index=0
kernel=/boot/vmlinuz-6.8.0
args=\"foo bar=baz quux\"
root=/dev/mapper/root
index=1
kernel=/boot/vmlinuz-6.7.4
args=\"foo bar=qux\"
root=/dev/mapper/root
";

    #[test]
    fn parses_single_entry() {
        let entries = parse_info_report(SINGLE_ENTRY, "ALL").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tokens(), ["foo", "bar=baz"]);
    }

    #[test]
    fn parses_multiple_entries_in_order() {
        let entries = parse_info_report(MULTI_ENTRY, "ALL").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tokens(), ["foo", "bar=baz", "quux"]);
        assert_eq!(entries[1].tokens(), ["foo", "bar=qux"]);
    }

    #[test]
    fn ignores_metadata_lines() {
        // title/id lines are quoted too; only args= lines must be picked up.
        let entries = parse_info_report(SINGLE_ENTRY, "ALL").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_closing_quote_is_malformed() {
        let report = "index=0\nargs=\"foo bar=baz\n";
        let err = parse_info_report(report, "ALL").unwrap_err();
        assert!(matches!(err, Error::MalformedReport { .. }));
    }

    #[test]
    fn report_without_args_lines_is_no_entries() {
        let report = "index=0\nkernel=/boot/vmlinuz\ntitle=\"whatever\"\n";
        let err = parse_info_report(report, "DEFAULT").unwrap_err();
        match err {
            Error::NoEntries { kernel_path } => assert_eq!(kernel_path, "DEFAULT"),
            other => panic!("expected NoEntries, got {other:?}"),
        }
    }

    #[test]
    fn empty_args_line_yields_single_empty_token() {
        let entries = parse_info_report("args=\"\"\n", "ALL").unwrap();
        assert_eq!(entries[0].tokens(), [""]);
    }
}
