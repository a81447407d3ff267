//! Invocation of the external `grubby` binary.
//!
//! This module owns the two external interactions of a run: one read
//! (`--info`) producing the raw report, and at most one write per direction
//! (`--update-kernel` with `--args` / `--remove-args`). The store can change
//! between read and write; that window is accepted, not detected.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// Which boot entries a read or write applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelSelector {
    /// Every boot entry grubby manages.
    All,
    /// The default boot entry only.
    Default,
    /// One specific kernel image path or entry identifier.
    Path(String),
}

impl FromStr for KernelSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "ALL" => Self::All,
            "DEFAULT" => Self::Default,
            other => Self::Path(other.to_string()),
        })
    }
}

impl fmt::Display for KernelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "ALL"),
            Self::Default => write!(f, "DEFAULT"),
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

/// Direction of a mutation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDirection {
    /// `--args=...`
    Add,
    /// `--remove-args=...`
    Remove,
}

impl UpdateDirection {
    fn flag(self) -> &'static str {
        match self {
            Self::Add => "--args",
            Self::Remove => "--remove-args",
        }
    }
}

/// Handle to a located grubby binary.
#[derive(Debug, Clone)]
pub struct Grubby {
    bin: PathBuf,
}

impl Grubby {
    /// Locate grubby in PATH.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrubbyNotFound`] if the binary cannot be found.
    pub fn locate() -> Result<Self> {
        let bin = which::which("grubby").map_err(|e| Error::grubby_not_found(e.to_string()))?;
        Ok(Self { bin })
    }

    /// Use an explicit binary path (tests and unusual installs).
    #[must_use]
    pub fn with_path(bin: PathBuf) -> Self {
        Self { bin }
    }

    /// Read the boot-entry report for the selected kernels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrubbyFailed`] on non-zero exit, with captured
    /// stdout and stderr for diagnosis.
    pub fn info(&self, selector: &KernelSelector) -> Result<String> {
        let flag = format!("--info={selector}");
        debug!(grubby = %self.bin.display(), %flag, "reading boot entries");
        let output = self.run("info", &[&flag])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Apply one combined mutation for one direction.
    ///
    /// The arguments are joined with single spaces into a single flag
    /// value, so grubby is invoked once per non-empty direction rather
    /// than once per argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrubbyFailed`] on non-zero exit.
    pub fn update(
        &self,
        selector: &KernelSelector,
        direction: UpdateDirection,
        args: &[String],
    ) -> Result<()> {
        let target = format!("--update-kernel={selector}");
        let change = format!("{}={}", direction.flag(), args.join(" "));
        debug!(grubby = %self.bin.display(), %target, %change, "updating boot entries");
        self.run("update", &[&target, &change])?;
        Ok(())
    }

    fn run(&self, operation: &str, args: &[&str]) -> Result<Output> {
        let output = Command::new(&self.bin).args(args).output()?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(Error::grubby_failed(
                operation,
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn selector_from_str() {
        assert_eq!("ALL".parse::<KernelSelector>().unwrap(), KernelSelector::All);
        assert_eq!(
            "DEFAULT".parse::<KernelSelector>().unwrap(),
            KernelSelector::Default
        );
        assert_eq!(
            "/boot/vmlinuz-6.8.0".parse::<KernelSelector>().unwrap(),
            KernelSelector::Path("/boot/vmlinuz-6.8.0".to_string())
        );
    }

    #[test]
    fn selector_display_round_trips() {
        for raw in ["ALL", "DEFAULT", "/boot/vmlinuz-6.8.0"] {
            let selector: KernelSelector = raw.parse().unwrap();
            assert_eq!(selector.to_string(), raw);
        }
    }

    #[test]
    fn missing_binary_is_grubby_failed_io() {
        let grubby = Grubby::with_path(PathBuf::from("/nonexistent/grubby"));
        let err = grubby.info(&KernelSelector::All).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
