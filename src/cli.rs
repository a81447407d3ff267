//! CLI definition using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use clap::{Parser, ValueEnum};

use crate::grubby::KernelSelector;
use crate::reconcile::TargetState;

/// kargs - declarative kernel boot-argument management via grubby
#[derive(Parser, Debug)]
#[command(name = "kargs")]
#[command(version)]
#[command(about = "Reconcile kernel boot arguments against grubby-managed boot entries")]
#[command(
    long_about = "Declares kernel boot arguments as present or absent and converges the \
grubby-managed boot entries to match, issuing at most one grubby update per direction. \
Re-running against a converged system changes nothing."
)]
pub struct Cli {
    /// Arguments to enforce, each `key` or `key=value`
    #[arg(required = true, value_name = "ARG")]
    pub args: Vec<String>,

    /// Target state for the arguments
    #[arg(short, long, value_enum)]
    pub state: StateArg,

    /// ALL, DEFAULT, or a kernel image path
    #[arg(short, long, default_value = "ALL", value_name = "SELECTOR")]
    pub kernel_path: String,

    /// Compute the diff but do not write
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Output the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Target state as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateArg {
    /// Arguments must exist with the declared value
    Present,
    /// Arguments must not exist
    Absent,
}

impl From<StateArg> for TargetState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Present => Self::Present,
            StateArg::Absent => Self::Absent,
        }
    }
}

impl Cli {
    /// The kernel selector parsed from the command line.
    #[must_use]
    pub fn selector(&self) -> KernelSelector {
        match self.kernel_path.parse() {
            Ok(selector) => selector,
            Err(infallible) => match infallible {},
        }
    }
}
