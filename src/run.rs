//! One reconciliation run: read, diff, optionally apply.
//!
//! A run has exactly two terminal outcomes: converged (no write) and
//! change-required (one write per non-empty direction). Check mode computes
//! the full diff and reports what would change without writing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use serde::Serialize;
use tracing::info;

use crate::arg::KernelArg;
use crate::error::{Error, Result};
use crate::grubby::{Grubby, KernelSelector, UpdateDirection};
use crate::reconcile::{reconcile, TargetState};
use crate::report::parse_info_report;

/// Caller-supplied configuration for one run.
///
/// Check mode is explicit run state so the same engine can be driven
/// repeatedly and deterministically, with no ambient context.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Desired arguments, each `key` or `key=value`.
    pub args: Vec<String>,
    /// Declared target state for every desired argument.
    pub state: TargetState,
    /// Which boot entries to read and write.
    pub kernel_path: KernelSelector,
    /// Compute the diff but do not write.
    pub check_mode: bool,
}

/// The structural result of one run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether the system changed (or, in check mode, would change).
    pub changed: bool,
    /// Arguments added (or, in check mode, that would be added).
    pub args_added: Vec<String>,
    /// Arguments removed (or, in check mode, that would be removed).
    pub args_removed: Vec<String>,
}

/// Execute one reconciliation run against grubby.
///
/// # Errors
///
/// Fails if the desired argument list is empty, if grubby exits non-zero
/// on read or write, or if the report is malformed or empty. No write is
/// attempted after a read or parse failure.
pub fn run(grubby: &Grubby, request: &RunRequest) -> Result<RunOutcome> {
    if request.args.is_empty() {
        return Err(Error::EmptyArgs);
    }
    let desired: Vec<KernelArg> = request.args.iter().map(|raw| KernelArg::parse(raw)).collect();

    let report = grubby.info(&request.kernel_path)?;
    let entries = parse_info_report(&report, &request.kernel_path.to_string())?;
    info!(
        entries = entries.len(),
        state = %request.state,
        kernel_path = %request.kernel_path,
        "reconciling kernel arguments"
    );

    let plan = reconcile(&desired, &entries, request.state);
    if plan.is_noop() {
        return Ok(RunOutcome {
            changed: false,
            args_added: Vec::new(),
            args_removed: Vec::new(),
        });
    }

    let args_added = plan.add_args();
    let args_removed = plan.remove_args();

    if !request.check_mode {
        if !args_added.is_empty() {
            grubby.update(&request.kernel_path, UpdateDirection::Add, &args_added)?;
        }
        if !args_removed.is_empty() {
            grubby.update(&request.kernel_path, UpdateDirection::Remove, &args_removed)?;
        }
    }

    Ok(RunOutcome {
        changed: true,
        args_added,
        args_removed,
    })
}
