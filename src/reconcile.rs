//! Reconciliation engine: desired arguments vs. reported boot entries.
//!
//! A pure fold over the desired arguments. Each argument is classified
//! against every entry; one entry out of line is enough to require a
//! corrective write, because grubby rewrites the argument uniformly across
//! all selected entries. Re-running against converged entries produces an
//! empty plan.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::collections::BTreeSet;
use std::fmt;

use crate::arg::{classify, ArgPresence, KernelArg};
use crate::report::BootEntry;

/// Declared target state for the desired arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Arguments must exist with the declared value.
    Present,
    /// Arguments must not exist.
    Absent,
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// The minimal set of changes needed to converge.
///
/// Set semantics: an argument out of line in one entry and already correct
/// in another appears exactly once. `BTreeSet` keeps the flattened command
/// lists deterministic. Within one run only one of the two sets can be
/// non-empty, since a run has a single target state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    to_add: BTreeSet<KernelArg>,
    to_remove: BTreeSet<KernelArg>,
}

impl Plan {
    /// True when the system is already converged and nothing must be
    /// applied.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Arguments to add, flattened for one combined grubby invocation.
    #[must_use]
    pub fn add_args(&self) -> Vec<String> {
        self.to_add.iter().map(ToString::to_string).collect()
    }

    /// Arguments to remove, flattened for one combined grubby invocation.
    #[must_use]
    pub fn remove_args(&self) -> Vec<String> {
        self.to_remove.iter().map(ToString::to_string).collect()
    }
}

/// Compute the minimal add/remove plan for the desired arguments.
///
/// Under `Present`, an argument missing or carrying the wrong value in any
/// entry joins the add set. Under `Absent`, an argument present in any
/// entry, with or without the declared value, joins the remove set.
#[must_use]
pub fn reconcile(desired: &[KernelArg], entries: &[BootEntry], target: TargetState) -> Plan {
    desired.iter().fold(Plan::default(), |mut plan, arg| {
        let needs_change = entries.iter().any(|entry| {
            let presence = classify(arg, entry.tokens());
            match target {
                TargetState::Present => match presence {
                    ArgPresence::Missing | ArgPresence::Changed => true,
                    ArgPresence::Present => false,
                },
                TargetState::Absent => match presence {
                    ArgPresence::Present | ArgPresence::Changed => true,
                    ArgPresence::Missing => false,
                },
            }
        });
        if needs_change {
            match target {
                TargetState::Present => {
                    plan.to_add.insert(arg.clone());
                }
                TargetState::Absent => {
                    plan.to_remove.insert(arg.clone());
                }
            }
        }
        plan
    })
}
