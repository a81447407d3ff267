#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # kargs
//!
//! Declarative kernel boot-argument management via grubby.
//!
//! This crate provides:
//! - A parser for the `grubby --info` boot-entry report
//! - Classification of desired arguments against reported entries
//! - A reconciliation engine producing a minimal, idempotent change plan
//! - Thin invocation of the grubby binary for the read and write steps

pub mod arg;
pub mod cli;
pub mod error;
pub mod grubby;
pub mod reconcile;
pub mod report;
pub mod run;

// Re-export commonly used items
pub use error::{Error, Result};
