//! Churn generation and measurement.
//!
//! Each iteration picks a candidate file ([`scanner`]), rewrites one eligible
//! line ([`mutation`]), commits through a [`crate::git::VersionControl`], and
//! samples the metadata directory size ([`sampler`]). [`run_loop`] drives the
//! iterations and [`report`] formats the table and the growth summary.

pub mod mutation;
pub mod report;
pub mod run_loop;
pub mod sampler;
pub mod scanner;

pub use report::{CommitRecord, RunSummary};
pub use run_loop::{RunStatistics, run_churn};
