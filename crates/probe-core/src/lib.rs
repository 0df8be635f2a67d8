//! # probe-core
//!
//! Core types shared across the contract-probe crates.
//!
//! - Principal roles, check requirements, and bearer credentials
//! - Feature-area groups that partition the check catalog
//! - Identifiers returned by resource-creating checks
//! - Check outcomes, skipped checks, and the run report with its summary

pub mod credential;
pub mod enums;
pub mod errors;
pub mod groups;
pub mod ids;
pub mod report;

pub use credential::{Credential, Credentials};
pub use enums::{Principal, Requirement};
pub use errors::CoreError;
pub use groups::Group;
pub use ids::ResourceId;
pub use report::{CheckOutcome, RunReport, RunSummary, SkipReason, SkippedCheck};
