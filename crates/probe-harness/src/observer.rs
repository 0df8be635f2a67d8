//! Progress callbacks fired while a run is in flight.
//!
//! The harness never prints; the binary implements [`Observer`] to render
//! progress lines, and tests implement it to capture event order.

use probe_core::{CheckOutcome, Group, SkippedCheck};

pub trait Observer {
    /// A feature-area group is about to run (or be skipped).
    fn group_started(&mut self, _group: &Group) {}

    /// A check executed and its outcome was recorded.
    fn check_finished(&mut self, _outcome: &CheckOutcome) {}

    /// A check or whole group was skipped for a missing prerequisite.
    fn skipped(&mut self, _skipped: &SkippedCheck) {}

    /// The run stopped before the check catalog.
    fn halted(&mut self, _reason: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}
