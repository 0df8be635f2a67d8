//! Check outcomes and the run report.
//!
//! A [`RunReport`] is created fresh per run. Every executed check appends
//! exactly one [`CheckOutcome`]; checks or whole groups whose prerequisite was
//! missing are listed as [`SkippedCheck`]s and never counted in the tally.

use serde::{Deserialize, Serialize};

use crate::enums::Principal;
use crate::groups::Group;

/// Recorded result of one executed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    /// Key of the feature-area group the check belongs to.
    pub group: String,
    pub passed: bool,
    /// Observed status code, error text, or other free-form detail.
    pub diagnostic: String,
    /// Wall time spent on the check's requests.
    pub elapsed_ms: u64,
}

impl CheckOutcome {
    #[must_use]
    pub fn new(
        group: &Group,
        name: impl Into<String>,
        passed: bool,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.key.to_string(),
            passed,
            diagnostic: diagnostic.into(),
            elapsed_ms: 0,
        }
    }

    #[must_use]
    pub const fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }
}

/// Why a check did not execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The principal's credential was never acquired.
    MissingCredential { principal: Principal },
    /// The create check for this resource yielded no identifier.
    MissingResource { resource: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential { principal } => write!(f, "no {principal} credential"),
            Self::MissingResource { resource } => write!(f, "no {resource} identifier"),
        }
    }
}

/// Checks that were not executed because their prerequisite was absent.
///
/// `check` is `None` when the whole group was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCheck {
    pub group: String,
    pub check: Option<String>,
    pub reason: SkipReason,
}

impl SkippedCheck {
    #[must_use]
    pub fn for_group(group: &Group, reason: SkipReason) -> Self {
        Self {
            group: group.key.to_string(),
            check: None,
            reason,
        }
    }

    #[must_use]
    pub fn for_check(group: &Group, name: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            group: group.key.to_string(),
            check: Some(name.into()),
            reason,
        }
    }
}

/// Derived tally over a report's outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub success: bool,
}

/// Ordered outcomes of one harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub base_url: String,
    pub outcomes: Vec<CheckOutcome>,
    pub skipped: Vec<SkippedCheck>,
    /// Set when the run stopped before the check catalog (liveness failure).
    pub halted: Option<String>,
}

impl RunReport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn skip(&mut self, skipped: SkippedCheck) {
        self.skipped.push(skipped);
    }

    pub fn halt(&mut self, reason: impl Into<String>) {
        self.halted = Some(reason.into());
    }

    /// Failed outcomes in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Look up an outcome by check name.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let total = self.outcomes.len();
        let passed = self.outcomes.iter().filter(|o| o.passed).count();
        let failed = total - passed;
        RunSummary {
            total,
            passed,
            failed,
            skipped: self.skipped.len(),
            success: failed == 0,
        }
    }

    /// `true` iff no executed check failed.
    #[must_use]
    pub fn success(&self) -> bool {
        self.summary().success
    }
}
