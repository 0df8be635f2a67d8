//! Live progress lines printed while the run is in flight.

use probe_core::{CheckOutcome, Group, SkippedCheck};
use probe_harness::Observer;

pub const RULE: &str = "============================================================";
const GROUP_RULE: &str = "----------------------------------------";

/// Prints group headers and one line per check to stdout.
///
/// Disabled in JSON and quiet modes so stdout carries only the final report.
pub struct ConsoleObserver {
    enabled: bool,
}

impl ConsoleObserver {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn banner(&self, base_url: &str) {
        if self.enabled {
            println!("{RULE}\ncontract-probe\nBase URL: {base_url}\n{RULE}");
        }
    }
}

impl Observer for ConsoleObserver {
    fn group_started(&mut self, group: &Group) {
        if self.enabled {
            println!("\n{}\n{GROUP_RULE}", group.title);
        }
    }

    fn check_finished(&mut self, outcome: &CheckOutcome) {
        if self.enabled {
            println!("{}", progress_line(outcome));
        }
    }

    fn skipped(&mut self, skipped: &SkippedCheck) {
        if self.enabled {
            println!("{}", skip_line(skipped));
        }
    }

    fn halted(&mut self, reason: &str) {
        if self.enabled {
            println!("❌ {reason}");
        }
    }
}

pub fn progress_line(outcome: &CheckOutcome) -> String {
    let marker = if outcome.passed { "✅ PASS" } else { "❌ FAIL" };
    format!(
        "{marker}: {} - {} ({} ms)",
        outcome.name, outcome.diagnostic, outcome.elapsed_ms
    )
}

pub fn skip_line(skipped: &SkippedCheck) -> String {
    let target = skipped.check.as_deref().unwrap_or("all checks");
    format!("⏭  SKIP: {target} - {}", skipped.reason)
}
