use std::fmt::Write as _;

use probe_core::{RunReport, RunSummary};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::console::RULE;

/// JSON document printed in `--format json` mode.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a RunReport,
    summary: RunSummary,
}

/// Render the finished report in the requested format.
pub fn render(report: &RunReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonReport {
            report,
            summary: report.summary(),
        })?),
    }
}

/// Print the finished report in the requested format.
pub fn output(report: &RunReport, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    println!("{rendered}");
    Ok(())
}

/// Tally, then every failed check with its diagnostic.
fn render_text(report: &RunReport) -> String {
    let summary = report.summary();
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}\nSummary\n{RULE}");
    if let Some(reason) = &report.halted {
        let _ = writeln!(out, "Run halted: {reason}");
    }
    let _ = writeln!(
        out,
        "Total: {} | Passed: {} | Failed: {} | Skipped: {}",
        summary.total, summary.passed, summary.failed, summary.skipped
    );
    if summary.failed > 0 {
        let _ = writeln!(out, "\nFailed checks:");
        for outcome in report.failures() {
            let _ = writeln!(out, "  - {}: {}", outcome.name, outcome.diagnostic);
        }
    }
    out.push_str(RULE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_core::{CheckOutcome, Group, Principal, SkipReason, SkippedCheck};

    fn sample_report() -> RunReport {
        let mut report = RunReport::new("http://localhost:8080");
        report.record(CheckOutcome::new(&Group::PUBLIC, "heroes", true, "status=200"));
        report.record(CheckOutcome::new(
            &Group::COURSE_TABLE,
            "course table",
            false,
            "status=500",
        ));
        report.skip(SkippedCheck::for_group(
            &Group::ADMIN,
            SkipReason::MissingCredential {
                principal: Principal::Admin,
            },
        ));
        report
    }

    #[test]
    fn text_summary_lists_tally_and_failures() {
        let out = render(&sample_report(), OutputFormat::Text).expect("text render should work");
        assert!(out.contains("Total: 2 | Passed: 1 | Failed: 1 | Skipped: 1"));
        assert!(out.contains("Failed checks:"));
        assert!(out.contains("  - course table: status=500"));
        assert!(!out.contains("heroes"));
    }

    #[test]
    fn text_summary_omits_failure_list_when_all_passed() {
        let mut report = RunReport::new("http://x");
        report.record(CheckOutcome::new(&Group::PUBLIC, "heroes", true, "status=200"));
        let out = render(&report, OutputFormat::Text).expect("text render should work");
        assert!(out.contains("Failed: 0"));
        assert!(!out.contains("Failed checks:"));
    }

    #[test]
    fn halted_run_states_reason() {
        let mut report = RunReport::new("http://x");
        report.record(CheckOutcome::new(&Group::BASICS, "liveness", false, "status=503"));
        report.halt("liveness probe failed; the service may be down");
        let out = render(&report, OutputFormat::Text).expect("text render should work");
        assert!(out.contains("Run halted: liveness probe failed"));
    }

    #[test]
    fn json_render_includes_outcomes_and_summary() {
        let out = render(&sample_report(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["base_url"], "http://localhost:8080");
        assert_eq!(parsed["outcomes"].as_array().map(Vec::len), Some(2));
        assert_eq!(parsed["outcomes"][1]["group"], "course_table");
        assert_eq!(parsed["skipped"][0]["reason"]["kind"], "missing_credential");
        assert_eq!(parsed["summary"]["failed"], 1);
        assert_eq!(parsed["summary"]["success"], false);
        assert!(parsed["halted"].is_null());
    }
}
