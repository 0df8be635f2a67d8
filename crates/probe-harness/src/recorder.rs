//! Owns the run report and converts check results into recorded outcomes.

use std::error::Error;
use std::future::Future;
use std::time::Instant;

use probe_core::{CheckOutcome, Group, RunReport, SkipReason, SkippedCheck};

use crate::check::CheckResult;
use crate::observer::Observer;

/// Records one outcome per executed check into a [`RunReport`].
///
/// This is the only place a check result becomes an outcome, which is what
/// makes "recorded exactly once" hold.
pub struct Recorder<'o> {
    report: RunReport,
    observer: &'o mut dyn Observer,
    group: Group,
}

impl<'o> Recorder<'o> {
    pub fn new(base_url: impl Into<String>, observer: &'o mut dyn Observer) -> Self {
        Self {
            report: RunReport::new(base_url),
            observer,
            group: Group::BASICS,
        }
    }

    /// Make `group` the group subsequent outcomes are filed under.
    pub fn enter(&mut self, group: Group) {
        tracing::info!(group = group.key, "running group");
        self.group = group;
        self.observer.group_started(&group);
    }

    /// Await one check, record its outcome, and hand back its artifact.
    ///
    /// Transport and decoding errors become failed outcomes; they never
    /// propagate. The artifact is returned only for a passing check.
    pub async fn run<T, F>(&mut self, name: impl Into<String>, check: F) -> Option<T>
    where
        F: Future<Output = CheckResult<T>>,
    {
        let name = name.into();
        let started = Instant::now();
        let result = check.await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (passed, diagnostic, artifact) = match result {
            Ok(checked) => {
                let artifact = if checked.passed { checked.artifact } else { None };
                (checked.passed, checked.diagnostic, artifact)
            }
            Err(error) => (false, error_chain(&error), None),
        };

        if passed {
            tracing::debug!(group = self.group.key, check = %name, %diagnostic, "check passed");
        } else {
            tracing::warn!(group = self.group.key, check = %name, %diagnostic, "check failed");
        }

        let outcome =
            CheckOutcome::new(&self.group, name, passed, diagnostic).with_elapsed_ms(elapsed_ms);
        self.observer.check_finished(&outcome);
        self.report.record(outcome);
        artifact
    }

    /// Skip an entire group whose credential is missing.
    pub fn skip_group(&mut self, group: Group, reason: SkipReason) {
        tracing::warn!(group = group.key, %reason, "skipping group");
        self.group = group;
        self.observer.group_started(&group);
        self.push_skip(SkippedCheck::for_group(&group, reason));
    }

    /// Skip one check of the current group whose resource was never created.
    pub fn skip_check(&mut self, name: &str, reason: SkipReason) {
        tracing::info!(group = self.group.key, check = name, %reason, "skipping check");
        self.push_skip(SkippedCheck::for_check(&self.group, name, reason));
    }

    /// Stop the run before the catalog.
    pub fn halt(&mut self, reason: &str) {
        tracing::error!(reason, "run halted");
        self.observer.halted(reason);
        self.report.halt(reason);
    }

    #[must_use]
    pub fn finish(self) -> RunReport {
        self.report
    }

    fn push_skip(&mut self, skipped: SkippedCheck) {
        self.observer.skipped(&skipped);
        self.report.skip(skipped);
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Checked;
    use probe_client::ClientError;
    use probe_core::Principal;

    #[derive(Default)]
    struct Events(Vec<String>);

    impl Observer for Events {
        fn group_started(&mut self, group: &Group) {
            self.0.push(format!("group:{}", group.key));
        }
        fn check_finished(&mut self, outcome: &CheckOutcome) {
            self.0.push(format!("check:{}:{}", outcome.name, outcome.passed));
        }
        fn skipped(&mut self, skipped: &SkippedCheck) {
            self.0.push(format!("skip:{}", skipped.group));
        }
        fn halted(&mut self, _reason: &str) {
            self.0.push("halt".into());
        }
    }

    #[tokio::test]
    async fn passing_check_returns_artifact() {
        let mut events = Events::default();
        let mut recorder = Recorder::new("http://x", &mut events);
        recorder.enter(Group::COUNTDOWNS);

        let id = recorder
            .run("create countdown", async {
                Ok::<_, ClientError>(Checked::pass("status=200").with_artifact(42))
            })
            .await;

        assert_eq!(id, Some(42));
        let report = recorder.finish();
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].group, "countdowns");
        assert_eq!(events.0, vec!["group:countdowns", "check:create countdown:true"]);
    }

    #[tokio::test]
    async fn failing_check_drops_artifact() {
        let mut events = Events::default();
        let mut recorder = Recorder::new("http://x", &mut events);

        let id = recorder
            .run("create countdown", async {
                Ok::<_, ClientError>(Checked::fail("status=500").with_artifact(42))
            })
            .await;

        assert_eq!(id, None);
        assert!(!recorder.finish().success());
    }

    #[tokio::test]
    async fn error_becomes_failed_outcome() {
        let mut events = Events::default();
        let mut recorder = Recorder::new("http://x", &mut events);

        let result: Option<()> = recorder
            .run("token", async {
                Err(ClientError::MissingField {
                    field: "Result.token".into(),
                    body: "{}".into(),
                })
            })
            .await;

        assert!(result.is_none());
        let report = recorder.finish();
        assert!(!report.outcomes[0].passed);
        assert!(report.outcomes[0].diagnostic.contains("Result.token"));
    }

    #[test]
    fn skipped_group_is_not_counted() {
        let mut events = Events::default();
        let mut recorder = Recorder::new("http://x", &mut events);
        recorder.skip_group(
            Group::ADMIN,
            SkipReason::MissingCredential {
                principal: Principal::Admin,
            },
        );
        let report = recorder.finish();
        assert_eq!(report.summary().total, 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(events.0, vec!["group:admin", "skip:admin"]);
    }

    #[test]
    fn halt_is_reported_to_observer() {
        let mut events = Events::default();
        let mut recorder = Recorder::new("http://x", &mut events);
        recorder.halt("service down");
        assert_eq!(recorder.finish().halted.as_deref(), Some("service down"));
        assert_eq!(events.0, vec!["halt"]);
    }
}
