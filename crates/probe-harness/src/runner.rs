//! Run orchestration: liveness, credentials, then the gated check catalog.

use probe_client::ApiClient;
use probe_config::ProbeConfig;
use probe_core::{Credential, Credentials, Group, Principal, RunReport, SkipReason};

use crate::catalog::{Session, admin, auth, idempotency, public, user};
use crate::observer::Observer;
use crate::recorder::Recorder;

/// Halt reason recorded when the liveness probe fails.
pub const LIVENESS_HALT: &str = "liveness probe failed; the service may be down";

/// Liveness check name.
pub const LIVENESS_CHECK: &str = "liveness";

/// One run of the check sequence against one target.
pub struct Harness<'a> {
    client: &'a ApiClient,
    config: &'a ProbeConfig,
    credentials: Credentials,
    recorder: Recorder<'a>,
}

impl<'a> Harness<'a> {
    pub fn new(
        client: &'a ApiClient,
        config: &'a ProbeConfig,
        observer: &'a mut dyn Observer,
    ) -> Self {
        Self {
            client,
            config,
            credentials: Credentials::default(),
            recorder: Recorder::new(client.base_url(), observer),
        }
    }

    /// Record the liveness check and report whether it passed.
    pub async fn probe_liveness(&mut self) -> bool {
        let client = self.client;
        self.recorder.enter(Group::BASICS);
        self.recorder
            .run(LIVENESS_CHECK, async move {
                auth::liveness(client)
                    .await
                    .map(|checked| checked.with_artifact(()))
            })
            .await
            .is_some()
    }

    /// Log in as `principal`, recording the login check.
    ///
    /// Returns `None` when the login failed; the run continues either way.
    pub async fn acquire_credential(&mut self, principal: Principal) -> Option<Credential> {
        let (client, config) = (self.client, self.config);
        let selector = match principal {
            Principal::Standard => config.principals.standard.as_str(),
            Principal::Admin => config.principals.admin.as_str(),
        };
        self.recorder
            .run(
                auth::login_check_name(selector),
                auth::mock_login(client, principal, selector),
            )
            .await
    }

    /// Execute the whole sequence and return the report.
    ///
    /// Only a failed liveness probe stops the run early; every other failure
    /// is recorded and the run proceeds to the end.
    pub async fn run_sequence(mut self) -> RunReport {
        tracing::info!(base_url = self.client.base_url(), "starting run");

        if !self.probe_liveness().await {
            self.recorder.halt(LIVENESS_HALT);
            return self.recorder.finish();
        }

        self.recorder.enter(Group::AUTH);
        for principal in Principal::ALL {
            if let Some(credential) = self.acquire_credential(principal).await {
                self.credentials.set(credential);
            }
        }

        let Self {
            client,
            config,
            credentials,
            mut recorder,
        } = self;
        let fixtures = &config.fixtures;

        recorder.enter(Group::PUBLIC);
        public::run(&Session::new(client, None, fixtures), &mut recorder).await;

        let standard = credentials.get(Principal::Standard);
        match standard {
            Some(credential) => {
                let session = Session::new(client, Some(credential), fixtures);
                run_authenticated(&session, &mut recorder).await;
            }
            None => skip_groups(&mut recorder, &Group::AUTHENTICATED, Principal::Standard),
        }

        match credentials.get(Principal::Admin) {
            Some(credential) => {
                let session = Session::new(client, Some(credential), fixtures);
                recorder.enter(Group::ADMIN);
                admin::moderation(&session, &mut recorder).await;
                recorder.enter(Group::FEATURE_FLAGS);
                admin::feature_flags(&session, &mut recorder).await;
            }
            None => skip_groups(&mut recorder, &Group::ADMINISTRATIVE, Principal::Admin),
        }

        match standard {
            Some(credential) => {
                recorder.enter(Group::IDEMPOTENCY);
                idempotency::run(&Session::new(client, Some(credential), fixtures), &mut recorder)
                    .await;
            }
            None => skip_groups(&mut recorder, &[Group::IDEMPOTENCY], Principal::Standard),
        }

        let report = recorder.finish();
        let summary = report.summary();
        tracing::info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "run finished"
        );
        report
    }
}

/// Groups in [`Group::AUTHENTICATED`] order.
async fn run_authenticated(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    recorder.enter(Group::USER);
    user::profile(session, recorder).await;
    recorder.enter(Group::REVIEWS);
    user::reviews(session, recorder).await;
    recorder.enter(Group::COURSE_TABLE);
    user::course_table(session, recorder).await;
    recorder.enter(Group::FAIL_RATE);
    user::fail_rate(session, recorder).await;
    recorder.enter(Group::POINTS);
    user::points(session, recorder).await;
    recorder.enter(Group::CONTRIBUTIONS);
    user::contributions(session, recorder).await;
    recorder.enter(Group::COUNTDOWNS);
    user::countdowns(session, recorder).await;
    recorder.enter(Group::STUDY_TASKS);
    user::study_tasks(session, recorder).await;
    recorder.enter(Group::USER_FEATURES);
    user::user_features(session, recorder).await;
}

fn skip_groups(recorder: &mut Recorder<'_>, groups: &[Group], principal: Principal) {
    for group in groups {
        recorder.skip_group(*group, SkipReason::MissingCredential { principal });
    }
}
