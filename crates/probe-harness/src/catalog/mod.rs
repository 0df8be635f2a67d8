//! The fixed check catalog, one function per feature-area group.
//!
//! Each group function issues its checks in order through the [`Recorder`].
//! Credential gating happens in the runner; a group function only sees the
//! credential it is allowed to use.

pub mod admin;
pub mod auth;
pub mod idempotency;
pub mod public;
pub mod user;

use probe_client::ApiClient;
use probe_config::FixturesConfig;
use probe_core::{Credential, ResourceId, SkipReason};

use crate::check::EndpointCheck;
use crate::recorder::Recorder;

/// What a group's checks run with: the client, at most one credential, and
/// the literal request values.
#[derive(Clone, Copy)]
pub struct Session<'a> {
    pub client: &'a ApiClient,
    pub credential: Option<&'a Credential>,
    pub fixtures: &'a FixturesConfig,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(
        client: &'a ApiClient,
        credential: Option<&'a Credential>,
        fixtures: &'a FixturesConfig,
    ) -> Self {
        Self {
            client,
            credential,
            fixtures,
        }
    }

    /// `page=1&size=<page_size>` query pairs.
    fn paging(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", "1".to_string()),
            ("size", self.fixtures.page_size.to_string()),
        ]
    }

    async fn check(&self, recorder: &mut Recorder<'_>, check: EndpointCheck) {
        recorder
            .run(check.name, check.execute(self.client, self.credential))
            .await;
    }

    async fn checks(&self, recorder: &mut Recorder<'_>, checks: Vec<EndpointCheck>) {
        for check in checks {
            self.check(recorder, check).await;
        }
    }

    /// Run a creation check and return the identifier it yielded.
    async fn create(
        &self,
        recorder: &mut Recorder<'_>,
        check: EndpointCheck,
        field: &str,
    ) -> Option<ResourceId> {
        recorder
            .run(
                check.name,
                check.execute_create(self.client, self.credential, field),
            )
            .await
    }
}

/// Record `names` as skipped because `resource` was never created.
fn skip_dependents(recorder: &mut Recorder<'_>, resource: &str, names: &[&str]) {
    for name in names {
        recorder.skip_check(
            name,
            SkipReason::MissingResource {
                resource: resource.to_string(),
            },
        );
    }
}
