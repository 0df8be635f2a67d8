//! Endpoints reachable without a credential.

use probe_client::with_query;

use super::Session;
use crate::check::EndpointCheck;
use crate::recorder::Recorder;

/// Teacher name queried on the public review listing.
const TEACHER_NAME: &str = "测试老师";

pub async fn run(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let checks = vec![
        EndpointCheck::get(
            "reviews by teacher",
            with_query("/reviews/teacher", &[("teacher_name", TEACHER_NAME.into())]),
        ),
        // An unknown key is a valid answer for an unseeded store.
        EndpointCheck::get("config by key", "/config/test_key").accepting(&[200, 404]),
        EndpointCheck::get("heroes", "/heroes/"),
        EndpointCheck::get("notifications", with_query("/notifications/", &session.paging())),
        EndpointCheck::get("categories", "/categories/"),
    ];
    session.checks(recorder, checks).await;
}
