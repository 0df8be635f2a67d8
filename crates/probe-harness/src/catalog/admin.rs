//! Groups that act as the administrator principal.

use probe_client::{segment, with_query};
use probe_core::ResourceId;
use serde_json::json;
use uuid::Uuid;

use super::{Session, skip_dependents};
use crate::check::{CheckResult, Checked, EndpointCheck};
use crate::recorder::Recorder;

/// Prefix of feature keys created by the run.
pub const FEATURE_KEY_PREFIX: &str = "beta_e2e_test_";

pub const UPDATE_FEATURE: &str = "update feature";
pub const GRANT_FEATURE: &str = "grant feature";
pub const LIST_WHITELIST: &str = "list feature whitelist";
pub const USER_FEATURE_GRANTS: &str = "user feature grants";
pub const REVOKE_FEATURE: &str = "revoke feature";
pub const DELETE_FEATURE: &str = "delete feature";

pub async fn moderation(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let page_size = session.fixtures.page_size.to_string();
    let checks = vec![
        EndpointCheck::get("list all reviews", "/reviews/"),
        EndpointCheck::get(
            "list admin notifications",
            with_query("/admin/notifications/", &session.paging()),
        ),
        EndpointCheck::get("notification stats", "/admin/notifications/stats"),
        EndpointCheck::get(
            "search heroes",
            with_query(
                "/heroes/search",
                &[
                    ("q", String::new()),
                    ("page", "1".into()),
                    ("size", page_size.clone()),
                ],
            ),
        ),
        EndpointCheck::get(
            "search configs",
            with_query(
                "/config/search",
                &[
                    ("query", String::new()),
                    ("page", "1".into()),
                    ("size", page_size),
                ],
            ),
        ),
    ];
    session.checks(recorder, checks).await;
}

/// `beta_e2e_test_` followed by eight random hex digits.
#[must_use]
pub fn new_feature_key() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{FEATURE_KEY_PREFIX}{}", &simple[..8])
}

pub async fn feature_flags(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let key = recorder
        .run("create feature", create_feature(session, new_feature_key()))
        .await;
    session
        .check(recorder, EndpointCheck::get("list features", "/admin/features"))
        .await;

    let Some(key) = key else {
        skip_dependents(
            recorder,
            "feature",
            &[
                UPDATE_FEATURE,
                GRANT_FEATURE,
                LIST_WHITELIST,
                USER_FEATURE_GRANTS,
                REVOKE_FEATURE,
                DELETE_FEATURE,
            ],
        );
        return;
    };

    let feature = format!("/admin/features/{}", segment(&key));
    let user_id = session.fixtures.whitelist_user_id;
    let checks = vec![
        EndpointCheck::put(
            UPDATE_FEATURE,
            feature.clone(),
            json!({
                "feature_name": "E2E测试功能-已更新",
                "description": "更新后的描述",
            }),
        ),
        EndpointCheck::post(
            GRANT_FEATURE,
            format!("{feature}/whitelist"),
            json!({ "user_id": user_id }),
        ),
        EndpointCheck::get(
            LIST_WHITELIST,
            with_query(
                &format!("{feature}/whitelist"),
                &[("page", "1".into()), ("page_size", "20".into())],
            ),
        ),
        EndpointCheck::get(USER_FEATURE_GRANTS, format!("/admin/users/{user_id}/features")),
        EndpointCheck::delete(REVOKE_FEATURE, format!("{feature}/whitelist/{user_id}")),
        EndpointCheck::delete(DELETE_FEATURE, feature),
    ];
    session.checks(recorder, checks).await;
}

/// POST a new enabled feature; the generated key is the artifact.
async fn create_feature(session: &Session<'_>, key: String) -> CheckResult<ResourceId> {
    let resp = session
        .client
        .post("/admin/features")
        .bearer_opt(session.credential)
        .json(&json!({
            "feature_key": key,
            "feature_name": "E2E测试功能",
            "description": "这是E2E测试创建的功能",
            "is_enabled": true,
        }))
        .send()
        .await?;
    let checked = Checked::from_status(&resp, &[200]).with_note(format!("key={key}"));
    if !checked.passed {
        return Ok(checked);
    }
    Ok(checked.with_artifact(ResourceId::new(key)?))
}
