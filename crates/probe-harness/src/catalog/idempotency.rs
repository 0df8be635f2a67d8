//! Idempotency-key behaviour of review creation.
//!
//! The key is opt-in: requests without one must still be processed, and a
//! repeated key with an identical body must be answered from the replay
//! cache, marked with `X-Idempotency-Replayed: true`.

use probe_client::{ApiResponse, ClientError, idempotency};
use serde_json::Value;

use super::Session;
use super::user::review_body;
use crate::check::{CheckResult, Checked};
use crate::recorder::Recorder;

const REVIEWS_PATH: &str = "/reviews/";

pub const KEYED_REQUEST: &str = "idempotency: keyed request";
pub const DUPLICATE_REQUEST: &str = "idempotency: duplicate request";
pub const UNKEYED_REQUEST: &str = "idempotency: request without key";

pub async fn run(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    recorder.run(KEYED_REQUEST, keyed_request(session)).await;
    recorder
        .run(DUPLICATE_REQUEST, duplicate_request(session))
        .await;
    recorder.run(UNKEYED_REQUEST, unkeyed_request(session)).await;
}

async fn post_review(
    session: &Session<'_>,
    body: &Value,
    key: Option<&str>,
) -> Result<ApiResponse, ClientError> {
    let mut request = session
        .client
        .post(REVIEWS_PATH)
        .bearer_opt(session.credential)
        .json(body);
    if let Some(key) = key {
        request = request.idempotency_key(key);
    }
    request.send().await
}

/// One request with a fresh key is processed normally.
async fn keyed_request(session: &Session<'_>) -> CheckResult {
    let key = idempotency::new_key();
    let body = review_body(session, "幂等性测试老师", "幂等性测试课程", "这是幂等性测试");
    let resp = post_review(session, &body, Some(&key)).await?;
    Ok(Checked::from_status(&resp, &[200]).with_note(format!(
        "key={}",
        idempotency::abbreviate(&key)
    )))
}

/// The same key and body twice: both succeed and the second is a replay.
async fn duplicate_request(session: &Session<'_>) -> CheckResult {
    let key = idempotency::new_key();
    let body = review_body(session, "重复请求测试老师", "重复请求测试课程", "测试重复请求");
    let first = post_review(session, &body, Some(&key)).await?;
    let second = post_review(session, &body, Some(&key)).await?;

    let replayed = second.replayed();
    let passed = first.status() == 200 && second.status() == 200 && replayed == Some("true");
    let diagnostic = format!(
        "first={}, second={}, replayed={}",
        first.status(),
        second.status(),
        replayed.unwrap_or("none")
    );
    Ok(if passed {
        Checked::pass(diagnostic)
    } else {
        Checked::fail(diagnostic)
    })
}

/// Without a key the request is still processed.
async fn unkeyed_request(session: &Session<'_>) -> CheckResult {
    let body = review_body(session, "无Key测试老师", "无Key测试课程", "测试无幂等性Key");
    let resp = post_review(session, &body, None).await?;
    Ok(Checked::from_status(&resp, &[200]))
}
