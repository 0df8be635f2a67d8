//! Groups that act as the standard principal.

use probe_client::{segment, with_query};
use serde_json::{Value, json};

use super::{Session, skip_dependents};
use crate::check::{CheckResult, Checked, EndpointCheck, status_diagnostic};
use crate::recorder::Recorder;

pub const UPDATE_COUNTDOWN: &str = "update countdown";
pub const DELETE_COUNTDOWN: &str = "delete countdown";
pub const UPDATE_STUDY_TASK: &str = "update study task";
pub const DELETE_STUDY_TASK: &str = "delete study task";

pub async fn profile(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let checks = vec![
        EndpointCheck::get("get profile", "/user/profile"),
        EndpointCheck::put(
            "update profile",
            "/user/profile",
            json!({ "nickname": "E2E测试用户" }),
        ),
    ];
    session.checks(recorder, checks).await;
}

pub async fn reviews(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let checks = vec![
        EndpointCheck::post(
            "create review",
            "/reviews/",
            review_body(session, "E2E测试老师", "E2E测试课程", "这是E2E测试创建的评价"),
        ),
        EndpointCheck::get("user reviews", "/reviews/user"),
    ];
    session.checks(recorder, checks).await;
}

pub async fn course_table(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let semester = session.fixtures.semester.clone();
    let mut search = vec![("keyword", "计算机".to_string())];
    search.extend(session.paging());
    let checks = vec![
        // 400 means the account has no bound class, which is a valid state.
        EndpointCheck::get(
            "course table",
            with_query("/coursetable/", &[("semester", semester)]),
        )
        .accepting(&[200, 400]),
        EndpointCheck::get("search classes", with_query("/coursetable/search", &search)),
    ];
    session.checks(recorder, checks).await;
}

pub async fn fail_rate(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let mut search = vec![("keyword", "高数".to_string())];
    search.extend(session.paging());
    let checks = vec![
        EndpointCheck::get("search fail rate", with_query("/failrate/search", &search)),
        EndpointCheck::get("random fail rate", "/failrate/rand"),
    ];
    session.checks(recorder, checks).await;
}

pub async fn points(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let checks = vec![
        EndpointCheck::get("user points", "/points/"),
        EndpointCheck::get(
            "points transactions",
            with_query("/points/transactions", &session.paging()),
        ),
        EndpointCheck::get("points stats", "/points/stats"),
    ];
    session.checks(recorder, checks).await;
}

pub async fn contributions(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let checks = vec![
        EndpointCheck::post(
            "create contribution",
            "/contributions/",
            json!({
                "title": "E2E测试投稿",
                "content": "这是E2E测试创建的投稿内容",
                "categories": [1],
            }),
        ),
        EndpointCheck::get(
            "list contributions",
            with_query("/contributions/", &session.paging()),
        ),
        EndpointCheck::get("contribution stats", "/contributions/stats"),
    ];
    session.checks(recorder, checks).await;
}

pub async fn countdowns(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let create = EndpointCheck::post(
        "create countdown",
        "/countdowns/",
        json!({
            "title": "E2E测试倒数日",
            "description": "测试描述",
            "target_date": session.fixtures.target_date,
        }),
    );
    let id = session.create(recorder, create, "id").await;
    session
        .check(recorder, EndpointCheck::get("list countdowns", "/countdowns/"))
        .await;

    let Some(id) = id else {
        skip_dependents(recorder, "countdown", &[UPDATE_COUNTDOWN, DELETE_COUNTDOWN]);
        return;
    };
    let path = format!("/countdowns/{}", segment(&id));
    let checks = vec![
        EndpointCheck::put(
            UPDATE_COUNTDOWN,
            path.clone(),
            json!({ "title": "E2E测试倒数日-已更新" }),
        ),
        EndpointCheck::delete(DELETE_COUNTDOWN, path),
    ];
    session.checks(recorder, checks).await;
}

pub async fn study_tasks(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    let create = EndpointCheck::post(
        "create study task",
        "/study-tasks/",
        json!({
            "title": "E2E测试学习任务",
            "description": "测试任务描述",
            "due_date": session.fixtures.due_date,
            "priority": 2,
        }),
    );
    let id = session.create(recorder, create, "id").await;

    let checks = vec![
        EndpointCheck::get(
            "list study tasks",
            with_query("/study-tasks/", &session.paging()),
        ),
        EndpointCheck::get("study task stats", "/study-tasks/stats"),
        EndpointCheck::get("completed study tasks", "/study-tasks/completed"),
    ];
    session.checks(recorder, checks).await;

    let Some(id) = id else {
        skip_dependents(recorder, "study task", &[UPDATE_STUDY_TASK, DELETE_STUDY_TASK]);
        return;
    };
    let path = format!("/study-tasks/{}", segment(&id));
    let checks = vec![
        EndpointCheck::put(
            UPDATE_STUDY_TASK,
            path.clone(),
            json!({ "title": "E2E测试学习任务-已更新", "status": 2 }),
        ),
        EndpointCheck::delete(DELETE_STUDY_TASK, path),
    ];
    session.checks(recorder, checks).await;
}

pub async fn user_features(session: &Session<'_>, recorder: &mut Recorder<'_>) {
    recorder
        .run("user features", list_user_features(session))
        .await;
}

/// GET `/user/features` and list the granted feature keys.
async fn list_user_features(session: &Session<'_>) -> CheckResult {
    let resp = session
        .client
        .get("/user/features")
        .bearer_opt(session.credential)
        .send()
        .await?;
    if resp.status() != 200 {
        return Ok(Checked::fail(status_diagnostic(&resp)));
    }
    let features = resp
        .envelope()
        .ok()
        .and_then(|envelope| envelope.result_field("features").cloned())
        .unwrap_or_else(|| Value::Array(Vec::new()));
    Ok(Checked::pass(format!("features={features}")))
}

/// Review creation body shared with the idempotency checks.
pub(super) fn review_body(
    session: &Session<'_>,
    teacher_name: &str,
    course_name: &str,
    content: &str,
) -> Value {
    json!({
        "teacher_name": teacher_name,
        "campus": session.fixtures.campus,
        "course_name": course_name,
        "content": content,
        "attitude": 1,
    })
}
