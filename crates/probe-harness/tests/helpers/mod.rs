//! In-process stub of the API under test, served by `tiny_http`.
//!
//! The stub records every request it receives and answers through a handler
//! closure. [`HappyApi`] implements a fully conforming API; tests override
//! individual routes and fall through to it.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use probe_config::ProbeConfig;
use serde_json::{Value, json};

pub const ADMIN_TOKEN: &str = "abc123";
pub const STANDARD_TOKEN: &str = "tok-basic";
pub const COUNTDOWN_ID: u64 = 42;
pub const STUDY_TASK_ID: u64 = 7;

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path including the query string.
    pub url: String,
    pub authorization: Option<String>,
    pub idempotency_key: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn is(&self, method: &str, path: &str) -> bool {
        self.method == method && self.path() == path
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

/// What the stub answers.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl Reply {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    /// `200` with a success envelope around `result`.
    pub fn ok(result: Value) -> Self {
        Self::json(
            200,
            &json!({
                "StatusCode": 0,
                "StatusMessage": "Success",
                "RequestId": "stub",
                "Result": result,
            }),
        )
    }

    pub fn status(status: u16) -> Self {
        Self::json(
            status,
            &json!({"StatusCode": i64::from(status), "StatusMessage": "stub failure"}),
        )
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A conforming API: healthy, issues tokens, returns ids, replays keys.
#[derive(Default)]
pub struct HappyApi {
    seen_keys: HashSet<String>,
}

impl HappyApi {
    pub fn reply(&mut self, req: &Recorded) -> Reply {
        match (req.method.as_str(), req.path()) {
            ("GET", "/health") => Reply::json(200, &json!({"status": "ok"})),
            ("POST", "/api/v0/auth/mock-wechat-login") => {
                let token = match req.json()["test_user"].as_str() {
                    Some("admin") => ADMIN_TOKEN.to_string(),
                    Some(user) => format!("tok-{user}"),
                    None => return Reply::status(400),
                };
                Reply::ok(json!({ "token": token }))
            }
            ("POST", "/api/v0/countdowns/") => Reply::ok(json!({ "id": COUNTDOWN_ID })),
            ("POST", "/api/v0/study-tasks/") => Reply::ok(json!({ "id": STUDY_TASK_ID })),
            ("POST", "/api/v0/contributions/") => Reply::ok(json!({ "id": 3 })),
            ("GET", "/api/v0/user/features") => Reply::ok(json!({ "features": ["beta"] })),
            ("POST", "/api/v0/reviews/") => match &req.idempotency_key {
                Some(key) if !self.seen_keys.insert(key.clone()) => {
                    Reply::ok(json!({})).with_header("X-Idempotency-Replayed", "true")
                }
                _ => Reply::ok(json!({})),
            },
            _ => Reply::ok(json!({})),
        }
    }
}

/// A running stub server; stopped on drop.
pub struct StubApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl StubApi {
    pub fn start<H>(mut handler: H) -> Self
    where
        H: FnMut(&Recorded) -> Reply + Send + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stop = Arc::new(AtomicBool::new(false));

        let thread = {
            let requests = Arc::clone(&requests);
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let mut request = match server.recv_timeout(Duration::from_millis(20)) {
                        Ok(Some(request)) => request,
                        Ok(None) => continue,
                        Err(_) => break,
                    };
                    let recorded = record(&mut request);
                    let reply = handler(&recorded);
                    requests.lock().unwrap().push(recorded);

                    let mut response = tiny_http::Response::from_string(reply.body)
                        .with_status_code(reply.status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .unwrap(),
                        );
                    for (name, value) in &reply.headers {
                        response = response.with_header(
                            tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes())
                                .unwrap(),
                        );
                    }
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            stop,
            thread: Some(thread),
        }
    }

    /// A stub that behaves like [`HappyApi`] everywhere.
    pub fn happy() -> Self {
        let mut api = HappyApi::default();
        Self::start(move |req| api.reply(req))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Configuration pointing at this stub.
    pub fn config(&self) -> ProbeConfig {
        let mut config = ProbeConfig::default();
        config.target.base_url = self.base_url.clone();
        config.target.timeout_secs = 5;
        config
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn record(request: &mut tiny_http::Request) -> Recorded {
    let header = |name: &str| {
        request
            .headers()
            .iter()
            .find(|h| h.field.to_string().eq_ignore_ascii_case(name))
            .map(|h| h.value.to_string())
    };
    let authorization = header("Authorization");
    let idempotency_key = header("X-Idempotency-Key");
    let method = request.method().to_string();
    let url = request.url().to_string();

    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);

    Recorded {
        method,
        url,
        authorization,
        idempotency_key,
        body,
    }
}
