// Stub of the boss-rush `/api` backend for integration tests.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    collections::{HashSet, VecDeque},
    sync::{Arc, Mutex},
    time::Duration,
};

// Known boss ids on the real server.
const BOSSES: [&str; 3] = ["goblin", "ogre", "dragon"];

// One scripted answer for `GET /api/state`.
#[derive(Debug, Clone)]
pub enum StateReply {
    Json(Value),
    Status(u16, &'static str),
    Raw(&'static str),
}

#[derive(Debug, Clone)]
struct Recorded {
    // "METHOD path body"
    line: String,
    content_type: Option<String>,
}

#[derive(Default)]
pub struct Backend {
    // Registered knight names.
    knights: Mutex<HashSet<String>>,
    // Scripted state replies; the last one repeats once the queue drains.
    replies: Mutex<VecDeque<StateReply>>,
    last_reply: Mutex<Option<StateReply>>,
    // Installed as the state script when a run starts, like a fresh world.
    run_script: Mutex<Vec<StateReply>>,
    // Every request, in arrival order.
    requests: Mutex<Vec<Recorded>>,
}

impl Backend {
    pub fn script_state(&self, replies: impl IntoIterator<Item = StateReply>) {
        let mut queue = self.replies.lock().expect("replies mutex poisoned");
        queue.clear();
        queue.extend(replies);
    }

    pub fn script_run(&self, replies: impl IntoIterator<Item = StateReply>) {
        let mut script = self.run_script.lock().expect("run script mutex poisoned");
        *script = replies.into_iter().collect();
    }

    fn begin_run(&self) {
        let script = {
            let mut pending = self.run_script.lock().expect("run script mutex poisoned");
            std::mem::take(&mut *pending)
        };
        if !script.is_empty() {
            self.script_state(script);
        }
    }

    pub fn add_knight(&self, name: &str) {
        self.knights
            .lock()
            .expect("knights mutex poisoned")
            .insert(name.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.recorded()
            .into_iter()
            .map(|request| request.line)
            .collect()
    }

    // Content-Type of every request whose line starts with `prefix`.
    pub fn content_types(&self, prefix: &str) -> Vec<Option<String>> {
        self.recorded()
            .into_iter()
            .filter(|request| request.line.starts_with(prefix))
            .map(|request| request.content_type)
            .collect()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.starts_with(prefix))
            .count()
    }

    fn recorded(&self) -> Vec<Recorded> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }

    fn record(&self, headers: &HeaderMap, line: String) {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(Recorded { line, content_type });
    }

    fn next_reply(&self) -> Option<StateReply> {
        let next = self
            .replies
            .lock()
            .expect("replies mutex poisoned")
            .pop_front();
        let mut last = self.last_reply.lock().expect("reply mutex poisoned");
        if next.is_some() {
            *last = next;
        }
        last.clone()
    }
}

// Bind the stub to an ephemeral port inside the calling test's runtime.
pub async fn spawn_backend() -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend::default());
    let app = router(Arc::clone(&backend));

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("stub backend failed");
    });

    (format!("http://{addr}"), backend)
}

// Poll `condition` until it holds or `timeout` elapses.
pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

fn router(backend: Arc<Backend>) -> Router {
    Router::new()
        .route("/api/state", get(state))
        .route("/api/knight", post(create_knight))
        .route("/api/start_boss/{boss_id}", post(start_boss))
        .route("/api/action", post(action))
        .route("/api/load/{name}", get(load))
        .route("/api/save/{name}", get(save))
        .with_state(backend)
}

fn valid_name(name: &str) -> bool {
    (3..=16).contains(&name.len()) && name.chars().all(|c| c.is_ascii_alphabetic())
}

fn profile(name: &str) -> Value {
    json!({
        "name": name,
        "health": 100,
        "stamina": 100.0,
        "position": [50, 50],
        "gold": 0,
        "skin": "default",
        "progress": {"defeated": []},
    })
}

async fn state(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    backend.record(&headers, "GET /api/state".to_string());
    match backend.next_reply() {
        Some(StateReply::Json(body)) => Json(body).into_response(),
        Some(StateReply::Status(status, body)) => {
            let status = StatusCode::from_u16(status).expect("valid status code");
            (status, body).into_response()
        }
        Some(StateReply::Raw(body)) => body.into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "no state scripted").into_response(),
    }
}

async fn create_knight(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers, format!("POST /api/knight {body}"));
    let name = body["name"].as_str().unwrap_or_default().trim();

    if !valid_name(name) {
        return (
            StatusCode::BAD_REQUEST,
            "Nombre inválido: use 3-16 letras (A-Z/a-z)",
        )
            .into_response();
    }

    let mut knights = backend.knights.lock().expect("knights mutex poisoned");
    if !knights.insert(name.to_string()) {
        return (
            StatusCode::BAD_REQUEST,
            "Ya existe un caballero con ese nombre",
        )
            .into_response();
    }

    (StatusCode::CREATED, Json(profile(name))).into_response()
}

async fn start_boss(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(boss_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers, format!("POST /api/start_boss/{boss_id} {body}"));
    let Some(name) = body["name"].as_str() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name required"})),
        )
            .into_response();
    };

    let known = backend
        .knights
        .lock()
        .expect("knights mutex poisoned")
        .contains(name);
    if !known {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "profile not found"})),
        )
            .into_response();
    }
    if !BOSSES.contains(&boss_id.as_str()) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unknown boss_id: {boss_id}"),
        )
            .into_response();
    }

    backend.begin_run();
    Json(json!({"ok": true, "boss": boss_id})).into_response()
}

async fn action(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers, format!("POST /api/action {body}"));
    Json(json!({"ok": true})).into_response()
}

async fn load(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    backend.record(&headers, format!("GET /api/load/{name}"));
    let known = backend
        .knights
        .lock()
        .expect("knights mutex poisoned")
        .contains(&name);
    if !known {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response();
    }
    Json(profile(&name)).into_response()
}

// Answers with an empty body to exercise the empty-result path.
async fn save(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    backend.record(&headers, format!("GET /api/save/{name}"));
    StatusCode::OK.into_response()
}
