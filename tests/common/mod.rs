// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process fake of the EcoTrack API for integration tests.
//!
//! The fake listens on an ephemeral localhost port, records every request
//! it receives, and keeps resources in memory. Tokens are real HS256 JWTs
//! so a garbage bearer credential is rejected with 401.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use ecotrack_client::{ApiClient, Gateway, Session};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

const SIGNING_KEY: &[u8] = b"test_jwt_key_32_bytes_minimum!!";

/// One request as seen by the fake server.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

struct StoredUser {
    user: Value,
    username: String,
    password: String,
}

/// Server-side state shared by all handlers.
#[derive(Default)]
pub struct FakeState {
    requests: Mutex<Vec<RecordedRequest>>,
    users: Mutex<Vec<StoredUser>>,
    achievements: Mutex<Vec<Value>>,
    activity_logs: Mutex<Vec<Value>>,
    reports: Mutex<Vec<Value>>,
    goals: Mutex<Vec<Value>>,
    tips: Mutex<Vec<Value>>,
    next_id: AtomicU64,
    /// When set, achievement create/update answer 500.
    pub fail_writes: AtomicBool,
}

impl FakeState {
    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Running fake API.
pub struct FakeApi {
    pub base_url: String,
    pub state: Arc<FakeState>,
}

#[allow(dead_code)]
impl FakeApi {
    /// Bind to an ephemeral port and start serving.
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    /// Client with a fresh in-memory session.
    pub fn client(&self) -> ApiClient {
        self.client_with_session(Session::in_memory())
    }

    pub fn client_with_session(&self, session: Session) -> ApiClient {
        ApiClient::new(Gateway::new(&self.base_url, session))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests matching a method and a path relative to the base URL.
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        let full = format!("/api{}", path);
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == full)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.requests.lock().unwrap().clear();
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn seed_user(&self, username: &str, email: &str, password: &str) -> u64 {
        let user_id = self.state.allocate_id();
        self.state.users.lock().unwrap().push(StoredUser {
            user: json!({
                "user_id": user_id,
                "username": username,
                "email": email,
                "profile_info": null,
            }),
            username: username.to_string(),
            password: password.to_string(),
        });
        user_id
    }

    pub fn seed_achievement(&self, achievement_type: &str, date_awarded: &str) -> u64 {
        let id = self.state.allocate_id();
        self.state.achievements.lock().unwrap().push(json!({
            "achievement_id": id,
            "user_id": 1,
            "achievement_type": achievement_type,
            "date_awarded": date_awarded,
        }));
        id
    }

    /// Store a log directly, bypassing the client's typed payload.
    pub fn seed_activity_log(&self, user_id: u64, activity_type: &str, activity_value: f64) {
        let id = self.state.allocate_id();
        self.state.activity_logs.lock().unwrap().push(json!({
            "log_id": id,
            "user_id": user_id,
            "activity_type": activity_type,
            "activity_value": activity_value,
            "date": "2024-01-10T07:00:00",
        }));
    }

    pub fn seed_report(&self, user_id: u64, report_data: &str) {
        let id = self.state.allocate_id();
        self.state.reports.lock().unwrap().push(json!({
            "report_id": id,
            "user_id": user_id,
            "report_data": report_data,
            "generated_date": "2024-02-01T00:00:00",
        }));
    }

    pub fn seed_goal(&self, user_id: u64, target_reduction: f64, deadline: &str) {
        let id = self.state.allocate_id();
        self.state.goals.lock().unwrap().push(json!({
            "goal_id": id,
            "user_id": user_id,
            "target_reduction": target_reduction,
            "deadline": deadline,
            "achieved": false,
        }));
    }

    pub fn seed_tip(&self, user_id: u64, tip_text: &str) {
        let id = self.state.allocate_id();
        self.state.tips.lock().unwrap().push(json!({
            "tip_id": id,
            "user_id": user_id,
            "tip_text": tip_text,
            "category": "general",
        }));
    }

    pub fn achievement_count(&self) -> usize {
        self.state.achievements.lock().unwrap().len()
    }
}

/// Mint a token the fake will accept.
#[allow(dead_code)]
pub fn create_test_jwt(username: &str) -> String {
    #[derive(Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        exp: usize,
        iat: usize,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: username,
            exp: now + 30 * 60,
            iat: now,
        },
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .unwrap()
}

fn token_is_valid(token: &str) -> bool {
    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct Claims {
        sub: String,
        exp: usize,
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(SIGNING_KEY),
        &Validation::new(Algorithm::HS256),
    )
    .is_ok()
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn router(state: Arc<FakeState>) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login/", post(login))
        .route("/api/activity-logs/", post(create_activity_log))
        .route("/api/users/{id}", get(get_user))
        .route(
            "/api/users/{id}/activities",
            get(user_activities).post(create_user_activity),
        )
        .route("/api/users/{id}/reports", get(user_reports))
        .route("/api/users/{id}/goals", get(user_goals).post(create_user_goal))
        .route("/api/users/{id}/tips", get(user_tips))
        .route("/api/users/{id}/achievements", get(user_achievements))
        .route("/api/users/{id}/emissions", get(user_emissions))
        .route("/api/users/{id}/emission_report", post(create_emission_report))
        .route(
            "/api/achievements",
            get(list_achievements).post(create_achievement),
        )
        .route(
            "/api/achievements/{id}",
            get(get_achievement)
                .put(update_achievement)
                .delete(delete_achievement),
        )
        .layer(middleware::from_fn_with_state(state.clone(), record_and_authenticate))
        .with_state(state)
}

/// Record the request, then reject any bearer token that does not verify.
async fn record_and_authenticate(
    State(state): State<Arc<FakeState>>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
    };
    let authorization = header_value(header::AUTHORIZATION);

    state.requests.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        authorization: authorization.clone(),
        content_type: header_value(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    if let Some(auth) = authorization {
        let valid = auth
            .strip_prefix("Bearer ")
            .map(token_is_valid)
            .unwrap_or(false);
        if !valid {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

// ─── Auth ────────────────────────────────────────────────────

async fn register(State(state): State<Arc<FakeState>>, Json(body): Json<Value>) -> Response {
    let field = |name: &str| body.get(name).and_then(|v| v.as_str()).map(str::to_string);
    let (Some(username), Some(email), Some(password)) =
        (field("username"), field("email"), field("password"))
    else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "");
    };

    let mut users = state.users.lock().unwrap();
    if users.iter().any(|u| u.user["email"] == email.as_str()) {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }

    let user = json!({
        "user_id": state.allocate_id(),
        "username": username,
        "email": email,
        "profile_info": null,
    });
    users.push(StoredUser {
        user: user.clone(),
        username,
        password,
    });
    (StatusCode::CREATED, Json(user)).into_response()
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(State(state): State<Arc<FakeState>>, Form(form): Form<LoginForm>) -> Response {
    let users = state.users.lock().unwrap();
    let ok = users
        .iter()
        .any(|u| u.username == form.username && u.password == form.password);
    if !ok {
        return detail(StatusCode::BAD_REQUEST, "Invalid credentials");
    }

    Json(json!({
        "access_token": create_test_jwt(&form.username),
        "token_type": "bearer",
    }))
    .into_response()
}

/// Requires a bearer credential, unlike the other resources.
async fn get_user(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if !headers.contains_key(header::AUTHORIZATION) {
        return detail(StatusCode::UNAUTHORIZED, "");
    }
    let users = state.users.lock().unwrap();
    match users.iter().find(|u| u.user["user_id"] == id) {
        Some(u) => Json(u.user.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "User not found"),
    }
}

// ─── Per-user resources ──────────────────────────────────────

fn owned_by(items: &Mutex<Vec<Value>>, user_id: u64) -> Vec<Value> {
    items
        .lock()
        .unwrap()
        .iter()
        .filter(|v| v["user_id"] == user_id)
        .cloned()
        .collect()
}

fn store_activity_log(state: &FakeState, mut body: Value) -> Response {
    body["log_id"] = json!(state.allocate_id());
    state.activity_logs.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn create_activity_log(
    State(state): State<Arc<FakeState>>,
    Json(body): Json<Value>,
) -> Response {
    store_activity_log(&state, body)
}

async fn create_user_activity(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Response {
    body["user_id"] = json!(id);
    store_activity_log(&state, body)
}

async fn user_activities(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    Json(owned_by(&state.activity_logs, id)).into_response()
}

async fn user_reports(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    Json(owned_by(&state.reports, id)).into_response()
}

async fn user_goals(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    Json(owned_by(&state.goals, id)).into_response()
}

async fn create_user_goal(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Response {
    body["goal_id"] = json!(state.allocate_id());
    body["user_id"] = json!(id);
    state.goals.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn user_tips(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    Json(owned_by(&state.tips, id)).into_response()
}

async fn user_achievements(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    Json(owned_by(&state.achievements, id)).into_response()
}

async fn user_emissions(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    let total: f64 = owned_by(&state.activity_logs, id)
        .iter()
        .filter_map(|log| log["activity_value"].as_f64())
        .sum();
    Json(total).into_response()
}

async fn create_emission_report(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
) -> Response {
    let count = owned_by(&state.activity_logs, id).len();
    let report = json!({
        "report_id": state.allocate_id(),
        "user_id": id,
        "report_data": format!("{} activities logged", count),
        "generated_date": "2024-03-01T00:00:00",
    });
    state.reports.lock().unwrap().push(report.clone());
    Json(report).into_response()
}

// ─── Achievements ────────────────────────────────────────────

async fn list_achievements(State(state): State<Arc<FakeState>>) -> Response {
    let achievements = state.achievements.lock().unwrap().clone();
    Json(json!({ "status": "success", "achievements": achievements })).into_response()
}

async fn get_achievement(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    let achievements = state.achievements.lock().unwrap();
    match achievements.iter().find(|a| a["achievement_id"] == id) {
        Some(a) => Json(json!({ "status": "success", "achievement": a })).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Achievement not found"),
    }
}

async fn create_achievement(
    State(state): State<Arc<FakeState>>,
    Json(mut body): Json<Value>,
) -> Response {
    if state.fail_writes.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    body["achievement_id"] = json!(state.allocate_id());
    state.achievements.lock().unwrap().push(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "status": "success", "achievement": body })),
    )
        .into_response()
}

async fn update_achievement(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if state.fail_writes.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    let mut achievements = state.achievements.lock().unwrap();
    let Some(existing) = achievements.iter_mut().find(|a| a["achievement_id"] == id) else {
        return detail(StatusCode::NOT_FOUND, "Achievement not found");
    };
    existing["achievement_type"] = body["achievement_type"].clone();
    existing["date_awarded"] = body["date_awarded"].clone();
    Json(json!({ "status": "success", "achievement": existing })).into_response()
}

async fn delete_achievement(State(state): State<Arc<FakeState>>, Path(id): Path<u64>) -> Response {
    let mut achievements = state.achievements.lock().unwrap();
    let before = achievements.len();
    achievements.retain(|a| a["achievement_id"] != id);
    if achievements.len() == before {
        return detail(StatusCode::NOT_FOUND, "Achievement not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
