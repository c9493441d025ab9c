use std::env;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, patch, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use recruitwarx_backend::{middleware::auth, routes, AppState};

static SEQ: AtomicU32 = AtomicU32::new(0);

fn unique(prefix: &str) -> String {
    let n = SEQ.fetch_add(1, Ordering::SeqCst);
    format!("{}_{}_{}", prefix, std::process::id(), n)
}

async fn setup() -> Router {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("TOKEN_TTL_HOURS", "24");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("API_RPS", "1000");

    let _ = recruitwarx_backend::config::init_config();
    let pool = recruitwarx_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let app_state = AppState::new(pool);

    let public_api = Router::new()
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/:id", get(routes::jobs::get_job));

    let authed_api = Router::new()
        .route(
            "/api/applications",
            get(routes::applications::list_applications),
        )
        .route(
            "/api/dashboard/recommended-jobs",
            get(routes::dashboard::recommended_jobs),
        )
        .route("/api/dashboard/stats", get(routes::dashboard::stats))
        .route("/api/profile", get(routes::profile::get_profile))
        .layer(axum::middleware::from_fn(auth::require_auth));

    let recruiter_api = Router::new()
        .route("/api/jobs", post(routes::jobs::create_job))
        .route(
            "/api/applications/:id/status",
            patch(routes::applications::update_status),
        )
        .layer(axum::middleware::from_fn(auth::require_recruiter_or_admin));

    let candidate_api = Router::new()
        .route("/api/jobs/:id/apply", post(routes::jobs::apply_job))
        .layer(axum::middleware::from_fn(auth::require_candidate));

    public_api
        .merge(authed_api)
        .merge(recruiter_api)
        .merge(candidate_api)
        .with_state(app_state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &Router, uri: &str, token: Option<&str>, body: JsonValue) -> axum::response::Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn get_with_token(app: &Router, uri: &str, token: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let req = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn register(app: &Router, username: &str, role: &str, password: &str) -> JsonValue {
    let resp = post_json(
        app,
        "/api/auth/register",
        None,
        json!({
            "first_name": "Test",
            "last_name": "User",
            "email": format!("{}@example.com", username),
            "username": username,
            "phone": "+1-555-0000",
            "role": role,
            "password": password,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let resp = post_json(
        app,
        "/api/auth/login",
        None,
        json!({"username": username, "password": password}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    body["token"].as_str().unwrap().to_string()
}

async fn create_job(app: &Router, token: &str, title: &str, status: &str) -> i64 {
    let resp = post_json(
        app,
        "/api/jobs",
        Some(token),
        json!({
            "title": title,
            "description": "Role description",
            "requirements": "Requirements list",
            "location": "Remote",
            "salary_min": 70000,
            "salary_max": 90000,
            "job_type": "full-time",
            "experience_level": "mid",
            "status": status,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["job_id"].as_i64().unwrap()
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn duplicate_registration_conflicts() {
    let app = setup().await;
    let username = unique("dup");

    register(&app, &username, "candidate", "secret123").await;

    // Same username again.
    let resp = post_json(
        &app,
        "/api/auth/register",
        None,
        json!({
            "first_name": "Other",
            "last_name": "User",
            "email": format!("other_{}@example.com", username),
            "username": username,
            "role": "candidate",
            "password": "secret123",
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));

    // Same email, different username.
    let resp = post_json(
        &app,
        "/api/auth/register",
        None,
        json!({
            "first_name": "Other",
            "last_name": "User",
            "email": format!("{}@example.com", username),
            "username": unique("dup"),
            "role": "candidate",
            "password": "secret123",
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn wrong_password_never_logs_in() {
    let app = setup().await;
    let username = unique("login");
    register(&app, &username, "candidate", "rightpass").await;

    // By username and by email, the wrong password is rejected the same way.
    for identifier in [username.clone(), format!("{}@example.com", username)] {
        let resp = post_json(
            &app,
            "/api/auth/login",
            None,
            json!({"username": identifier, "password": "wrongpass"}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    // The right password still works with either identifier.
    login(&app, &username, "rightpass").await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn duplicate_application_conflicts_without_double_count() {
    let app = setup().await;
    let recruiter = unique("rec");
    let candidate = unique("cand");
    register(&app, &recruiter, "recruiter", "secret123").await;
    register(&app, &candidate, "candidate", "secret123").await;
    let recruiter_token = login(&app, &recruiter, "secret123").await;
    let candidate_token = login(&app, &candidate, "secret123").await;

    let job_id = create_job(&app, &recruiter_token, "Backend Engineer", "active").await;

    let resp = post_json(
        &app,
        &format!("/api/jobs/{}/apply", job_id),
        Some(&candidate_token),
        json!({"cover_letter": "I fit this role"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = get_with_token(&app, &format!("/api/jobs/{}", job_id), None).await;
    let count_after_first = body_json(resp).await["job"]["application_count"]
        .as_i64()
        .unwrap();
    assert_eq!(count_after_first, 1);

    // Second apply is rejected and does not change the counter.
    let resp = post_json(
        &app,
        &format!("/api/jobs/{}/apply", job_id),
        Some(&candidate_token),
        json!({"cover_letter": "again"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));

    let resp = get_with_token(&app, &format!("/api/jobs/{}", job_id), None).await;
    let count_after_second = body_json(resp).await["job"]["application_count"]
        .as_i64()
        .unwrap();
    assert_eq!(count_after_second, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn listing_returns_only_active_jobs() {
    let app = setup().await;
    let recruiter = unique("rec");
    register(&app, &recruiter, "recruiter", "secret123").await;
    let token = login(&app, &recruiter, "secret123").await;

    let marker = unique("marker");
    let active_id = create_job(&app, &token, &format!("Active {}", marker), "active").await;
    let draft_id = create_job(&app, &token, &format!("Draft {}", marker), "draft").await;

    let resp = get_with_token(
        &app,
        &format!("/api/jobs?search={}&limit=100", marker),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let ids: Vec<i64> = body["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&active_id));
    assert!(!ids.contains(&draft_id));
    for job in body["jobs"].as_array().unwrap() {
        assert_eq!(job["status"], json!("active"));
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn recommendations_exclude_applied_jobs() {
    let app = setup().await;
    let recruiter = unique("rec");
    let candidate = unique("cand");
    register(&app, &recruiter, "recruiter", "secret123").await;
    register(&app, &candidate, "candidate", "secret123").await;
    let recruiter_token = login(&app, &recruiter, "secret123").await;
    let candidate_token = login(&app, &candidate, "secret123").await;

    // Mirrors the demo data: four active jobs, candidate applies to three.
    let senior = create_job(&app, &recruiter_token, "Senior Software Engineer", "active").await;
    let designer = create_job(&app, &recruiter_token, "UX/UI Designer", "active").await;
    let analyst = create_job(&app, &recruiter_token, "Data Analyst", "active").await;

    for job_id in [senior, designer, analyst] {
        let resp = post_json(
            &app,
            &format!("/api/jobs/{}/apply", job_id),
            Some(&candidate_token),
            json!({}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let junior = create_job(&app, &recruiter_token, "Junior Frontend Developer", "active").await;

    let resp = get_with_token(&app, "/api/dashboard/recommended-jobs", Some(&candidate_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let ids: Vec<i64> = body["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&junior));
    for applied in [senior, designer, analyst] {
        assert!(!ids.contains(&applied));
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn status_transitions_are_guarded() {
    let app = setup().await;
    let recruiter = unique("rec");
    let candidate = unique("cand");
    register(&app, &recruiter, "recruiter", "secret123").await;
    register(&app, &candidate, "candidate", "secret123").await;
    let recruiter_token = login(&app, &recruiter, "secret123").await;
    let candidate_token = login(&app, &candidate, "secret123").await;

    let job_id = create_job(&app, &recruiter_token, "Platform Engineer", "active").await;
    let resp = post_json(
        &app,
        &format!("/api/jobs/{}/apply", job_id),
        Some(&candidate_token),
        json!({}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let application_id = body_json(resp).await["application_id"].as_i64().unwrap();

    // Hired straight from applied is not a legal move.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/applications/{}/status", application_id))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", recruiter_token))
                .body(Body::from(json!({"status": "hired"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Forward into screening is.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/applications/{}/status", application_id))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", recruiter_token))
                .body(Body::from(
                    json!({"status": "screening", "notes": "looks promising"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // A candidate token cannot drive the pipeline.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/applications/{}/status", application_id))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", candidate_token))
                .body(Body::from(json!({"status": "offer"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn unauthenticated_requests_are_denied() {
    let app = setup().await;

    let resp = get_with_token(&app, "/api/profile", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = get_with_token(&app, "/api/profile", Some("not-a-token")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
