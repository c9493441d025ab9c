use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use recruitwarx_backend::{
    config::{get_config, init_config},
    database::{pool::create_pool, seed::seed_demo_data},
    middleware::{auth, cors::permissive_cors, rate_limit},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    if config.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/:id", get(routes::jobs::get_job))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let authed_api = Router::new()
        .route("/api/auth/logout", post(routes::auth::logout))
        .route(
            "/api/applications",
            get(routes::applications::list_applications),
        )
        .route(
            "/api/dashboard/recent-applications",
            get(routes::dashboard::recent_applications),
        )
        .route(
            "/api/dashboard/upcoming-interviews",
            get(routes::dashboard::upcoming_interviews),
        )
        .route(
            "/api/dashboard/recommended-jobs",
            get(routes::dashboard::recommended_jobs),
        )
        .route(
            "/api/dashboard/activity-feed",
            get(routes::dashboard::activity_feed),
        )
        .route("/api/dashboard/stats", get(routes::dashboard::stats))
        .route(
            "/api/profile",
            get(routes::profile::get_profile).patch(routes::profile::update_profile),
        )
        .route("/api/profile/stats", get(routes::profile::profile_stats))
        .route("/api/messages", post(routes::messages::send_message))
        .route("/api/messages/unread", get(routes::messages::unread_count))
        .route("/api/messages/:user_id", get(routes::messages::conversation))
        .route(
            "/api/messages/:user_id/read",
            post(routes::messages::mark_read),
        )
        .route(
            "/api/notifications",
            get(routes::notifications::list_notifications),
        )
        .route(
            "/api/notifications/unread",
            get(routes::notifications::unread_count),
        )
        .route(
            "/api/notifications/:id/read",
            post(routes::notifications::mark_read),
        )
        .layer(axum::middleware::from_fn(auth::require_auth));

    let recruiter_api = Router::new()
        .route("/api/jobs", post(routes::jobs::create_job))
        .route(
            "/api/applications/:id/status",
            patch(routes::applications::update_status),
        )
        .route(
            "/api/interviews",
            post(routes::interviews::schedule_interview),
        )
        .route(
            "/api/interviews/:id",
            patch(routes::interviews::update_interview),
        )
        .route(
            "/api/users/:id/profile",
            get(routes::profile::candidate_profile),
        )
        .layer(axum::middleware::from_fn(auth::require_recruiter_or_admin));

    let candidate_api = Router::new()
        .route("/api/jobs/:id/apply", post(routes::jobs::apply_job))
        .route(
            "/api/applications/:id/withdraw",
            post(routes::applications::withdraw),
        )
        .layer(axum::middleware::from_fn(auth::require_candidate));

    let api = Router::new()
        .merge(authed_api)
        .merge(recruiter_api)
        .merge(candidate_api)
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(config.api_rps),
            rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(api)
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
