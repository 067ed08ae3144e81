/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use tasknest_api::{app::{build_router, AppState}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```
use crate::config::Config;
use crate::routes::{self, resources};
use axum::{
    routing::get,
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tasknest_shared::models::{todo::Todo, user::User};
use tasknest_shared::repository::Resource;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// is the process-wide shared connection resource; `Arc` keeps the clone
/// cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Mounts the five CRUD routes for one resource type at `path`
///
/// Every resource gets the identical route table:
///
/// ```text
/// POST   {path}        create
/// GET    {path}        list all
/// GET    {path}/:id    fetch one
/// PUT    {path}/:id    full-field update
/// DELETE {path}/:id    delete
/// ```
fn mount_resource<R: Resource + 'static>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(
            path,
            get(resources::list::<R>).post(resources::create::<R>),
        )
        .route(
            &format!("{}/:id", path),
            get(resources::get_by_id::<R>)
                .put(resources::update::<R>)
                .delete(resources::remove::<R>),
        )
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET /                 # Plain-text greeting
/// ├── GET /health           # Health check
/// ├── /users                # Users CRUD (five routes)
/// ├── /todos                # Todos CRUD (five routes)
/// └── (fallback)            # 404 envelope with the requested path
/// ```
///
/// # Middleware Stack
///
/// 1. Request logging (tower-http `TraceLayer`)
/// 2. CORS (permissive; this is a small internal tool)
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health::health_check));

    let router = mount_resource::<User>(router, "/users");
    let router = mount_resource::<Todo>(router, "/todos");

    router
        .fallback(routes::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
