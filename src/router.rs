//! Route table and shared state

use axum::Router;
use axum::routing::post;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared per-request state. The pool is the only shared resource; it is
/// injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the router. Four fixed POST routes, no path parameters; anything
/// else falls through to axum's default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/yba", post(handlers::insert_yba))
        .route("/ybdb", post(handlers::insert_ybdb))
        .route("/compatibility", post(handlers::insert_compatibility))
        .route("/compatibility_list", post(handlers::list_compatible_ybdb))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
