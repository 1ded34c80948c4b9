use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/chat", post(handlers::chat))
        .route("/api/leads", post(handlers::create_lead))
        .with_state(state)
}
