use crate::chat::rule_based_reply;
use crate::errors::AppError;
use crate::leads;
use crate::metrics::service_interest;
use crate::models::{ChatReply, ChatRequest, HealthStatus, LeadRequest, ServiceMetrics};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use std::sync::Arc;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let metrics = service_interest(&data.leads);
    Html(render_index(&metrics))
}

pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus { ok: true })
}

pub async fn get_metrics(State(state): State<AppState>) -> Result<Json<ServiceMetrics>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(service_interest(&data.leads)))
}

pub async fn chat(Json(payload): Json<ChatRequest>) -> Result<Json<ChatReply>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("Empty message"));
    }

    // No AI provider is wired in; the flag is accepted so existing
    // clients keep working.
    if payload.use_ai {
        debug!("use_ai requested, answering rule-based");
    }

    Ok(Json(ChatReply {
        reply: rule_based_reply(message).to_string(),
    }))
}

pub async fn create_lead(
    State(state): State<AppState>,
    Json(payload): Json<LeadRequest>,
) -> Result<StatusCode, AppError> {
    let lead = leads::normalize(&payload).map_err(AppError::bad_request)?;

    let mut data = state.data.lock().await;
    data.leads.push(lead.clone());
    persist_data(&state.data_path, &data).await?;
    drop(data);

    info!("lead accepted from {}", lead.source);
    if let Some(notifier) = state.notifier.as_ref() {
        let notifier = Arc::clone(notifier);
        tokio::spawn(async move { notifier.send(&lead).await });
    }

    Ok(StatusCode::NO_CONTENT)
}
