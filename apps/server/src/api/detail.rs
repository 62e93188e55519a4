use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use paydeck_core::{ActionOutcome, ActivePanel, DetailService, DetailViewModel, PanelView};
use uuid::Uuid;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionRequest {
    entity_id: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionResponse {
    session_id: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangeEntityRequest {
    entity_id: String,
}

#[derive(serde::Deserialize)]
struct SelectTabRequest {
    index: usize,
}

fn lookup_session(state: &AppState, session_id: &str) -> Result<Arc<DetailService>, ApiError> {
    state
        .sessions
        .read()
        .unwrap()
        .get(session_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("No detail session {}", session_id)))
}

/// Create a detail session and start fetching the entity's sources.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateSessionRequest>,
) -> ApiResult<Json<CreateSessionResponse>> {
    let service = Arc::new(DetailService::new(
        state.gateway.clone(),
        state.fallbacks.clone(),
    ));
    service.on_identifier_change(&body.entity_id)?;

    let session_id = Uuid::new_v4().to_string();
    state
        .sessions
        .write()
        .unwrap()
        .insert(session_id.clone(), service);
    tracing::info!(
        "Created detail session {} for entity {}",
        session_id,
        body.entity_id
    );
    Ok(Json(CreateSessionResponse { session_id }))
}

/// Current merged view model of the session.
async fn get_model(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DetailViewModel>> {
    let service = lookup_session(&state, &session_id)?;
    Ok(Json(service.current_model()))
}

/// Projection of the session's active panel.
async fn get_panel(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PanelView>> {
    let service = lookup_session(&state, &session_id)?;
    Ok(Json(service.active_panel_view()))
}

/// Point the session at a different entity; all sources re-fetch.
async fn change_entity(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChangeEntityRequest>,
) -> ApiResult<StatusCode> {
    let service = lookup_session(&state, &session_id)?;
    service.on_identifier_change(&body.entity_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Select the active tab, returning the panel it resolved to.
async fn select_tab(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectTabRequest>,
) -> ApiResult<Json<ActivePanel>> {
    let service = lookup_session(&state, &session_id)?;
    Ok(Json(service.select_tab(body.index)))
}

async fn activate_entity(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ActionOutcome>> {
    let service = lookup_session(&state, &session_id)?;
    let entity_id = service.current_entity_id().unwrap_or_default();
    let outcome = service.activate(&entity_id).await?;
    Ok(Json(outcome))
}

async fn suspend_entity(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ActionOutcome>> {
    let service = lookup_session(&state, &session_id)?;
    let entity_id = service.current_entity_id().unwrap_or_default();
    let outcome = service.suspend(&entity_id).await?;
    Ok(Json(outcome))
}

/// Tear the session down and drop it from the registry.
async fn delete_session(
    Path(session_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let service = state
        .sessions
        .write()
        .unwrap()
        .remove(&session_id)
        .ok_or_else(|| ApiError::NotFound(format!("No detail session {}", session_id)))?;
    service.teardown();
    tracing::info!("Deleted detail session {}", session_id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/detail/sessions", post(create_session))
        .route("/detail/sessions/{id}", delete(delete_session))
        .route("/detail/sessions/{id}/model", get(get_model))
        .route("/detail/sessions/{id}/panel", get(get_panel))
        .route("/detail/sessions/{id}/entity", post(change_entity))
        .route("/detail/sessions/{id}/tab", post(select_tab))
        .route("/detail/sessions/{id}/actions/activate", post(activate_entity))
        .route("/detail/sessions/{id}/actions/suspend", post(suspend_entity))
}
