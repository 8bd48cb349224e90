use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    CreateReadingRequest, ImportReadingsRequest, ImportReadingsResponse, Reading,
    UpdateReadingRequest,
};
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct DeleteParams {
    secret_code: String,
}

fn check_secret(state: &AppState, provided: &str) -> Result<()> {
    if provided != state.config.auth.secret_code {
        return Err(AppError::Unauthorized("Incorrect secret code".to_string()));
    }
    Ok(())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Reading>>> {
    let readings = state.service.list().await?;
    Ok(Json(readings))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateReadingRequest>,
) -> Result<(StatusCode, Json<Reading>)> {
    check_secret(&state, &request.secret_code)?;

    let reading = state.service.create(request.date, request.value).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReadingRequest>,
) -> Result<Json<Reading>> {
    check_secret(&state, &request.secret_code)?;

    let reading = state
        .service
        .update(id, request.date, request.value)
        .await?;
    Ok(Json(reading))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode> {
    check_secret(&state, &params.secret_code)?;

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn import(
    State(state): State<AppState>,
    Json(request): Json<ImportReadingsRequest>,
) -> Result<Json<ImportReadingsResponse>> {
    let imported = state.service.import(request.readings).await?;
    Ok(Json(ImportReadingsResponse { imported }))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}
