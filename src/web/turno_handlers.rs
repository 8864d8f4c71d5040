// src/web/turno_handlers.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppResult,
    models::turno::{GenerarTurnosPayload, ReservaPayload, TurnoPayload},
    services::turno_service,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct TurnosQuery {
    pub fecha: String,
}

// GET /api/turnos?fecha=2026-08-06
pub async fn listar(
    State(state): State<AppState>,
    Query(query): Query<TurnosQuery>,
) -> AppResult<impl IntoResponse> {
    let turnos = turno_service::listar_por_fecha(&state.db_pool, &query.fecha).await?;
    Ok(Json(turnos))
}

// POST /api/turnos/generar  (JSON: { "fecha": "2026-08-06", "canchas": 4 })
pub async fn generar(
    State(state): State<AppState>,
    Json(payload): Json<GenerarTurnosPayload>,
) -> impl IntoResponse {
    match turno_service::generar_turnos_dia(&state.db_pool, &payload.fecha, payload.canchas).await
    {
        Ok(msg) => (StatusCode::OK, Json(json!({ "mensaje": msg }))).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response(),
    }
}

// POST /api/turnos
pub async fn crear(
    State(state): State<AppState>,
    Json(payload): Json<TurnoPayload>,
) -> AppResult<impl IntoResponse> {
    let turno = turno_service::crear(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(turno)))
}

// POST /api/turnos/{id}/reservar
pub async fn reservar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservaPayload>,
) -> AppResult<impl IntoResponse> {
    let mensaje = turno_service::reservar(&state.db_pool, &id, &payload.socio_id).await?;
    Ok(Json(json!({ "mensaje": mensaje })))
}

// POST /api/turnos/{id}/liberar
pub async fn liberar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mensaje = turno_service::liberar(&state.db_pool, &id).await?;
    Ok(Json(json!({ "mensaje": mensaje })))
}

// DELETE /api/turnos/{id}
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    turno_service::eliminar(&state.db_pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
