// src/web/socio_handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::socio::SocioPayload,
    services::socio_service,
    state::AppState,
};

// GET /api/socios
pub async fn listar(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let socios = socio_service::listar(&state.db_pool).await?;
    Ok(Json(socios))
}

// GET /api/socios/{id}
pub async fn obtener(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    match socio_service::buscar_por_id(&state.db_pool, &id).await? {
        Some(socio) => Ok(Json(socio)),
        None => Err(AppError::NoEncontrado(
            "No existe el socio indicado".to_string(),
        )),
    }
}

// POST /api/socios
pub async fn crear(
    State(state): State<AppState>,
    Json(payload): Json<SocioPayload>,
) -> AppResult<impl IntoResponse> {
    let socio = socio_service::crear(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(socio)))
}

// PATCH /api/socios/{id}
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SocioPayload>,
) -> AppResult<impl IntoResponse> {
    let socio = socio_service::actualizar(&state.db_pool, &id, &payload).await?;
    Ok(Json(socio))
}

// DELETE /api/socios/{id}
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    socio_service::eliminar(&state.db_pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
