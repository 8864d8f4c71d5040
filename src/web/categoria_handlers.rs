// src/web/categoria_handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::categoria::CategoriaPayload,
    services::categoria_service,
    state::AppState,
};

// GET /api/categorias
pub async fn listar(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categorias = categoria_service::listar(&state.db_pool).await?;
    Ok(Json(categorias))
}

// GET /api/categorias/{id}
pub async fn obtener(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    match categoria_service::buscar_por_id(&state.db_pool, id).await? {
        Some(categoria) => Ok(Json(categoria)),
        None => Err(AppError::NoEncontrado(
            "No existe la categoría indicada".to_string(),
        )),
    }
}

// POST /api/categorias
pub async fn crear(
    State(state): State<AppState>,
    Json(payload): Json<CategoriaPayload>,
) -> AppResult<impl IntoResponse> {
    let categoria = categoria_service::crear(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(categoria)))
}

// PATCH /api/categorias/{id}
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoriaPayload>,
) -> AppResult<impl IntoResponse> {
    let categoria = categoria_service::actualizar(&state.db_pool, id, &payload).await?;
    Ok(Json(categoria))
}

// DELETE /api/categorias/{id}
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    categoria_service::eliminar(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
