// src/web/historico_handlers.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppResult,
    models::turno::ArchivarPayload,
    services::historico_service::{self, Agrupacion},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct HistoricoQuery {
    pub agrupar: Option<String>, // "dia" (por defecto) o "semana"
    pub desde: Option<String>,
    pub hasta: Option<String>,
}

// GET /api/historico?agrupar=semana&desde=2026-01-01
pub async fn listar(
    State(state): State<AppState>,
    Query(query): Query<HistoricoQuery>,
) -> AppResult<impl IntoResponse> {
    let agrupar = Agrupacion::desde_str(query.agrupar.as_deref().unwrap_or("dia"));
    let grupos = historico_service::listar_agrupado(
        &state.db_pool,
        agrupar,
        query.desde.as_deref(),
        query.hasta.as_deref(),
    )
    .await?;
    Ok(Json(grupos))
}

// POST /api/historico/archivar  (JSON: { "hasta": "2026-08-01" })
pub async fn archivar(
    State(state): State<AppState>,
    Json(payload): Json<ArchivarPayload>,
) -> impl IntoResponse {
    match historico_service::archivar_hasta(&state.db_pool, &payload.hasta).await {
        Ok(msg) => (StatusCode::OK, Json(json!({ "mensaje": msg }))).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response(),
    }
}
