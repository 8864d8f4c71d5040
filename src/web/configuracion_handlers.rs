// src/web/configuracion_handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    horario::{conflicto, esquema},
    models::configuracion::{ConfiguracionPayload, EsquemaTipo, JornadaDto},
    services::configuracion_service,
    state::AppState,
};

// GET /api/configuracion/activa
// Si todavía no hay ninguna guardada se responde la configuración de fábrica
// con id: null, y el cliente sabe que el guardado será una creación.
pub async fn obtener_activa(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let configuracion = configuracion_service::obtener_activa(&state.db_pool)
        .await?
        .unwrap_or_else(configuracion_service::configuracion_por_defecto);
    Ok(Json(configuracion))
}

// POST /api/configuracion
pub async fn crear(
    State(state): State<AppState>,
    Json(payload): Json<ConfiguracionPayload>,
) -> AppResult<impl IntoResponse> {
    let configuracion = configuracion_service::crear(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(configuracion)))
}

// PATCH /api/configuracion/{id}
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ConfiguracionPayload>,
) -> AppResult<impl IntoResponse> {
    let configuracion = configuracion_service::actualizar(&state.db_pool, id, &payload).await?;
    Ok(Json(configuracion))
}

// POST /api/configuracion/validar
// Recalcula el informe de conflicto sobre la lista enviada, sin tocar la DB.
// Sin solapes la respuesta es null (el cliente limpia el aviso).
pub async fn validar(Json(jornadas): Json<Vec<JornadaDto>>) -> impl IntoResponse {
    Json(conflicto::detectar_conflicto(&jornadas))
}

// GET /api/configuracion/esquemas/{tipo}
// Jornadas de plantilla de un esquema predefinido; "personalizado" no impone
// plantilla y devuelve la lista vacía.
pub async fn plantilla_esquema(Path(tipo): Path<String>) -> AppResult<impl IntoResponse> {
    match tipo.as_str() {
        "una" | "dos" | "tres" | "personalizado" => {
            let jornadas = esquema::plantilla(EsquemaTipo::desde_str(&tipo)).unwrap_or_default();
            Ok(Json(jornadas))
        }
        _ => Err(AppError::Validacion(format!(
            "Esquema desconocido: '{}'",
            tipo
        ))),
    }
}
