// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error en la base de datos: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Error de migración de la base de datos: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Error de variable de entorno: {0}")]
    EnvVarError(#[from] std::env::VarError),

    // Datos de entrada que no pasan la validación (nombre vacío, límites, etc.)
    #[error("{0}")]
    Validacion(String),

    // Conflictos de negocio: horarios solapados, turno ya reservado...
    #[error("{0}")]
    Conflicto(String),

    #[error("{0}")]
    NoEncontrado(String),

    #[error("Error interno inesperado")]
    InternalServerError,
}

// Cómo convertir AppError en una respuesta HTTP (JSON, esto es una API)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loguea el error detallado en el servidor
        tracing::error!("Error procesado: {:?}", self);

        let (status, mensaje) = match &self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al acceder a los datos.".to_string(),
            ),
            AppError::EnvVarError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error de configuración.".to_string(),
            ),
            // Los mensajes de validación/conflicto sí llegan al usuario tal cual
            AppError::Validacion(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflicto(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::NoEncontrado(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocurrió un error inesperado.".to_string(),
            ),
        };

        (status, Json(json!({ "error": mensaje }))).into_response()
    }
}

// Tipo Result estándar para la aplicación
pub type AppResult<T = ()> = Result<T, AppError>;
