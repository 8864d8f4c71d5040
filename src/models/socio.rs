// src/models/socio.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa un socio leído de la tabla `socios`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Socio {
    pub id: String, // UUID
    pub numero_socio: i64,
    pub nombre: String,
    pub apellidos: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub categoria_id: Option<i64>,
    pub activo: bool,
    pub fecha_alta: String, // YYYY-MM-DD
    pub updated_at: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}

/// Socio con el nombre de su categoría resuelto (LEFT JOIN para el listado).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocioVista {
    pub id: String,
    pub numero_socio: i64,
    pub nombre: String,
    pub apellidos: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub categoria_id: Option<i64>,
    pub categoria: Option<String>,
    pub activo: bool,
    pub fecha_alta: String,
}

/// Datos de alta/edición de un socio, recibidos por JSON.
/// `fecha_alta` es opcional: si falta se usa la fecha de hoy.
#[derive(Debug, Deserialize)]
pub struct SocioPayload {
    pub numero_socio: i64,
    pub nombre: String,
    #[serde(default)]
    pub apellidos: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub categoria_id: Option<i64>,
    #[serde(default = "activo_por_defecto")]
    pub activo: bool,
    #[serde(default)]
    pub fecha_alta: Option<String>,
}

fn activo_por_defecto() -> bool {
    true
}
