// src/models/categoria.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Categoría de socio (infantil, adulto, veterano...). Tabla `categorias`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i64, // SQLite usa i64 para enteros
    pub nombre: String,
    pub descripcion: String,
    pub cuota_mensual: f64,
    pub activa: bool,
}

/// Datos de alta/edición de una categoría, recibidos por JSON.
#[derive(Debug, Deserialize)]
pub struct CategoriaPayload {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub cuota_mensual: f64,
    #[serde(default = "activa_por_defecto")]
    pub activa: bool,
}

fn activa_por_defecto() -> bool {
    true
}
