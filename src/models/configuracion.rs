// src/models/configuracion.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Etiquetas cortas de día usadas en `jornadas.dias_semana` (CSV en la DB)
pub const DIAS_SEMANA: [&str; 7] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sa", "Do"];

pub fn semana_completa() -> Vec<String> {
    DIAS_SEMANA.iter().map(|d| d.to_string()).collect()
}

/// Tipo de esquema de jornadas. Se guarda en la DB como texto en minúsculas
/// ("una", "dos", "tres", "personalizado") y viaja igual por JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsquemaTipo {
    Una,
    Dos,
    Tres,
    #[default]
    Personalizado,
}

impl EsquemaTipo {
    pub fn as_str(&self) -> &'static str {
        match self {
            EsquemaTipo::Una => "una",
            EsquemaTipo::Dos => "dos",
            EsquemaTipo::Tres => "tres",
            EsquemaTipo::Personalizado => "personalizado",
        }
    }

    /// Texto de la DB (o de una URL) al enum. Cualquier valor desconocido
    /// cae en `Personalizado`.
    pub fn desde_str(texto: &str) -> Self {
        match texto {
            "una" => EsquemaTipo::Una,
            "dos" => EsquemaTipo::Dos,
            "tres" => EsquemaTipo::Tres,
            _ => EsquemaTipo::Personalizado,
        }
    }
}

// --- Estructuras que espejan las tablas de la DB ---

#[derive(Debug, Clone, FromRow)]
pub struct Configuracion {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub esquema_tipo: String,
    pub activa: bool,
    pub updated_at: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Jornada {
    pub id: i64,
    pub configuracion_id: i64,
    pub codigo: String, // A, B, C... por posición
    pub nombre: String,
    pub descripcion: String,
    pub hora_inicio: String, // HH:MM (24h, representación canónica)
    pub hora_fin: String,
    pub activa: bool,
    pub dias_semana: String, // CSV: "Lu,Ma,Mi"
    pub color: String,
    pub orden: i64,
}

impl Jornada {
    // Comprueba si la jornada aplica a un día (ej: "Lu") según el CSV guardado
    pub fn aplica_al_dia(&self, dia: &str) -> bool {
        self.dias_semana.split(',').any(|d| d.trim() == dia)
    }
}

// --- DTOs del API ---
// Una sola forma canónica por estructura: las jornadas viajan en camelCase
// (horaInicio, horaFin, diasSemana) y la conversión a columnas snake_case
// ocurre únicamente aquí, en la frontera con el almacenamiento.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JornadaDto {
    /// Id persistido, o token temporal generado por el cliente antes de guardar.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    #[serde(default = "activa_por_defecto")]
    pub activa: bool,
    #[serde(default = "semana_completa")]
    pub dias_semana: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub orden: i64,
}

impl JornadaDto {
    pub fn dias_semana_csv(&self) -> String {
        self.dias_semana.join(",")
    }
}

impl From<Jornada> for JornadaDto {
    fn from(j: Jornada) -> Self {
        JornadaDto {
            id: Some(j.id.to_string()),
            codigo: j.codigo,
            nombre: j.nombre,
            descripcion: j.descripcion,
            hora_inicio: j.hora_inicio,
            hora_fin: j.hora_fin,
            activa: j.activa,
            dias_semana: j
                .dias_semana
                .split(',')
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
            color: j.color,
            orden: j.orden,
        }
    }
}

/// Configuración completa tal y como la consume el cliente.
/// `id: None` significa "todavía no persistida": el cliente debe crear (POST)
/// en lugar de actualizar (PATCH).
#[derive(Debug, Clone, Serialize)]
pub struct ConfiguracionConJornadas {
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub esquema_tipo: EsquemaTipo,
    pub activa: bool,
    pub jornadas: Vec<JornadaDto>,
}

/// Cuerpo de creación/actualización: siempre la lista COMPLETA de jornadas,
/// nunca un diff.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfiguracionPayload {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub esquema_tipo: EsquemaTipo,
    #[serde(default = "activa_por_defecto")]
    pub activa: bool,
    pub jornadas: Vec<JornadaDto>,
}

fn activa_por_defecto() -> bool {
    true
}
