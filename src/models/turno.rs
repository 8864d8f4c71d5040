// src/models/turno.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Turno de cancha leído de la tabla `turnos`. Las horas se copian de la
// jornada en el momento de crearlo para que el histórico quede congelado
// aunque la configuración cambie después.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Turno {
    pub id: String, // UUID
    pub fecha: String, // YYYY-MM-DD
    pub cancha: i64,
    pub jornada_codigo: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub socio_id: Option<String>,
    pub estado: String, // 'Libre' | 'Reservado'
    pub creado_en: Option<NaiveDateTime>,
}

/// Turno con el nombre del socio resuelto (LEFT JOIN para el listado diario).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TurnoVista {
    pub id: String,
    pub fecha: String,
    pub cancha: i64,
    pub jornada_codigo: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub socio_id: Option<String>,
    pub socio: Option<String>,
    pub estado: String,
}

/// Fila de la tabla `turnos_historico`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TurnoHistorico {
    pub id: String,
    pub fecha: String,
    pub cancha: i64,
    pub jornada_codigo: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub socio_id: Option<String>,
    pub estado: String,
    pub archivado_en: Option<NaiveDateTime>,
}

/// Grupo de turnos históricos bajo una clave de día o de semana ISO.
#[derive(Debug, Clone, Serialize)]
pub struct GrupoHistorico {
    pub clave: String,    // "2026-08-03" o "2026-W32"
    pub etiqueta: String, // "Lunes, 03/08" o "Semana 32 (2026)"
    pub turnos: Vec<TurnoHistorico>,
}

// --- Cuerpos JSON del API ---

#[derive(Debug, Deserialize)]
pub struct TurnoPayload {
    pub fecha: String,
    pub cancha: i64,
    pub jornada_codigo: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerarTurnosPayload {
    pub fecha: String,
    #[serde(default = "canchas_por_defecto")]
    pub canchas: i64,
}

fn canchas_por_defecto() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ReservaPayload {
    pub socio_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ArchivarPayload {
    pub hasta: String, // YYYY-MM-DD: se archiva todo lo anterior a esta fecha
}
