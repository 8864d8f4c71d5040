// src/services/historico_service.rs
use crate::{
    error::{AppError, AppResult},
    models::turno::{GrupoHistorico, TurnoHistorico},
};
use chrono::{Datelike, NaiveDate, Weekday};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

/// Cómo agrupar el histórico en el listado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agrupacion {
    Dia,
    Semana,
}

impl Agrupacion {
    /// "dia" o "semana" (cualquier otra cosa cae en Dia, el valor por defecto)
    pub fn desde_str(texto: &str) -> Self {
        match texto {
            "semana" => Agrupacion::Semana,
            _ => Agrupacion::Dia,
        }
    }
}

// --- ARCHIVADO ---
// Mueve a turnos_historico todos los turnos anteriores a la fecha de corte,
// en una sola transacción (copiar + borrar).
pub async fn archivar_hasta(pool: &SqlitePool, hasta: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(hasta, "%Y-%m-%d")
        .map_err(|_| "Fecha de corte inválida (se espera YYYY-MM-DD)".to_string())?;

    let mut tx = pool.begin().await.map_err(|e| e.to_string())?;

    let movidos = sqlx::query(
        r#"
        INSERT INTO turnos_historico
            (id, fecha, cancha, jornada_codigo, hora_inicio, hora_fin, socio_id, estado)
        SELECT id, fecha, cancha, jornada_codigo, hora_inicio, hora_fin, socio_id, estado
        FROM turnos
        WHERE fecha < ?1
        "#,
    )
    .bind(hasta)
    .execute(&mut *tx)
    .await
    .map_err(|e| e.to_string())?
    .rows_affected();

    if movidos == 0 {
        return Err(format!(
            "No había turnos anteriores al {} para archivar.",
            hasta
        ));
    }

    sqlx::query("DELETE FROM turnos WHERE fecha < ?1")
        .bind(hasta)
        .execute(&mut *tx)
        .await
        .map_err(|e| e.to_string())?;

    tx.commit().await.map_err(|e| e.to_string())?;

    tracing::info!("📦 {} turnos archivados (corte: {})", movidos, hasta);
    Ok(format!(
        "Se archivaron {} turnos anteriores al {}.",
        movidos, hasta
    ))
}

fn nombre_dia(dia: Weekday) -> &'static str {
    match dia {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

// Clave y etiqueta humana del grupo al que pertenece una fecha
fn clave_grupo(fecha: &str, agrupar: Agrupacion) -> (String, String) {
    let Ok(dia) = NaiveDate::parse_from_str(fecha, "%Y-%m-%d") else {
        // Fecha corrupta en el histórico: agrupamos bajo el texto tal cual
        return (fecha.to_string(), fecha.to_string());
    };
    match agrupar {
        Agrupacion::Dia => (
            fecha.to_string(),
            format!("{}, {}", nombre_dia(dia.weekday()), dia.format("%d/%m")),
        ),
        Agrupacion::Semana => {
            let semana = dia.iso_week();
            (
                format!("{}-W{:02}", semana.year(), semana.week()),
                format!("Semana {} ({})", semana.week(), semana.year()),
            )
        }
    }
}

/// Histórico agrupado por día o por semana ISO, con filtro opcional de rango.
/// El BTreeMap deja los grupos ordenados ascendentemente por clave.
pub async fn listar_agrupado(
    pool: &SqlitePool,
    agrupar: Agrupacion,
    desde: Option<&str>,
    hasta: Option<&str>,
) -> AppResult<Vec<GrupoHistorico>> {
    for fecha in [desde, hasta].into_iter().flatten() {
        if NaiveDate::parse_from_str(fecha, "%Y-%m-%d").is_err() {
            return Err(AppError::Validacion(
                "Rango de fechas inválido (se espera YYYY-MM-DD)".to_string(),
            ));
        }
    }

    let orden = "ORDER BY fecha ASC, cancha ASC, hora_inicio ASC";
    let filas: Vec<TurnoHistorico> = match (desde, hasta) {
        (Some(d), Some(h)) => {
            sqlx::query_as(&format!(
                "SELECT * FROM turnos_historico WHERE fecha >= ?1 AND fecha <= ?2 {}",
                orden
            ))
            .bind(d)
            .bind(h)
            .fetch_all(pool)
            .await?
        }
        (Some(d), None) => {
            sqlx::query_as(&format!(
                "SELECT * FROM turnos_historico WHERE fecha >= ?1 {}",
                orden
            ))
            .bind(d)
            .fetch_all(pool)
            .await?
        }
        (None, Some(h)) => {
            sqlx::query_as(&format!(
                "SELECT * FROM turnos_historico WHERE fecha <= ?1 {}",
                orden
            ))
            .bind(h)
            .fetch_all(pool)
            .await?
        }
        (None, None) => {
            sqlx::query_as(&format!("SELECT * FROM turnos_historico {}", orden))
                .fetch_all(pool)
                .await?
        }
    };

    let mut grupos: BTreeMap<String, GrupoHistorico> = BTreeMap::new();
    for fila in filas {
        let (clave, etiqueta) = clave_grupo(&fila.fecha, agrupar);
        grupos
            .entry(clave.clone())
            .or_insert_with(|| GrupoHistorico {
                clave,
                etiqueta,
                turnos: Vec::new(),
            })
            .turnos
            .push(fila);
    }

    Ok(grupos.into_values().collect())
}
