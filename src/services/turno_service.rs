// src/services/turno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        configuracion::Jornada,
        turno::{Turno, TurnoPayload, TurnoVista},
    },
};
use chrono::{Datelike, NaiveDate, Weekday};
use sqlx::SqlitePool;
use uuid::Uuid;

// Etiqueta corta del día, la misma que guarda `jornadas.dias_semana`
fn dia_corto(dia: Weekday) -> &'static str {
    match dia {
        Weekday::Mon => "Lu",
        Weekday::Tue => "Ma",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Ju",
        Weekday::Fri => "Vi",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Do",
    }
}

async fn configuracion_activa_id(pool: &SqlitePool) -> AppResult<Option<i64>> {
    let id: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM configuraciones WHERE activa = 1 ORDER BY id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(id)
}

// --- GENERACIÓN DIARIA ---
// Crea un turno 'Libre' por cada jornada activa aplicable al día y por cada
// cancha, saltando los huecos que ya existan (regenerar no duplica).
pub async fn generar_turnos_dia(
    pool: &SqlitePool,
    fecha_str: &str,
    canchas: i64,
) -> Result<String, String> {
    let fecha = NaiveDate::parse_from_str(fecha_str, "%Y-%m-%d")
        .map_err(|_| "Fecha inválida (se espera YYYY-MM-DD)".to_string())?;
    if canchas < 1 {
        return Err("Debe generarse al menos una cancha".into());
    }

    let config_id = match configuracion_activa_id(pool).await.map_err(|e| e.to_string())? {
        Some(id) => id,
        None => return Err("No hay ninguna configuración de jornadas activa".into()),
    };

    let jornadas = sqlx::query_as::<_, Jornada>(
        "SELECT * FROM jornadas WHERE configuracion_id = ?1 AND activa = 1 ORDER BY orden ASC",
    )
    .bind(config_id)
    .fetch_all(pool)
    .await
    .map_err(|e| e.to_string())?;

    let dia = dia_corto(fecha.weekday());
    let mut tx = pool.begin().await.map_err(|e| e.to_string())?;
    let mut creados = 0;

    for jornada in jornadas.iter().filter(|j| j.aplica_al_dia(dia)) {
        for cancha in 1..=canchas {
            let existe: bool = sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM turnos WHERE fecha = ?1 AND cancha = ?2 AND jornada_codigo = ?3)",
            )
            .bind(fecha_str)
            .bind(cancha)
            .bind(&jornada.codigo)
            .fetch_one(&mut *tx)
            .await
            .unwrap_or(false);

            if existe {
                continue;
            }

            let uuid = Uuid::new_v4().to_string();
            sqlx::query(
                r#"
                INSERT INTO turnos (id, fecha, cancha, jornada_codigo, hora_inicio, hora_fin, estado)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'Libre')
                "#,
            )
            .bind(uuid)
            .bind(fecha_str)
            .bind(cancha)
            .bind(&jornada.codigo)
            .bind(&jornada.hora_inicio)
            .bind(&jornada.hora_fin)
            .execute(&mut *tx)
            .await
            .map_err(|e| e.to_string())?;
            creados += 1;
        }
    }

    tx.commit().await.map_err(|e| e.to_string())?;
    tracing::info!("✅ {} turnos generados para el {}", creados, fecha_str);
    Ok(format!("Se generaron {} turnos para el {}.", creados, fecha_str))
}

pub async fn buscar_por_id(pool: &SqlitePool, turno_id: &str) -> AppResult<Option<Turno>> {
    let turno = sqlx::query_as::<_, Turno>("SELECT * FROM turnos WHERE id = ?1")
        .bind(turno_id)
        .fetch_optional(pool)
        .await?;
    Ok(turno)
}

/// Alta manual de un turno suelto contra una jornada de la configuración
/// activa. Las horas se copian de la jornada en ese momento.
pub async fn crear(pool: &SqlitePool, payload: &TurnoPayload) -> AppResult<Turno> {
    let fecha = NaiveDate::parse_from_str(&payload.fecha, "%Y-%m-%d").map_err(|_| {
        AppError::Validacion("Fecha inválida (se espera YYYY-MM-DD)".to_string())
    })?;
    if payload.cancha < 1 {
        return Err(AppError::Validacion(
            "El número de cancha debe ser positivo".to_string(),
        ));
    }

    let config_id = configuracion_activa_id(pool).await?.ok_or_else(|| {
        AppError::Validacion("No hay ninguna configuración de jornadas activa".to_string())
    })?;

    let jornada = sqlx::query_as::<_, Jornada>(
        "SELECT * FROM jornadas WHERE configuracion_id = ?1 AND codigo = ?2",
    )
    .bind(config_id)
    .bind(&payload.jornada_codigo)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| {
        AppError::Validacion(format!(
            "No existe la jornada '{}' en la configuración activa",
            payload.jornada_codigo
        ))
    })?;

    let dia = dia_corto(fecha.weekday());
    if !jornada.aplica_al_dia(dia) {
        return Err(AppError::Validacion(format!(
            "La jornada '{}' no aplica al día {}",
            jornada.codigo, dia
        )));
    }

    let id = Uuid::new_v4().to_string();
    let resultado = sqlx::query(
        r#"
        INSERT INTO turnos (id, fecha, cancha, jornada_codigo, hora_inicio, hora_fin, estado)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'Libre')
        "#,
    )
    .bind(&id)
    .bind(&payload.fecha)
    .bind(payload.cancha)
    .bind(&jornada.codigo)
    .bind(&jornada.hora_inicio)
    .bind(&jornada.hora_fin)
    .execute(pool)
    .await;

    if let Err(sqlx::Error::Database(db_err)) = &resultado {
        if db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555")
        {
            return Err(AppError::Conflicto(
                "Ya existe un turno para esa fecha, cancha y jornada".to_string(),
            ));
        }
    }
    resultado?;

    buscar_por_id(pool, &id)
        .await?
        .ok_or(AppError::InternalServerError)
}

/// Reserva un turno libre para un socio activo.
pub async fn reservar(pool: &SqlitePool, turno_id: &str, socio_id: &str) -> AppResult<String> {
    let mut tx = pool.begin().await?;

    let estado: Option<String> = sqlx::query_scalar("SELECT estado FROM turnos WHERE id = ?1")
        .bind(turno_id)
        .fetch_optional(&mut *tx)
        .await?;
    let estado = estado.ok_or_else(|| {
        AppError::NoEncontrado("No existe el turno indicado".to_string())
    })?;
    if estado == "Reservado" {
        return Err(AppError::Conflicto(
            "El turno ya está reservado".to_string(),
        ));
    }

    let socio: Option<(String, bool)> =
        sqlx::query_as("SELECT nombre, activo FROM socios WHERE id = ?1")
            .bind(socio_id)
            .fetch_optional(&mut *tx)
            .await?;
    let (nombre, activo) = socio.ok_or_else(|| {
        AppError::NoEncontrado("No existe el socio indicado".to_string())
    })?;
    if !activo {
        return Err(AppError::Validacion(format!(
            "El socio {} no está activo",
            nombre
        )));
    }

    sqlx::query("UPDATE turnos SET socio_id = ?1, estado = 'Reservado' WHERE id = ?2")
        .bind(socio_id)
        .bind(turno_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!("✅ Turno {} reservado para '{}'", turno_id, nombre);
    Ok(format!("Turno reservado para {}.", nombre))
}

/// Libera un turno (quita el socio y vuelve a 'Libre').
pub async fn liberar(pool: &SqlitePool, turno_id: &str) -> AppResult<String> {
    let rows_affected =
        sqlx::query("UPDATE turnos SET socio_id = NULL, estado = 'Libre' WHERE id = ?1")
            .bind(turno_id)
            .execute(pool)
            .await?
            .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NoEncontrado(
            "No existe el turno indicado".to_string(),
        ));
    }
    tracing::info!("Turno {} liberado.", turno_id);
    Ok("Turno liberado.".to_string())
}

/// Turnos de un día con el nombre del socio resuelto.
pub async fn listar_por_fecha(pool: &SqlitePool, fecha: &str) -> AppResult<Vec<TurnoVista>> {
    if NaiveDate::parse_from_str(fecha, "%Y-%m-%d").is_err() {
        return Err(AppError::Validacion(
            "Fecha inválida (se espera YYYY-MM-DD)".to_string(),
        ));
    }
    let turnos = sqlx::query_as::<_, TurnoVista>(
        r#"
        SELECT t.id, t.fecha, t.cancha, t.jornada_codigo, t.hora_inicio, t.hora_fin,
               t.socio_id, s.nombre AS socio, t.estado
        FROM turnos t
        LEFT JOIN socios s ON t.socio_id = s.id
        WHERE t.fecha = ?1
        ORDER BY t.cancha ASC, t.hora_inicio ASC
        "#,
    )
    .bind(fecha)
    .fetch_all(pool)
    .await?;
    Ok(turnos)
}

pub async fn eliminar(pool: &SqlitePool, turno_id: &str) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM turnos WHERE id = ?1")
        .bind(turno_id)
        .execute(pool)
        .await?
        .rows_affected();
    if rows_affected == 0 {
        return Err(AppError::NoEncontrado(
            "No existe el turno indicado".to_string(),
        ));
    }
    Ok(())
}
