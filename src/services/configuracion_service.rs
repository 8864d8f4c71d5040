// src/services/configuracion_service.rs
use crate::{
    error::{AppError, AppResult},
    horario::{conflicto, esquema},
    models::configuracion::{
        Configuracion, ConfiguracionConJornadas, ConfiguracionPayload, EsquemaTipo, Jornada,
        JornadaDto,
    },
};
use sqlx::SqlitePool;

fn armar(config: Configuracion, jornadas: Vec<Jornada>) -> ConfiguracionConJornadas {
    ConfiguracionConJornadas {
        id: Some(config.id),
        nombre: config.nombre,
        descripcion: config.descripcion,
        esquema_tipo: EsquemaTipo::desde_str(&config.esquema_tipo),
        activa: config.activa,
        jornadas: jornadas.into_iter().map(JornadaDto::from).collect(),
    }
}

async fn jornadas_de(pool: &SqlitePool, configuracion_id: i64) -> AppResult<Vec<Jornada>> {
    let jornadas = sqlx::query_as::<_, Jornada>(
        "SELECT * FROM jornadas WHERE configuracion_id = ?1 ORDER BY orden ASC",
    )
    .bind(configuracion_id)
    .fetch_all(pool)
    .await?;
    Ok(jornadas)
}

/// Devuelve la única configuración activa con sus jornadas, si la hay.
pub async fn obtener_activa(pool: &SqlitePool) -> AppResult<Option<ConfiguracionConJornadas>> {
    let config = sqlx::query_as::<_, Configuracion>(
        "SELECT * FROM configuraciones WHERE activa = 1 ORDER BY id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    let Some(config) = config else {
        tracing::debug!("No hay configuración activa guardada.");
        return Ok(None);
    };
    let jornadas = jornadas_de(pool, config.id).await?;
    Ok(Some(armar(config, jornadas)))
}

pub async fn obtener_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<ConfiguracionConJornadas>> {
    let config =
        sqlx::query_as::<_, Configuracion>("SELECT * FROM configuraciones WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    let Some(config) = config else {
        return Ok(None);
    };
    let jornadas = jornadas_de(pool, config.id).await?;
    Ok(Some(armar(config, jornadas)))
}

/// Configuración de arranque cuando todavía no hay ninguna guardada.
/// `id: None` para que el cliente sepa que tiene que crear, no actualizar.
pub fn configuracion_por_defecto() -> ConfiguracionConJornadas {
    ConfiguracionConJornadas {
        id: None,
        nombre: "Horario del club".to_string(),
        descripcion: String::new(),
        esquema_tipo: EsquemaTipo::Dos,
        activa: true,
        jornadas: esquema::plantilla(EsquemaTipo::Dos).unwrap_or_default(),
    }
}

/// Validación previa al guardado. Bloquea la escritura por completo:
/// nombre vacío o límites de jornadas -> 400, horario solapado -> 409
/// con el mensaje del informe de conflicto.
pub fn validar_payload(payload: &ConfiguracionPayload) -> AppResult<()> {
    if payload.nombre.trim().is_empty() {
        return Err(AppError::Validacion(
            "El nombre de la configuración es obligatorio".to_string(),
        ));
    }
    if payload.jornadas.len() < esquema::MIN_JORNADAS {
        return Err(AppError::Validacion(
            "Debe existir al menos una jornada".to_string(),
        ));
    }
    if payload.jornadas.len() > esquema::MAX_JORNADAS {
        return Err(AppError::Validacion(format!(
            "No se pueden crear más de {} jornadas",
            esquema::MAX_JORNADAS
        )));
    }
    for jornada in &payload.jornadas {
        if jornada.nombre.trim().is_empty() {
            return Err(AppError::Validacion(
                "Todas las jornadas necesitan un nombre".to_string(),
            ));
        }
    }
    if let Some(reporte) = conflicto::detectar_conflicto(&payload.jornadas) {
        return Err(AppError::Conflicto(reporte.mensaje));
    }
    Ok(())
}

async fn insertar_jornadas(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    configuracion_id: i64,
    jornadas: &[JornadaDto],
) -> AppResult<()> {
    for jornada in jornadas {
        sqlx::query(
            r#"
            INSERT INTO jornadas
                (configuracion_id, codigo, nombre, descripcion, hora_inicio, hora_fin,
                 activa, dias_semana, color, orden)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(configuracion_id)
        .bind(&jornada.codigo)
        .bind(&jornada.nombre)
        .bind(&jornada.descripcion)
        .bind(&jornada.hora_inicio)
        .bind(&jornada.hora_fin)
        .bind(jornada.activa)
        .bind(jornada.dias_semana_csv())
        .bind(&jornada.color)
        .bind(jornada.orden)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

pub async fn crear(
    pool: &SqlitePool,
    payload: &ConfiguracionPayload,
) -> AppResult<ConfiguracionConJornadas> {
    tracing::info!("Creando configuración de jornadas '{}'", payload.nombre);
    validar_payload(payload)?;

    // El servidor manda: codigo/orden se regeneran por posición antes de guardar
    let mut jornadas = payload.jornadas.clone();
    esquema::reenumerar(&mut jornadas);

    let mut tx = pool.begin().await?;

    if payload.activa {
        // Solo puede haber una configuración activa a la vez
        sqlx::query("UPDATE configuraciones SET activa = 0 WHERE activa = 1")
            .execute(&mut *tx)
            .await?;
    }

    let id = sqlx::query(
        "INSERT INTO configuraciones (nombre, descripcion, esquema_tipo, activa) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(payload.nombre.trim())
    .bind(&payload.descripcion)
    .bind(payload.esquema_tipo.as_str())
    .bind(payload.activa)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    insertar_jornadas(&mut tx, id, &jornadas).await?;
    tx.commit().await?;

    tracing::info!("✅ Configuración '{}' creada con id {}", payload.nombre, id);
    obtener_por_id(pool, id)
        .await?
        .ok_or(AppError::InternalServerError)
}

pub async fn actualizar(
    pool: &SqlitePool,
    id: i64,
    payload: &ConfiguracionPayload,
) -> AppResult<ConfiguracionConJornadas> {
    tracing::info!("Actualizando configuración de jornadas {}", id);
    validar_payload(payload)?;

    let mut jornadas = payload.jornadas.clone();
    esquema::reenumerar(&mut jornadas);

    let mut tx = pool.begin().await?;

    if payload.activa {
        sqlx::query("UPDATE configuraciones SET activa = 0 WHERE activa = 1 AND id != ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    let rows_affected = sqlx::query(
        "UPDATE configuraciones SET nombre = ?1, descripcion = ?2, esquema_tipo = ?3, activa = ?4 WHERE id = ?5",
    )
    .bind(payload.nombre.trim())
    .bind(&payload.descripcion)
    .bind(payload.esquema_tipo.as_str())
    .bind(payload.activa)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        // La transacción se descarta al salir sin commit
        tracing::warn!("Configuración {} no encontrada al actualizar", id);
        return Err(AppError::NoEncontrado(
            "No existe la configuración indicada".to_string(),
        ));
    }

    // La lista viaja completa, nunca como diff: borrar y reinsertar
    sqlx::query("DELETE FROM jornadas WHERE configuracion_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    insertar_jornadas(&mut tx, id, &jornadas).await?;
    tx.commit().await?;

    tracing::info!("✅ Configuración {} actualizada.", id);
    obtener_por_id(pool, id)
        .await?
        .ok_or(AppError::InternalServerError)
}
