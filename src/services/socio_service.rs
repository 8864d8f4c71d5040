// src/services/socio_service.rs
use crate::{
    error::{AppError, AppResult},
    models::socio::{Socio, SocioPayload, SocioVista},
};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Busca un socio por su ID (UUID).
pub async fn buscar_por_id(pool: &SqlitePool, socio_id: &str) -> AppResult<Option<Socio>> {
    tracing::debug!("Buscando socio por ID: {}", socio_id);
    let socio = sqlx::query_as::<_, Socio>(
        r#"
        SELECT id, numero_socio, nombre, apellidos, email, telefono,
               categoria_id, activo, fecha_alta, updated_at, created_at
        FROM socios
        WHERE id = ?1
        "#,
    )
    .bind(socio_id)
    .fetch_optional(pool)
    .await?;
    Ok(socio)
}

/// Lista todos los socios con el nombre de su categoría resuelto.
pub async fn listar(pool: &SqlitePool) -> AppResult<Vec<SocioVista>> {
    tracing::debug!("Listando socios...");
    let socios = sqlx::query_as::<_, SocioVista>(
        r#"
        SELECT s.id, s.numero_socio, s.nombre, s.apellidos, s.email, s.telefono,
               s.categoria_id, c.nombre AS categoria, s.activo, s.fecha_alta
        FROM socios s
        LEFT JOIN categorias c ON s.categoria_id = c.id
        ORDER BY s.numero_socio ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    tracing::debug!("Encontrados {} socios.", socios.len());
    Ok(socios)
}

fn validar_payload(payload: &SocioPayload) -> AppResult<()> {
    if payload.nombre.trim().is_empty() {
        return Err(AppError::Validacion(
            "El nombre del socio es obligatorio".to_string(),
        ));
    }
    if payload.numero_socio < 1 {
        return Err(AppError::Validacion(
            "El número de socio debe ser positivo".to_string(),
        ));
    }
    if let Some(fecha) = &payload.fecha_alta {
        if NaiveDate::parse_from_str(fecha, "%Y-%m-%d").is_err() {
            return Err(AppError::Validacion(
                "Fecha de alta inválida (se espera YYYY-MM-DD)".to_string(),
            ));
        }
    }
    Ok(())
}

async fn comprobar_categoria(pool: &SqlitePool, categoria_id: Option<i64>) -> AppResult<()> {
    if let Some(id) = categoria_id {
        let existe: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categorias WHERE id = ?1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        if !existe {
            return Err(AppError::Validacion(
                "La categoría indicada no existe".to_string(),
            ));
        }
    }
    Ok(())
}

pub async fn crear(pool: &SqlitePool, payload: &SocioPayload) -> AppResult<Socio> {
    tracing::info!("Intentando crear socio nº {}", payload.numero_socio);
    validar_payload(payload)?;
    comprobar_categoria(pool, payload.categoria_id).await?;

    let id = Uuid::new_v4().to_string();
    let fecha_alta = payload
        .fecha_alta
        .clone()
        .unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());

    let resultado = sqlx::query(
        r#"
        INSERT INTO socios (id, numero_socio, nombre, apellidos, email, telefono, categoria_id, activo, fecha_alta)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(&id)
    .bind(payload.numero_socio)
    .bind(payload.nombre.trim())
    .bind(&payload.apellidos)
    .bind(&payload.email)
    .bind(&payload.telefono)
    .bind(payload.categoria_id)
    .bind(payload.activo)
    .bind(&fecha_alta)
    .execute(pool)
    .await;

    // Verifica error de constraint (número de socio duplicado)
    if let Err(sqlx::Error::Database(db_err)) = &resultado {
        if db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555")
        {
            tracing::warn!(
                "Fallo al crear socio: el número {} ya existe.",
                payload.numero_socio
            );
            return Err(AppError::Validacion(format!(
                "Ya existe un socio con el número {}",
                payload.numero_socio
            )));
        }
    }
    resultado?;

    tracing::info!("✅ Socio '{}' creado con éxito.", id);
    buscar_por_id(pool, &id)
        .await?
        .ok_or(AppError::InternalServerError)
}

pub async fn actualizar(pool: &SqlitePool, socio_id: &str, payload: &SocioPayload) -> AppResult<Socio> {
    tracing::info!("Actualizando datos del socio: {}", socio_id);
    validar_payload(payload)?;
    comprobar_categoria(pool, payload.categoria_id).await?;

    // El trigger 'trigger_socios_updated_at' actualiza updated_at solo
    let resultado = sqlx::query(
        r#"
        UPDATE socios
        SET numero_socio = ?1,
            nombre = ?2,
            apellidos = ?3,
            email = ?4,
            telefono = ?5,
            categoria_id = ?6,
            activo = ?7
        WHERE id = ?8
        "#,
    )
    .bind(payload.numero_socio)
    .bind(payload.nombre.trim())
    .bind(&payload.apellidos)
    .bind(&payload.email)
    .bind(&payload.telefono)
    .bind(payload.categoria_id)
    .bind(payload.activo)
    .bind(socio_id)
    .execute(pool)
    .await;

    if let Err(sqlx::Error::Database(db_err)) = &resultado {
        if db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555")
        {
            return Err(AppError::Validacion(format!(
                "Ya existe un socio con el número {}",
                payload.numero_socio
            )));
        }
    }

    if resultado?.rows_affected() == 0 {
        tracing::warn!("Fallo al actualizar: socio '{}' no encontrado.", socio_id);
        return Err(AppError::NoEncontrado(
            "No existe el socio indicado".to_string(),
        ));
    }

    tracing::info!("✅ Datos actualizados con éxito para el socio: {}", socio_id);
    buscar_por_id(pool, socio_id)
        .await?
        .ok_or(AppError::InternalServerError)
}

pub async fn eliminar(pool: &SqlitePool, socio_id: &str) -> AppResult<()> {
    // Con turnos vigentes no se elimina: primero hay que liberarlos.
    // (El histórico no bloquea: conserva el socio_id como texto suelto.)
    let turnos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM turnos WHERE socio_id = ?1")
        .bind(socio_id)
        .fetch_one(pool)
        .await?;
    if turnos > 0 {
        return Err(AppError::Conflicto(format!(
            "El socio tiene {} turnos reservados; libérelos antes de eliminarlo",
            turnos
        )));
    }

    let rows_affected = sqlx::query("DELETE FROM socios WHERE id = ?1")
        .bind(socio_id)
        .execute(pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NoEncontrado(
            "No existe el socio indicado".to_string(),
        ));
    }
    tracing::info!("🗑️ Socio '{}' eliminado.", socio_id);
    Ok(())
}
