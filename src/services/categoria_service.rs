// src/services/categoria_service.rs
use crate::{
    error::{AppError, AppResult},
    models::categoria::{Categoria, CategoriaPayload},
};
use sqlx::SqlitePool;

pub async fn listar(pool: &SqlitePool) -> AppResult<Vec<Categoria>> {
    tracing::debug!("Listando categorías...");
    let categorias = sqlx::query_as::<_, Categoria>(
        "SELECT id, nombre, descripcion, cuota_mensual, activa FROM categorias ORDER BY nombre ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(categorias)
}

pub async fn buscar_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Categoria>> {
    let categoria = sqlx::query_as::<_, Categoria>(
        "SELECT id, nombre, descripcion, cuota_mensual, activa FROM categorias WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(categoria)
}

pub async fn crear(pool: &SqlitePool, payload: &CategoriaPayload) -> AppResult<Categoria> {
    let nombre = payload.nombre.trim();
    if nombre.is_empty() {
        return Err(AppError::Validacion(
            "El nombre de la categoría es obligatorio".to_string(),
        ));
    }

    let resultado = sqlx::query(
        "INSERT INTO categorias (nombre, descripcion, cuota_mensual, activa) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(nombre)
    .bind(&payload.descripcion)
    .bind(payload.cuota_mensual)
    .bind(payload.activa)
    .execute(pool)
    .await;

    // Verifica error de constraint (nombre duplicado, códigos UNIQUE de SQLite)
    if let Err(sqlx::Error::Database(db_err)) = &resultado {
        if db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555")
        {
            tracing::warn!("Categoría duplicada: '{}'", nombre);
            return Err(AppError::Validacion(format!(
                "Ya existe una categoría llamada '{}'",
                nombre
            )));
        }
    }
    let id = resultado?.last_insert_rowid();

    tracing::info!("✅ Categoría '{}' creada con id {}", nombre, id);
    buscar_por_id(pool, id)
        .await?
        .ok_or(AppError::InternalServerError)
}

pub async fn actualizar(pool: &SqlitePool, id: i64, payload: &CategoriaPayload) -> AppResult<Categoria> {
    let nombre = payload.nombre.trim();
    if nombre.is_empty() {
        return Err(AppError::Validacion(
            "El nombre de la categoría es obligatorio".to_string(),
        ));
    }

    let resultado = sqlx::query(
        "UPDATE categorias SET nombre = ?1, descripcion = ?2, cuota_mensual = ?3, activa = ?4 WHERE id = ?5",
    )
    .bind(nombre)
    .bind(&payload.descripcion)
    .bind(payload.cuota_mensual)
    .bind(payload.activa)
    .bind(id)
    .execute(pool)
    .await;

    if let Err(sqlx::Error::Database(db_err)) = &resultado {
        if db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555")
        {
            return Err(AppError::Validacion(format!(
                "Ya existe una categoría llamada '{}'",
                nombre
            )));
        }
    }

    if resultado?.rows_affected() == 0 {
        tracing::warn!("Categoría {} no encontrada al actualizar", id);
        return Err(AppError::NoEncontrado(
            "No existe la categoría indicada".to_string(),
        ));
    }

    buscar_por_id(pool, id)
        .await?
        .ok_or(AppError::InternalServerError)
}

pub async fn eliminar(pool: &SqlitePool, id: i64) -> AppResult<()> {
    // Una categoría con socios no se puede borrar: habría que recategorizarlos
    let socios: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM socios WHERE categoria_id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if socios > 0 {
        return Err(AppError::Conflicto(format!(
            "La categoría tiene {} socios asignados; reasígnelos antes de eliminarla",
            socios
        )));
    }

    let rows_affected = sqlx::query("DELETE FROM categorias WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NoEncontrado(
            "No existe la categoría indicada".to_string(),
        ));
    }
    tracing::info!("🗑️ Categoría {} eliminada", id);
    Ok(())
}
