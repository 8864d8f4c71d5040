// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool() -> AppResult<SqlitePool> {
    dotenvy::dotenv().ok(); // Carga .env
    let database_url = std::env::var("DATABASE_URL")?; // Lee la URL de la DB

    tracing::info!("Conectando a la base de datos: {}", database_url);

    // Opciones de conexión: crear si no existe, timeout y claves foráneas
    // activas (socios/turnos dependen de ON DELETE SET NULL / CASCADE)
    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    // Crea el pool (conjunto de conexiones reutilizables)
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Ejecutando migraciones de la base de datos...");
    // Ejecuta automáticamente los ficheros SQL de ./migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migraciones completadas.");

    Ok(pool)
}
