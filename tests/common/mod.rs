// tests/common/mod.rs
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Pool sobre SQLite en memoria con las migraciones aplicadas.
/// Una sola conexión: cada conexión nueva abriría una base en memoria distinta.
pub async fn pool_pruebas() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("opciones de conexión")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("pool en memoria");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migraciones aplicadas");

    pool
}
