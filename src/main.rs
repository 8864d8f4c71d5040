// src/main.rs
use axum::serve;
use gestclub::{db, state::AppState, web};
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuración del logging (tracing) ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                env::var("RUST_LOG")
                    .unwrap_or_else(|_| "gestclub=debug,tower_http=info,sqlx=warn".into())
                    .into()
            }),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor GestClub...");

    // --- Base de datos ---
    let db_pool = match db::create_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Fallo crítico al inicializar la base de datos: {}", e);
            return Err(anyhow::anyhow!("Fallo al conectar/migrar la DB: {}", e));
        }
    };

    // --- Estado de la aplicación ---
    let app_state = AppState { db_pool };

    // --- Dirección y listener ---
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("📡 Servidor escuchando en http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Fallo al abrir el listener en el puerto 3000: {}", e);
            return Err(e.into());
        }
    };

    // --- Router y middlewares ---
    tracing::info!("🛠️ Construyendo router y aplicando middlewares...");
    let app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // --- Arranque del servidor ---
    tracing::info!("👂 Servidor listo para aceptar conexiones...");
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Error fatal en el servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}
