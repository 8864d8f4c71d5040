// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        categoria_handlers, configuracion_handlers, historico_handlers, socio_handlers,
        turno_handlers,
    },
};
use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::json;

pub fn create_router(app_state: AppState) -> Router {
    // --- Socios ---
    let socio_routes = Router::new()
        .route("/", get(socio_handlers::listar).post(socio_handlers::crear))
        .route(
            "/{id}",
            get(socio_handlers::obtener)
                .patch(socio_handlers::actualizar)
                .delete(socio_handlers::eliminar),
        );

    // --- Categorías de socio ---
    let categoria_routes = Router::new()
        .route(
            "/",
            get(categoria_handlers::listar).post(categoria_handlers::crear),
        )
        .route(
            "/{id}",
            get(categoria_handlers::obtener)
                .patch(categoria_handlers::actualizar)
                .delete(categoria_handlers::eliminar),
        );

    // --- Configuración de jornadas ---
    // Nota: las rutas fijas van antes que "/{id}" para que "activa" o
    // "validar" no se interpreten como identificadores.
    let configuracion_routes = Router::new()
        .route("/activa", get(configuracion_handlers::obtener_activa))
        .route("/validar", post(configuracion_handlers::validar))
        .route(
            "/esquemas/{tipo}",
            get(configuracion_handlers::plantilla_esquema),
        )
        .route("/", post(configuracion_handlers::crear))
        .route("/{id}", patch(configuracion_handlers::actualizar));

    // --- Turnos de cancha ---
    let turno_routes = Router::new()
        .route("/", get(turno_handlers::listar).post(turno_handlers::crear))
        // Genera los turnos de un día (JSON: { "fecha": "...", "canchas": 4 })
        .route("/generar", post(turno_handlers::generar))
        .route("/{id}/reservar", post(turno_handlers::reservar))
        .route("/{id}/liberar", post(turno_handlers::liberar))
        .route("/{id}", delete(turno_handlers::eliminar));

    // --- Histórico de turnos ---
    let historico_routes = Router::new()
        .route("/", get(historico_handlers::listar))
        .route("/archivar", post(historico_handlers::archivar));

    // --- Router final ---
    Router::new()
        .route(
            "/",
            get(|| async { Json(json!({ "estado": "ok", "servicio": "gestclub" })) }),
        )
        .nest("/api/socios", socio_routes)
        .nest("/api/categorias", categoria_routes)
        .nest("/api/configuracion", configuracion_routes)
        .nest("/api/turnos", turno_routes)
        .nest("/api/historico", historico_routes)
        .with_state(app_state)
}
