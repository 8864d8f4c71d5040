// tests/turno_service_test.rs
mod common;

use gestclub::error::AppError;
use gestclub::models::configuracion::{
    semana_completa, ConfiguracionPayload, EsquemaTipo, JornadaDto,
};
use gestclub::models::socio::SocioPayload;
use gestclub::models::turno::TurnoPayload;
use gestclub::services::historico_service::{self, Agrupacion};
use gestclub::services::{configuracion_service, socio_service, turno_service};
use sqlx::SqlitePool;

fn jornada(nombre: &str, inicio: &str, fin: &str, dias: Vec<String>) -> JornadaDto {
    JornadaDto {
        id: None,
        codigo: String::new(),
        nombre: nombre.to_string(),
        descripcion: String::new(),
        hora_inicio: inicio.to_string(),
        hora_fin: fin.to_string(),
        activa: true,
        dias_semana: dias,
        color: String::new(),
        orden: 0,
    }
}

/// Configuración activa con dos jornadas toda la semana.
async fn configurar(pool: &SqlitePool) {
    let payload = ConfiguracionPayload {
        nombre: "Horario del club".to_string(),
        descripcion: String::new(),
        esquema_tipo: EsquemaTipo::Dos,
        activa: true,
        jornadas: vec![
            jornada("Mañana", "07:00", "12:00", semana_completa()),
            jornada("Tarde", "15:00", "21:00", semana_completa()),
        ],
    };
    configuracion_service::crear(pool, &payload).await.unwrap();
}

async fn alta_socio(pool: &SqlitePool, numero: i64, nombre: &str) -> String {
    let payload = SocioPayload {
        numero_socio: numero,
        nombre: nombre.to_string(),
        apellidos: String::new(),
        email: None,
        telefono: None,
        categoria_id: None,
        activo: true,
        fecha_alta: Some("2026-01-15".to_string()),
    };
    socio_service::crear(pool, &payload).await.unwrap().id
}

#[tokio::test]
async fn generar_crea_un_turno_por_jornada_y_cancha() {
    let pool = common::pool_pruebas().await;
    configurar(&pool).await;

    let mensaje = turno_service::generar_turnos_dia(&pool, "2026-08-03", 2)
        .await
        .expect("generación válida");
    assert!(
        mensaje.contains("Se generaron 4"),
        "2 jornadas x 2 canchas: {}",
        mensaje
    );

    let turnos = turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap();
    assert_eq!(turnos.len(), 4);
    assert!(turnos.iter().all(|t| t.estado == "Libre"));
    // Las horas se copian de la jornada
    assert_eq!(turnos[0].jornada_codigo, "A");
    assert_eq!(turnos[0].hora_inicio, "07:00");

    // Regenerar no duplica los huecos existentes
    let repetido = turno_service::generar_turnos_dia(&pool, "2026-08-03", 2)
        .await
        .unwrap();
    assert!(repetido.contains("Se generaron 0"), "{}", repetido);
    let turnos = turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap();
    assert_eq!(turnos.len(), 4);
}

#[tokio::test]
async fn generar_respeta_los_dias_de_la_semana() {
    let pool = common::pool_pruebas().await;
    let payload = ConfiguracionPayload {
        nombre: "Solo fines de semana".to_string(),
        descripcion: String::new(),
        esquema_tipo: EsquemaTipo::Personalizado,
        activa: true,
        jornadas: vec![jornada(
            "Matinal",
            "09:00",
            "14:00",
            vec!["Sa".to_string(), "Do".to_string()],
        )],
    };
    configuracion_service::crear(&pool, &payload).await.unwrap();

    // 2026-08-03 es lunes: la jornada no aplica
    let mensaje = turno_service::generar_turnos_dia(&pool, "2026-08-03", 3)
        .await
        .unwrap();
    assert!(mensaje.contains("Se generaron 0"), "{}", mensaje);

    // 2026-08-08 es sábado: sí aplica
    let mensaje = turno_service::generar_turnos_dia(&pool, "2026-08-08", 3)
        .await
        .unwrap();
    assert!(mensaje.contains("Se generaron 3"), "{}", mensaje);
}

#[tokio::test]
async fn generar_sin_configuracion_activa_falla() {
    let pool = common::pool_pruebas().await;
    let error = turno_service::generar_turnos_dia(&pool, "2026-08-03", 1)
        .await
        .expect_err("no hay configuración");
    assert!(error.contains("configuración"));
}

#[tokio::test]
async fn reservar_y_liberar_un_turno() {
    let pool = common::pool_pruebas().await;
    configurar(&pool).await;
    turno_service::generar_turnos_dia(&pool, "2026-08-03", 1)
        .await
        .unwrap();
    let socio_id = alta_socio(&pool, 1, "Marta").await;

    let turnos = turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap();
    let turno_id = turnos[0].id.clone();

    let mensaje = turno_service::reservar(&pool, &turno_id, &socio_id)
        .await
        .expect("reserva válida");
    assert!(mensaje.contains("Marta"));

    let turnos = turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap();
    assert_eq!(turnos[0].estado, "Reservado");
    assert_eq!(turnos[0].socio.as_deref(), Some("Marta"));

    // Reservar un turno ocupado es conflicto
    let otro = alta_socio(&pool, 2, "Pedro").await;
    assert!(matches!(
        turno_service::reservar(&pool, &turno_id, &otro).await,
        Err(AppError::Conflicto(_))
    ));

    turno_service::liberar(&pool, &turno_id).await.unwrap();
    let turnos = turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap();
    assert_eq!(turnos[0].estado, "Libre");
    assert_eq!(turnos[0].socio_id, None);
}

#[tokio::test]
async fn reservar_con_datos_inexistentes_devuelve_not_found() {
    let pool = common::pool_pruebas().await;
    configurar(&pool).await;
    turno_service::generar_turnos_dia(&pool, "2026-08-03", 1)
        .await
        .unwrap();
    let socio_id = alta_socio(&pool, 1, "Marta").await;

    assert!(matches!(
        turno_service::reservar(&pool, "no-existe", &socio_id).await,
        Err(AppError::NoEncontrado(_))
    ));

    let turnos = turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap();
    assert!(matches!(
        turno_service::reservar(&pool, &turnos[0].id, "no-existe").await,
        Err(AppError::NoEncontrado(_))
    ));
}

#[tokio::test]
async fn alta_manual_de_turno_y_duplicado() {
    let pool = common::pool_pruebas().await;
    configurar(&pool).await;

    let payload = TurnoPayload {
        fecha: "2026-08-04".to_string(),
        cancha: 1,
        jornada_codigo: "A".to_string(),
    };
    let turno = turno_service::crear(&pool, &payload).await.expect("alta válida");
    assert_eq!(turno.hora_inicio, "07:00");
    assert_eq!(turno.hora_fin, "12:00");

    // Mismo hueco otra vez: conflicto
    assert!(matches!(
        turno_service::crear(&pool, &payload).await,
        Err(AppError::Conflicto(_))
    ));

    // Jornada que no existe en la configuración activa
    let fantasma = TurnoPayload {
        fecha: "2026-08-04".to_string(),
        cancha: 1,
        jornada_codigo: "Z".to_string(),
    };
    assert!(matches!(
        turno_service::crear(&pool, &fantasma).await,
        Err(AppError::Validacion(_))
    ));
}

#[tokio::test]
async fn archivar_mueve_los_turnos_antiguos_al_historico() {
    let pool = common::pool_pruebas().await;
    configurar(&pool).await;
    turno_service::generar_turnos_dia(&pool, "2026-08-03", 1)
        .await
        .unwrap();
    turno_service::generar_turnos_dia(&pool, "2026-08-04", 1)
        .await
        .unwrap();
    turno_service::generar_turnos_dia(&pool, "2026-08-10", 1)
        .await
        .unwrap();

    let mensaje = historico_service::archivar_hasta(&pool, "2026-08-05")
        .await
        .expect("archivado válido");
    assert!(
        mensaje.contains("Se archivaron 4"),
        "2 días x 2 jornadas: {}",
        mensaje
    );

    // Los días archivados quedan vacíos; el futuro sigue en turnos
    assert!(turno_service::listar_por_fecha(&pool, "2026-08-03")
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        turno_service::listar_por_fecha(&pool, "2026-08-10")
            .await
            .unwrap()
            .len(),
        2
    );

    // Sin nada que archivar, el corte repetido avisa
    assert!(historico_service::archivar_hasta(&pool, "2026-08-05")
        .await
        .is_err());
}

#[tokio::test]
async fn el_historico_se_agrupa_por_dia_y_por_semana() {
    let pool = common::pool_pruebas().await;
    configurar(&pool).await;
    // Lunes y martes de la semana 32, y el lunes siguiente (semana 33)
    for fecha in ["2026-08-03", "2026-08-04", "2026-08-10"] {
        turno_service::generar_turnos_dia(&pool, fecha, 1).await.unwrap();
    }
    historico_service::archivar_hasta(&pool, "2026-08-11")
        .await
        .unwrap();

    let por_dia = historico_service::listar_agrupado(&pool, Agrupacion::Dia, None, None)
        .await
        .unwrap();
    assert_eq!(por_dia.len(), 3);
    assert_eq!(por_dia[0].clave, "2026-08-03");
    assert_eq!(por_dia[0].etiqueta, "Lunes, 03/08");
    assert_eq!(por_dia[0].turnos.len(), 2);

    let por_semana = historico_service::listar_agrupado(&pool, Agrupacion::Semana, None, None)
        .await
        .unwrap();
    assert_eq!(por_semana.len(), 2);
    assert_eq!(por_semana[0].clave, "2026-W32");
    assert_eq!(por_semana[0].etiqueta, "Semana 32 (2026)");
    assert_eq!(por_semana[0].turnos.len(), 4);
    assert_eq!(por_semana[1].clave, "2026-W33");

    // Filtro por rango: solo la primera semana
    let filtrado = historico_service::listar_agrupado(
        &pool,
        Agrupacion::Dia,
        Some("2026-08-03"),
        Some("2026-08-04"),
    )
    .await
    .unwrap();
    assert_eq!(filtrado.len(), 2);
}
