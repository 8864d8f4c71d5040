// tests/socio_service_test.rs
mod common;

use gestclub::error::AppError;
use gestclub::models::categoria::CategoriaPayload;
use gestclub::models::socio::SocioPayload;
use gestclub::services::{categoria_service, socio_service};

fn socio(numero: i64, nombre: &str) -> SocioPayload {
    SocioPayload {
        numero_socio: numero,
        nombre: nombre.to_string(),
        apellidos: "García".to_string(),
        email: Some(format!("{}@club.example", nombre.to_lowercase())),
        telefono: None,
        categoria_id: None,
        activo: true,
        fecha_alta: Some("2026-01-15".to_string()),
    }
}

fn categoria(nombre: &str) -> CategoriaPayload {
    CategoriaPayload {
        nombre: nombre.to_string(),
        descripcion: String::new(),
        cuota_mensual: 25.0,
        activa: true,
    }
}

#[tokio::test]
async fn crear_y_buscar_un_socio() {
    let pool = common::pool_pruebas().await;

    let creado = socio_service::crear(&pool, &socio(7, "Marta"))
        .await
        .expect("alta válida");
    assert_eq!(creado.numero_socio, 7);
    assert_eq!(creado.fecha_alta, "2026-01-15");

    let encontrado = socio_service::buscar_por_id(&pool, &creado.id)
        .await
        .unwrap()
        .expect("debe existir");
    assert_eq!(encontrado.nombre, "Marta");
    assert!(encontrado.activo);
}

#[tokio::test]
async fn numero_de_socio_duplicado_se_rechaza() {
    let pool = common::pool_pruebas().await;
    socio_service::crear(&pool, &socio(1, "Marta")).await.unwrap();

    let error = socio_service::crear(&pool, &socio(1, "Pedro"))
        .await
        .expect_err("número repetido");
    assert!(matches!(error, AppError::Validacion(_)));

    // El segundo alta no dejó rastro
    let socios = socio_service::listar(&pool).await.unwrap();
    assert_eq!(socios.len(), 1);
}

#[tokio::test]
async fn validaciones_de_alta() {
    let pool = common::pool_pruebas().await;

    let mut sin_nombre = socio(2, "");
    sin_nombre.nombre = "  ".to_string();
    assert!(matches!(
        socio_service::crear(&pool, &sin_nombre).await,
        Err(AppError::Validacion(_))
    ));

    let mut fecha_mala = socio(3, "Lucía");
    fecha_mala.fecha_alta = Some("15/01/2026".to_string());
    assert!(matches!(
        socio_service::crear(&pool, &fecha_mala).await,
        Err(AppError::Validacion(_))
    ));

    let mut categoria_fantasma = socio(4, "Andrés");
    categoria_fantasma.categoria_id = Some(42);
    assert!(matches!(
        socio_service::crear(&pool, &categoria_fantasma).await,
        Err(AppError::Validacion(_))
    ));
}

#[tokio::test]
async fn el_listado_resuelve_el_nombre_de_la_categoria() {
    let pool = common::pool_pruebas().await;
    let adulto = categoria_service::crear(&pool, &categoria("Adulto"))
        .await
        .unwrap();

    let mut payload = socio(10, "Marta");
    payload.categoria_id = Some(adulto.id);
    socio_service::crear(&pool, &payload).await.unwrap();
    socio_service::crear(&pool, &socio(11, "Pedro")).await.unwrap();

    let socios = socio_service::listar(&pool).await.unwrap();
    assert_eq!(socios.len(), 2);
    // Ordenados por número de socio
    assert_eq!(socios[0].numero_socio, 10);
    assert_eq!(socios[0].categoria.as_deref(), Some("Adulto"));
    assert_eq!(socios[1].categoria, None);
}

#[tokio::test]
async fn actualizar_y_eliminar() {
    let pool = common::pool_pruebas().await;
    let creado = socio_service::crear(&pool, &socio(5, "Marta")).await.unwrap();

    let mut cambios = socio(5, "Marta Isabel");
    cambios.activo = false;
    let actualizado = socio_service::actualizar(&pool, &creado.id, &cambios)
        .await
        .unwrap();
    assert_eq!(actualizado.nombre, "Marta Isabel");
    assert!(!actualizado.activo);

    socio_service::eliminar(&pool, &creado.id).await.unwrap();
    assert!(socio_service::buscar_por_id(&pool, &creado.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn operar_sobre_un_socio_inexistente_devuelve_not_found() {
    let pool = common::pool_pruebas().await;

    assert!(matches!(
        socio_service::actualizar(&pool, "no-existe", &socio(6, "Nadie")).await,
        Err(AppError::NoEncontrado(_))
    ));
    assert!(matches!(
        socio_service::eliminar(&pool, "no-existe").await,
        Err(AppError::NoEncontrado(_))
    ));
}

#[tokio::test]
async fn una_categoria_con_socios_no_se_puede_eliminar() {
    let pool = common::pool_pruebas().await;
    let infantil = categoria_service::crear(&pool, &categoria("Infantil"))
        .await
        .unwrap();

    let mut payload = socio(20, "Teo");
    payload.categoria_id = Some(infantil.id);
    socio_service::crear(&pool, &payload).await.unwrap();

    let error = categoria_service::eliminar(&pool, infantil.id)
        .await
        .expect_err("tiene socios asignados");
    assert!(matches!(error, AppError::Conflicto(_)));

    // Sin socios ya se puede
    let veterano = categoria_service::crear(&pool, &categoria("Veterano"))
        .await
        .unwrap();
    categoria_service::eliminar(&pool, veterano.id).await.unwrap();
}

#[tokio::test]
async fn nombre_de_categoria_duplicado_se_rechaza() {
    let pool = common::pool_pruebas().await;
    categoria_service::crear(&pool, &categoria("Adulto")).await.unwrap();

    let error = categoria_service::crear(&pool, &categoria("Adulto"))
        .await
        .expect_err("nombre repetido");
    assert!(matches!(error, AppError::Validacion(_)));
}
