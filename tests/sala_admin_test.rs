//! Tests de gestión de salas
//!
//! Cubre:
//! - Validación de SalaCrearRequest
//! - Invariante capacidad_total = filas × asientos_por_fila
//! - Acotado del límite de paginación del listado
//! - Serialización de SalaResponse

use cine_server::domain::sala::dto::{
    FiltrosSalas, SalaCrearRequest, SalaResponse, LIMITE_MAX_SALAS,
};
use cine_server::domain::sala::entity::sala::TipoSala;
use validator::Validate;

fn solicitud_valida() -> SalaCrearRequest {
    SalaCrearRequest {
        numero: 1,
        nombre: "Sala Principal".to_string(),
        tipo_sala: TipoSala::Estandar,
        filas: 10,
        asientos_por_fila: 10,
        capacidad_total: 100,
        precio_extra: None,
        equipamiento: None,
    }
}

// ============== Validación ==============

#[test]
fn acepta_sala_bien_formada() {
    let req = solicitud_valida();

    assert!(req.validate().is_ok());
    assert!(req.capacidad_consistente());
}

#[test]
fn rechaza_numero_de_sala_cero() {
    let mut req = solicitud_valida();
    req.numero = 0;

    assert!(req.validate().is_err());
}

#[test]
fn rechaza_nombre_vacio() {
    let mut req = solicitud_valida();
    req.nombre = String::new();

    assert!(req.validate().is_err());
}

// ============== Invariante de capacidad ==============

#[test]
fn detecta_capacidad_inconsistente() {
    // 10 × 10 ≠ 99
    let mut req = solicitud_valida();
    req.capacidad_total = 99;

    assert!(!req.capacidad_consistente());
}

#[test]
fn verifica_la_capacidad_en_varias_combinaciones() {
    let casos = [
        (10, 10, 100, true),
        (10, 10, 99, false),
        (8, 12, 96, true),
        (8, 12, 95, false),
        (1, 1, 1, true),
        (5, 20, 100, true),
        (5, 20, 101, false),
    ];

    for (filas, asientos_por_fila, capacidad_total, esperado) in casos {
        let mut req = solicitud_valida();
        req.filas = filas;
        req.asientos_por_fila = asientos_por_fila;
        req.capacidad_total = capacidad_total;

        assert_eq!(
            req.capacidad_consistente(),
            esperado,
            "{} × {} vs {}",
            filas,
            asientos_por_fila,
            capacidad_total
        );
    }
}

#[test]
fn el_desbordamiento_no_pasa_por_consistente() {
    let mut req = solicitud_valida();
    req.filas = i32::MAX;
    req.asientos_por_fila = 2;
    req.capacidad_total = i32::MAX;

    assert!(!req.capacidad_consistente());
}

// ============== Límite de paginación ==============

#[test]
fn el_limite_se_acota_a_100() {
    let filtros = FiltrosSalas {
        limit: Some(10_000),
        ..Default::default()
    };

    assert_eq!(filtros.limite(), LIMITE_MAX_SALAS);
}

#[test]
fn sin_limite_se_usa_el_maximo() {
    let filtros = FiltrosSalas::default();

    assert_eq!(filtros.limite(), LIMITE_MAX_SALAS);
    assert_eq!(filtros.pagina(), 1);
}

// ============== Serialización ==============

#[test]
fn la_respuesta_de_sala_serializa_en_camel_case() {
    let respuesta = SalaResponse {
        sala_id: 4,
        numero: 2,
        nombre: "Sala IMAX".to_string(),
        tipo_sala: TipoSala::Imax,
        capacidad_total: 200,
        filas: 10,
        asientos_por_fila: 20,
        precio_extra: 3.5,
        equipamiento: Some("Dolby Atmos".to_string()),
        activo: true,
    };

    let json = serde_json::to_string(&respuesta).unwrap();

    assert!(json.contains("salaId"));
    assert!(json.contains("capacidadTotal"));
    assert!(json.contains("asientosPorFila"));
    assert!(json.contains("precioExtra"));
    assert!(!json.contains("sala_id"));
}
