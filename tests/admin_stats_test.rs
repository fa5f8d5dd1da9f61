//! Tests de los agregados administrativos
//!
//! Cubre:
//! - Cálculo del porcentaje de ocupación (definición única para
//!   dashboard y reportes)
//! - Serialización de las respuestas de estadísticas

use std::collections::BTreeMap;

use cine_server::domain::admin::dto::{
    ConteoPeliculas, DashboardStatsResponse, ReporteSummaryResponse, ReservasDelDia,
};
use cine_server::domain::admin::service::porcentaje_ocupacion;

// ============== Porcentaje de ocupación ==============

#[test]
fn calcula_el_porcentaje_simple() {
    assert_eq!(porcentaje_ocupacion(50, 100), 50.0);
    assert_eq!(porcentaje_ocupacion(100, 100), 100.0);
    assert_eq!(porcentaje_ocupacion(0, 100), 0.0);
}

#[test]
fn redondea_a_dos_decimales() {
    // 1/3 → 33.333... → 33.33
    assert_eq!(porcentaje_ocupacion(1, 3), 33.33);
    // 2/3 → 66.666... → 66.67
    assert_eq!(porcentaje_ocupacion(2, 3), 66.67);
}

#[test]
fn capacidad_cero_da_cero_sin_dividir() {
    assert_eq!(porcentaje_ocupacion(10, 0), 0.0);
    assert_eq!(porcentaje_ocupacion(0, 0), 0.0);
}

#[test]
fn capacidad_negativa_tambien_da_cero() {
    assert_eq!(porcentaje_ocupacion(10, -5), 0.0);
}

// ============== Serialización ==============

#[test]
fn las_estadisticas_serializan_en_camel_case() {
    let mut por_estado = BTreeMap::new();
    por_estado.insert("PAGADA".to_string(), 3u64);
    por_estado.insert("PENDIENTE".to_string(), 1u64);

    let stats = DashboardStatsResponse {
        peliculas: ConteoPeliculas {
            total: 12,
            activas: 9,
        },
        usuarios_activos: 40,
        salas_activas: 5,
        funciones_hoy: 8,
        reservas_hoy: ReservasDelDia {
            total: 4,
            asientos_pagados: 10,
            ingresos: 125.5,
            por_estado,
        },
        ocupacion_hoy: 42.5,
    };

    let json = serde_json::to_string(&stats).unwrap();

    assert!(json.contains("usuariosActivos"));
    assert!(json.contains("funcionesHoy"));
    assert!(json.contains("reservasHoy"));
    assert!(json.contains("asientosPagados"));
    assert!(json.contains("ocupacionHoy"));
    assert!(json.contains("\"PAGADA\":3"));
}

#[test]
fn el_resumen_de_reportes_lleva_el_dia_resumido() {
    let resumen = ReporteSummaryResponse {
        fecha: "2026-08-06".to_string(),
        funciones: 6,
        entradas_vendidas: 80,
        ingresos: 960.0,
        ocupacion: 53.33,
        por_estado: BTreeMap::new(),
    };

    let json = serde_json::to_string(&resumen).unwrap();

    assert!(json.contains("\"fecha\":\"2026-08-06\""));
    assert!(json.contains("entradasVendidas"));
    assert!(json.contains("\"ocupacion\":53.33"));
}
