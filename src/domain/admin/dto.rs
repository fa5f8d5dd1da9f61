use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Conteo de películas del dashboard
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConteoPeliculas {
    pub total: u64,
    pub activas: u64,
}

/// Agregados de reservas del día
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservasDelDia {
    pub total: u64,
    /// Asientos de reservas pagadas
    pub asientos_pagados: i64,
    /// Ingresos de reservas pagadas
    pub ingresos: f64,
    pub por_estado: BTreeMap<String, u64>,
}

/// Estadísticas del día en curso. Se calculan con consultas en vivo en
/// cada llamada; dos llamadas consecutivas pueden diferir.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub peliculas: ConteoPeliculas,
    pub usuarios_activos: u64,
    pub salas_activas: u64,
    pub funciones_hoy: u64,
    pub reservas_hoy: ReservasDelDia,
    /// Asientos de reservas vivas ÷ capacidad de las salas con función hoy
    pub ocupacion_hoy: f64,
}

/// Query params del resumen de reportes
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosReporte {
    /// Día a resumir (YYYY-MM-DD); por defecto, hoy
    pub fecha: Option<String>,
}

/// Resumen diario de ventas y ocupación
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReporteSummaryResponse {
    pub fecha: String,
    pub funciones: u64,
    pub entradas_vendidas: i64,
    pub ingresos: f64,
    pub ocupacion: f64,
    pub por_estado: BTreeMap<String, u64>,
}

// --- Envoltorios para Swagger ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDashboardStatsResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DashboardStatsResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessReporteSummaryResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ReporteSummaryResponse,
}
