use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::reserva::EstadoReserva;
use crate::domain::sala::dto::SalaResumen;

/// Solicitud de creación de reserva
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservaCrearRequest {
    pub funcion_id: i64,

    #[validate(length(min = 1, message = "Debes seleccionar al menos un asiento."))]
    pub asiento_ids: Vec<i64>,
}

/// Asiento asignado a una reserva
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AsientoAsignado {
    pub asiento_id: i64,
    pub fila: i32,
    pub numero: i32,
}

/// Película embebida en el detalle de reserva
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeliculaReservaInfo {
    pub pelicula_id: i64,
    pub titulo: String,
    pub clasificacion: String,
    pub duracion_minutos: i32,
}

/// Función embebida en el detalle de reserva
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuncionReservaInfo {
    pub funcion_id: i64,
    pub fecha_hora_inicio: String,
    pub fecha_hora_fin: String,
    pub pelicula: PeliculaReservaInfo,
    pub sala: SalaResumen,
}

/// Detalle completo de una reserva. Montos numéricos, fechas ISO.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservaDetalleResponse {
    pub reserva_id: i64,
    pub codigo_reserva: String,
    pub estado: EstadoReserva,
    pub cantidad_asientos: i32,
    pub precio_total: f64,
    pub fecha_reserva: String,
    pub fecha_vencimiento: String,
    pub usuario_id: Option<i64>,
    pub funcion: FuncionReservaInfo,
    pub asientos: Vec<AsientoAsignado>,
}

// --- Envoltorios para Swagger ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessReservaDetalleResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ReservaDetalleResponse,
}
