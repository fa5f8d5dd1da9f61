use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::sala::dto::SalaResumen;

/// Función ofrecida a clientes para reservar
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuncionListadoItem {
    pub funcion_id: i64,
    pub fecha_hora_inicio: String,
    pub fecha_hora_fin: String,
    pub precio_base: f64,
    pub precio_descuento: Option<f64>,
    pub asientos_disponibles: i32,
    pub asientos_reservados: i32,
    /// Reservas vivas sobre esta función
    pub total_reservas: u64,
    pub sala: SalaResumen,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFuncionesResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<FuncionListadoItem>,
}
