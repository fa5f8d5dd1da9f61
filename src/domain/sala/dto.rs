use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::sala::{self, TipoSala};
use crate::utils::response::Paginacion;

/// Límite máximo de resultados por página en el listado de salas
pub const LIMITE_MAX_SALAS: u64 = 100;

/// Query params del listado administrativo de salas
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosSalas {
    pub search: Option<String>,
    pub activa: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl FiltrosSalas {
    pub fn pagina(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Límite acotado a `LIMITE_MAX_SALAS` sin importar lo pedido
    pub fn limite(&self) -> u64 {
        self.limit.unwrap_or(LIMITE_MAX_SALAS).clamp(1, LIMITE_MAX_SALAS)
    }
}

/// Solicitud de creación de sala
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaCrearRequest {
    #[validate(range(min = 1, message = "El número de sala debe ser mayor que cero."))]
    pub numero: i32,

    #[validate(length(min = 1, message = "El nombre de la sala es obligatorio."))]
    pub nombre: String,

    pub tipo_sala: TipoSala,

    #[validate(range(min = 1, message = "Las filas deben ser al menos 1."))]
    pub filas: i32,

    #[validate(range(min = 1, message = "Los asientos por fila deben ser al menos 1."))]
    pub asientos_por_fila: i32,

    #[validate(range(min = 1, message = "La capacidad total debe ser mayor que cero."))]
    pub capacidad_total: i32,

    pub precio_extra: Option<f64>,

    pub equipamiento: Option<String>,
}

impl SalaCrearRequest {
    /// Invariante de capacidad: filas × asientos por fila
    pub fn capacidad_consistente(&self) -> bool {
        self.filas
            .checked_mul(self.asientos_por_fila)
            .map(|capacidad| capacidad == self.capacidad_total)
            .unwrap_or(false)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaResponse {
    pub sala_id: i64,
    pub numero: i32,
    pub nombre: String,
    pub tipo_sala: TipoSala,
    pub capacidad_total: i32,
    pub filas: i32,
    pub asientos_por_fila: i32,
    pub precio_extra: f64,
    pub equipamiento: Option<String>,
    pub activo: bool,
}

impl From<sala::Model> for SalaResponse {
    fn from(modelo: sala::Model) -> Self {
        Self {
            sala_id: modelo.sala_id,
            numero: modelo.numero,
            nombre: modelo.nombre,
            tipo_sala: modelo.tipo_sala,
            capacidad_total: modelo.capacidad_total,
            filas: modelo.filas,
            asientos_por_fila: modelo.asientos_por_fila,
            precio_extra: modelo.precio_extra.to_f64().unwrap_or(0.0),
            equipamiento: modelo.equipamiento,
            activo: modelo.activo,
        }
    }
}

/// Sala resumida, embebida en funciones y detalles de película
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaResumen {
    pub sala_id: i64,
    pub numero: i32,
    pub nombre: String,
    pub tipo_sala: TipoSala,
    pub capacidad_total: i32,
}

impl From<sala::Model> for SalaResumen {
    fn from(modelo: sala::Model) -> Self {
        Self {
            sala_id: modelo.sala_id,
            numero: modelo.numero,
            nombre: modelo.nombre,
            tipo_sala: modelo.tipo_sala,
            capacidad_total: modelo.capacidad_total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListadoSalasResponse {
    pub salas: Vec<SalaResponse>,
    pub pagination: Paginacion,
}

// --- Envoltorios para Swagger ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessListadoSalasResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ListadoSalasResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSalaResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: SalaResponse,
}
