use serde::Serialize;
use utoipa::ToSchema;

use super::entity::{genero, pais};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneroResponse {
    pub genero_id: i64,
    pub nombre: String,
}

impl From<genero::Model> for GeneroResponse {
    fn from(modelo: genero::Model) -> Self {
        Self {
            genero_id: modelo.genero_id,
            nombre: modelo.nombre,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaisResponse {
    pub pais_id: i64,
    pub nombre: String,
}

impl From<pais::Model> for PaisResponse {
    fn from(modelo: pais::Model) -> Self {
        Self {
            pais_id: modelo.pais_id,
            nombre: modelo.nombre,
        }
    }
}
