use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::dto::{GeneroResponse, PaisResponse};
use super::entity::{genero, pais};
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct CatalogoService;

impl CatalogoService {
    /// Géneros activos ordenados por nombre
    pub async fn listar_generos(state: &AppState) -> Result<Vec<GeneroResponse>, AppError> {
        let generos = genero::Entity::find()
            .filter(genero::Column::Activo.eq(true))
            .order_by_asc(genero::Column::Nombre)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(generos.into_iter().map(GeneroResponse::from).collect())
    }

    /// Países activos ordenados por nombre
    pub async fn listar_paises(state: &AppState) -> Result<Vec<PaisResponse>, AppError> {
        let paises = pais::Entity::find()
            .filter(pais::Column::Activo.eq(true))
            .order_by_asc(pais::Column::Nombre)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(paises.into_iter().map(PaisResponse::from).collect())
    }
}
