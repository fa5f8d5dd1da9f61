use axum::{extract::State, Json};
use utoipa;

use super::dto::{GeneroResponse, PaisResponse};
use super::service::CatalogoService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Listado de géneros activos
#[utoipa::path(
    get,
    path = "/api/generos",
    responses(
        (status = 200, description = "Géneros activos ordenados por nombre", body = [GeneroResponse])
    ),
    tag = "Catálogo"
)]
pub async fn listar_generos(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<GeneroResponse>>>, AppError> {
    let generos = CatalogoService::listar_generos(&state).await?;

    Ok(Json(BaseResponse::success(generos)))
}

/// Listado de países activos
#[utoipa::path(
    get,
    path = "/api/paises",
    responses(
        (status = 200, description = "Países activos ordenados por nombre", body = [PaisResponse])
    ),
    tag = "Catálogo"
)]
pub async fn listar_paises(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<PaisResponse>>>, AppError> {
    let paises = CatalogoService::listar_paises(&state).await?;

    Ok(Json(BaseResponse::success(paises)))
}
