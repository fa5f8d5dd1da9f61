use axum::{
    extract::{Path, State},
    Json,
};
use utoipa;

use super::dto::FuncionListadoItem;
use super::service::FuncionService;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Funciones de una película
///
/// Solo funciones futuras y activas, cada una con su sala y el número de
/// reservas vivas, ordenadas por hora de inicio.
#[utoipa::path(
    get,
    path = "/api/cliente/peliculas/{id}/funciones",
    params(
        ("id" = i64, Path, description = "Id de la película")
    ),
    responses(
        (status = 200, description = "Funciones disponibles", body = SuccessFuncionesResponse),
        (status = 404, description = "Película inexistente o inactiva", body = ErrorResponse)
    ),
    tag = "Funciones"
)]
pub async fn funciones_por_pelicula(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<FuncionListadoItem>>>, AppError> {
    let funciones = FuncionService::funciones_por_pelicula(&state, id).await?;

    Ok(Json(BaseResponse::success(funciones)))
}
