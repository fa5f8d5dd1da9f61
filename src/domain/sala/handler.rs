use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa;
use validator::Validate;

use super::dto::{FiltrosSalas, ListadoSalasResponse, SalaCrearRequest};
use super::service::SalaService;
use crate::state::AppState;
use crate::utils::auth::StaffUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Listado administrativo de salas
///
/// Paginado (límite máximo 100), con búsqueda por nombre o número y
/// filtro por estado. Requiere rol de personal.
#[utoipa::path(
    get,
    path = "/api/admin/salas",
    params(
        ("search" = Option<String>, Query, description = "Nombre o número de sala"),
        ("activa" = Option<bool>, Query, description = "Filtrar por estado"),
        ("page" = Option<u64>, Query, description = "Página, desde 1"),
        ("limit" = Option<u64>, Query, description = "Resultados por página, máximo 100")
    ),
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 200, description = "Listado paginado de salas", body = SuccessListadoSalasResponse),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 403, description = "Rol sin permisos", body = ErrorResponse)
    ),
    tag = "Salas"
)]
pub async fn listar(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(filtros): Query<FiltrosSalas>,
) -> Result<Json<BaseResponse<ListadoSalasResponse>>, AppError> {
    let listado = SalaService::listar(&state, filtros).await?;

    Ok(Json(BaseResponse::success(listado)))
}

/// Alta de sala
///
/// Valida el invariante capacidad = filas × asientos por fila y rechaza
/// números de sala duplicados. Requiere rol de personal.
#[utoipa::path(
    post,
    path = "/api/admin/salas",
    request_body = SalaCrearRequest,
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 201, description = "Sala creada", body = SuccessSalaResponse),
        (status = 400, description = "Datos inválidos o capacidad inconsistente", body = ErrorResponse),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 403, description = "Rol sin permisos", body = ErrorResponse),
        (status = 409, description = "Número de sala duplicado", body = ErrorResponse)
    ),
    tag = "Salas"
)]
pub async fn crear(
    State(state): State<AppState>,
    _staff: StaffUser,
    Json(req): Json<SalaCrearRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let sala = SalaService::crear(&state, req).await?;

    Ok((StatusCode::CREATED, Json(BaseResponse::created(sala))))
}
