use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa;
use validator::Validate;

use super::dto::{ReservaCrearRequest, ReservaDetalleResponse};
use super::service::ReservaService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Detalle de una reserva
///
/// Incluye la función con su película y sala, y los asientos asignados.
#[utoipa::path(
    get,
    path = "/api/cliente/reservas/{id}",
    params(
        ("id" = i64, Path, description = "Id de la reserva")
    ),
    responses(
        (status = 200, description = "Detalle de la reserva", body = SuccessReservaDetalleResponse),
        (status = 404, description = "Reserva inexistente", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn detalle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<ReservaDetalleResponse>>, AppError> {
    let reserva = ReservaService::detalle(&state, id).await?;

    Ok(Json(BaseResponse::success(reserva)))
}

/// Creación de reserva
///
/// Reserva los asientos seleccionados para una función futura. La
/// reserva nace PENDIENTE con un plazo de pago de 15 minutos.
#[utoipa::path(
    post,
    path = "/api/cliente/reservas",
    request_body = ReservaCrearRequest,
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 201, description = "Reserva creada", body = SuccessReservaDetalleResponse),
        (status = 400, description = "Datos inválidos o función ya iniciada", body = ErrorResponse),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 404, description = "Función inexistente", body = ErrorResponse),
        (status = 409, description = "Asientos ya reservados", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn crear(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<ReservaCrearRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let usuario_id = user.usuario_id()?;
    let reserva = ReservaService::crear(&state, usuario_id, req).await?;

    Ok((StatusCode::CREATED, Json(BaseResponse::created(reserva))))
}

/// Cancelación de reserva
///
/// Solo el dueño puede cancelar, y solo mientras la reserva no esté
/// pagada ni utilizada. Los asientos vuelven a quedar disponibles.
#[utoipa::path(
    post,
    path = "/api/cliente/reservas/{id}/cancelar",
    params(
        ("id" = i64, Path, description = "Id de la reserva")
    ),
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 200, description = "Reserva cancelada"),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 403, description = "La reserva pertenece a otro usuario", body = ErrorResponse),
        (status = 404, description = "Reserva inexistente", body = ErrorResponse),
        (status = 409, description = "Estado no cancelable", body = ErrorResponse)
    ),
    tag = "Reservas"
)]
pub async fn cancelar(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let usuario_id = user.usuario_id()?;
    ReservaService::cancelar(&state, usuario_id, id).await?;

    Ok(Json(BaseResponse::success(())))
}
