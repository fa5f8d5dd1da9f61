use axum::{
    extract::{Query, State},
    Json,
};
use utoipa;

use super::dto::{DashboardStatsResponse, FiltrosReporte, ReporteSummaryResponse};
use super::service::AdminService;
use crate::state::AppState;
use crate::utils::auth::StaffUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Estadísticas del dashboard
///
/// Agregados del día en curso calculados con consultas en vivo.
/// Requiere rol de personal.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/stats",
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 200, description = "Estadísticas del día", body = SuccessDashboardStatsResponse),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 403, description = "Rol sin permisos", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _staff: StaffUser,
) -> Result<Json<BaseResponse<DashboardStatsResponse>>, AppError> {
    let stats = AdminService::estadisticas_dashboard(&state).await?;

    Ok(Json(BaseResponse::success(stats)))
}

/// Resumen de reportes
///
/// Ventas y ocupación de un día (por defecto, hoy). Usa la misma
/// definición de ocupación que el dashboard. Requiere rol de personal.
#[utoipa::path(
    get,
    path = "/api/admin/reportes/summary",
    params(
        ("fecha" = Option<String>, Query, description = "Día a resumir (YYYY-MM-DD)")
    ),
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 200, description = "Resumen del día", body = SuccessReporteSummaryResponse),
        (status = 400, description = "Fecha inválida", body = ErrorResponse),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 403, description = "Rol sin permisos", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn reportes_summary(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(filtros): Query<FiltrosReporte>,
) -> Result<Json<BaseResponse<ReporteSummaryResponse>>, AppError> {
    let resumen = AdminService::resumen_reportes(&state, filtros).await?;

    Ok(Json(BaseResponse::success(resumen)))
}
