use axum::{
    extract::{Path, Query, State},
    Json,
};
use utoipa;

use super::dto::{
    FiltrosBusquedaSimple, FiltrosPeliculas, ListadoPeliculasResponse, PeliculaDetalleResponse,
    PeliculaSimpleItem,
};
use super::service::PeliculaService;
use crate::state::AppState;
use crate::utils::auth::StaffUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Listado público de películas
///
/// Solo devuelve películas activas. Admite búsqueda libre sobre título,
/// director y reparto, filtro por clasificación y ordenación; `limit` se
/// acota a 50.
#[utoipa::path(
    get,
    path = "/api/public/peliculas",
    params(
        ("search" = Option<String>, Query, description = "Búsqueda libre (título, director, reparto)"),
        ("clasificacion" = Option<String>, Query, description = "Etiqueta de clasificación, p. ej. PG-13"),
        ("ordenarPor" = Option<String>, Query, description = "titulo | puntuacion | fecha_estreno"),
        ("page" = Option<u64>, Query, description = "Página, desde 1"),
        ("limit" = Option<u64>, Query, description = "Resultados por página, máximo 50")
    ),
    responses(
        (status = 200, description = "Listado paginado", body = SuccessListadoPeliculasResponse),
        (status = 400, description = "Filtro inválido", body = ErrorResponse)
    ),
    tag = "Películas"
)]
pub async fn listar_publicas(
    State(state): State<AppState>,
    Query(filtros): Query<FiltrosPeliculas>,
) -> Result<Json<BaseResponse<ListadoPeliculasResponse>>, AppError> {
    let listado = PeliculaService::listar_publicas(&state, filtros).await?;

    Ok(Json(BaseResponse::success(listado)))
}

/// Detalle público de una película
///
/// Incluye las funciones próximas (con ventana de gracia de 30 minutos)
/// y la lista de géneros.
#[utoipa::path(
    get,
    path = "/api/public/peliculas/{id}",
    params(
        ("id" = i64, Path, description = "Id de la película")
    ),
    responses(
        (status = 200, description = "Detalle de la película", body = SuccessPeliculaDetalleResponse),
        (status = 404, description = "Película inexistente o inactiva", body = ErrorResponse)
    ),
    tag = "Películas"
)]
pub async fn detalle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<PeliculaDetalleResponse>>, AppError> {
    let pelicula = PeliculaService::detalle(&state, id).await?;

    Ok(Json(BaseResponse::success(pelicula)))
}

/// Búsqueda administrativa simple
///
/// Hasta 50 películas por título, director o género, las más recientes
/// primero. Requiere rol de personal.
#[utoipa::path(
    get,
    path = "/api/admin/peliculas/simple",
    params(
        ("search" = Option<String>, Query, description = "Texto a buscar")
    ),
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 200, description = "Resultados de búsqueda", body = [PeliculaSimpleItem]),
        (status = 401, description = "Sesión inválida", body = ErrorResponse),
        (status = 403, description = "Rol sin permisos", body = ErrorResponse)
    ),
    tag = "Películas"
)]
pub async fn buscar_simple(
    State(state): State<AppState>,
    _staff: StaffUser,
    Query(filtros): Query<FiltrosBusquedaSimple>,
) -> Result<Json<BaseResponse<Vec<PeliculaSimpleItem>>>, AppError> {
    let peliculas = PeliculaService::buscar_simple(&state, filtros.search).await?;

    Ok(Json(BaseResponse::success(peliculas)))
}
