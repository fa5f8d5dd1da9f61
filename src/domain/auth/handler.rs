use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa;
use validator::Validate;

use super::dto::{LoginRequest, RegistroRequest, UsuarioResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::cookie::{crear_cookie_sesion, limpiar_cookie_sesion, set_cookie_header};
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// Registro de usuario
///
/// Crea una cuenta de cliente. La respuesta nunca incluye el hash de
/// contraseña.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegistroRequest,
    responses(
        (status = 201, description = "Usuario creado", body = SuccessRegistroResponse),
        (status = 400, description = "Datos inválidos", body = ErrorResponse),
        (status = 409, description = "Email ya registrado", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegistroRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let usuario = AuthService::registrar(state, req).await?;

    Ok((StatusCode::CREATED, Json(BaseResponse::created(usuario))))
}

/// Inicio de sesión
///
/// Valida credenciales y emite el token de sesión en la cookie
/// `auth-token`. El mismo mensaje genérico cubre usuario inexistente,
/// cuenta inactiva y contraseña incorrecta.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Sesión iniciada", body = SuccessLoginResponse),
        (status = 401, description = "Credenciales inválidas", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let (result, token) = AuthService::login(state, req).await?;
    let cookie = crear_cookie_sesion(&token)?;

    Ok((
        [(set_cookie_header(), cookie)],
        Json(BaseResponse::success(result)),
    ))
}

/// Cierre de sesión
///
/// Sobrescribe la cookie de sesión con un valor vacío que expira de
/// inmediato.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Sesión cerrada", body = SuccessLogoutResponse)
    ),
    tag = "Auth"
)]
pub async fn logout() -> Result<impl IntoResponse, AppError> {
    let cookie = limpiar_cookie_sesion()?;

    Ok((
        [(set_cookie_header(), cookie)],
        Json(BaseResponse::success(())),
    ))
}

/// Sesión actual
///
/// Lee el token de la cookie `auth-token` o del header Authorization y
/// devuelve el usuario vigente.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    security(
        ("cookie_auth" = [])
    ),
    responses(
        (status = 200, description = "Usuario de la sesión", body = SuccessSesionResponse),
        (status = 401, description = "Sesión inválida o expirada", body = ErrorResponse),
        (status = 404, description = "El usuario ya no existe", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<UsuarioResponse>>, AppError> {
    let usuario = AuthService::sesion_actual(state, &user.0).await?;

    Ok(Json(BaseResponse::success(usuario)))
}
