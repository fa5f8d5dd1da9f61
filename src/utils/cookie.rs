use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;

use crate::utils::error::AppError;

/// Nombre de la cookie de sesión
pub const AUTH_TOKEN_COOKIE: &str = "auth-token";

/// Duración de la sesión: 7 días
pub const MAX_AGE_SESION_SEGUNDOS: i64 = 7 * 24 * 60 * 60;

/// Construye el valor del header Set-Cookie.
/// SameSite=Strict y HttpOnly en todo el sitio (Path=/).
fn build_cookie(name: &str, value: &str, max_age_seconds: i64) -> Result<HeaderValue, AppError> {
    let cookie = format!(
        "{}={}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={}",
        name, value, max_age_seconds
    );
    HeaderValue::from_str(&cookie)
        .map_err(|_| AppError::InternalError(format!("Valor de cookie {} inválido", name)))
}

/// Cookie de sesión con el token firmado
pub fn crear_cookie_sesion(token: &str) -> Result<HeaderValue, AppError> {
    build_cookie(AUTH_TOKEN_COOKIE, token, MAX_AGE_SESION_SEGUNDOS)
}

/// Sobrescribe la cookie de sesión con un valor vacío que expira de inmediato
pub fn limpiar_cookie_sesion() -> Result<HeaderValue, AppError> {
    build_cookie(AUTH_TOKEN_COOKIE, "", 0)
}

/// Header Set-Cookie
pub fn set_cookie_header() -> axum::http::HeaderName {
    SET_COOKIE
}
