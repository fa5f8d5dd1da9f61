use axum::{
    async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::header::COOKIE,
    http::request::Parts,
};
use sea_orm::ActiveEnum;

use crate::domain::usuario::entity::usuario::TipoUsuario;
use crate::state::AppState;
use crate::utils::cookie::AUTH_TOKEN_COOKIE;
use crate::utils::error::AppError;
use crate::utils::jwt::{decodificar_token, Claims};

/// Extractor con el principal autenticado
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Id de usuario contenido en los claims
    pub fn usuario_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Id de usuario inválido.".to_string()))
    }

    /// Tipo de usuario contenido en los claims
    pub fn tipo_usuario(&self) -> Result<TipoUsuario, AppError> {
        TipoUsuario::try_from_value(&self.0.tipo_usuario)
            .map_err(|_| AppError::Unauthorized("Tipo de usuario inválido.".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Intentar con el header Authorization
        let token = if let Some(auth_header) = parts.headers.get(AUTHORIZATION) {
            let auth_header_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Formato de header inválido.".to_string()))?;

            if !auth_header_str.starts_with("Bearer ") {
                return Err(AppError::Unauthorized(
                    "Formato de token incorrecto.".to_string(),
                ));
            }

            auth_header_str[7..].to_string()
        } else {
            // 2. Intentar con la cookie de sesión
            extraer_token_de_cookie(parts)?
        };

        let claims = decodificar_token(&token, &state.config.jwt_secret)?;

        Ok(AuthUser(claims))
    }
}

/// Extractor para rutas administrativas: exige un rol de personal
/// (empleado, administrador o gerente).
pub struct StaffUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for StaffUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        let tipo = TipoUsuario::try_from_value(&claims.tipo_usuario)
            .map_err(|_| AppError::Unauthorized("Tipo de usuario inválido.".to_string()))?;

        if !tipo.es_personal() {
            return Err(AppError::Forbidden(
                "No tienes permisos para acceder a esta sección.".to_string(),
            ));
        }

        Ok(StaffUser(claims))
    }
}

/// Extrae el token de la cookie `auth-token`
fn extraer_token_de_cookie(parts: &Parts) -> Result<String, AppError> {
    let cookie_header = parts
        .headers
        .get(COOKIE)
        .ok_or_else(|| AppError::Unauthorized("Inicio de sesión requerido.".to_string()))?;

    let cookie_str = cookie_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Formato de cookie inválido.".to_string()))?;

    // Formato: "nombre1=valor1; nombre2=valor2"
    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", AUTH_TOKEN_COOKIE)) {
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    Err(AppError::Unauthorized(
        "Inicio de sesión requerido.".to_string(),
    ))
}
