use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::usuario::entity::usuario::{self, TipoUsuario};

/// Solicitud de registro de cliente
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistroRequest {
    #[validate(email(message = "El formato del email no es válido."))]
    pub email: String,

    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub password: String,

    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,

    #[validate(length(min = 1, message = "El apellido es obligatorio."))]
    pub apellido: String,

    #[validate(length(min = 1, message = "El teléfono es obligatorio."))]
    pub telefono: String,

    /// Formato YYYY-MM-DD
    #[validate(length(min = 1, message = "La fecha de nacimiento es obligatoria."))]
    pub fecha_nacimiento: String,
}

/// Usuario expuesto por la API. Nunca incluye el hash de contraseña.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioResponse {
    pub usuario_id: i64,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
    pub tipo_usuario: TipoUsuario,
    pub activo: bool,
}

impl From<usuario::Model> for UsuarioResponse {
    fn from(modelo: usuario::Model) -> Self {
        Self {
            usuario_id: modelo.usuario_id,
            email: modelo.email,
            nombre: modelo.nombre,
            apellido: modelo.apellido,
            telefono: modelo.telefono,
            fecha_nacimiento: modelo.fecha_nacimiento.format("%Y-%m-%d").to_string(),
            tipo_usuario: modelo.tipo_usuario,
            activo: modelo.activo,
        }
    }
}

/// Solicitud de inicio de sesión
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "El formato del email no es válido."))]
    pub email: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub password: String,
}

/// Respuesta de login. El token viaja en la cookie `auth-token`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub usuario: UsuarioResponse,
    /// `/admin` para roles de personal, `/cliente` en otro caso
    pub redirect_to: String,
}

// --- Envoltorios para Swagger ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRegistroResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: UsuarioResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLoginResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: LoginResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSesionResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: UsuarioResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLogoutResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}
