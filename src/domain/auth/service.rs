use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{ActiveEnum, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;

use super::dto::{LoginRequest, LoginResponse, RegistroRequest, UsuarioResponse};
use crate::domain::usuario::entity::usuario::{self, Entity as Usuario, TipoUsuario};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::{generar_token, Claims};
use crate::utils::password::{hashear_contrasena, verificar_contrasena};

/// Edad mínima para registrarse
pub const EDAD_MINIMA: i32 = 13;

/// Mensaje único para usuario inexistente, cuenta inactiva o contraseña
/// incorrecta. No debe variar entre los tres casos: un mensaje distinto
/// permitiría enumerar cuentas registradas.
pub const MENSAJE_CREDENCIALES_INVALIDAS: &str = "Credenciales inválidas.";

/// Años cumplidos a la fecha `hoy`, comparando mes y día del calendario
/// (no una división de días por 365).
pub fn edad_cumplida(nacimiento: NaiveDate, hoy: NaiveDate) -> i32 {
    let mut edad = hoy.year() - nacimiento.year();
    if (hoy.month(), hoy.day()) < (nacimiento.month(), nacimiento.day()) {
        edad -= 1;
    }
    edad
}

pub struct AuthService;

impl AuthService {
    /// Registro de un cliente nuevo
    pub async fn registrar(
        state: AppState,
        req: RegistroRequest,
    ) -> Result<UsuarioResponse, AppError> {
        // 1. Fecha de nacimiento válida y edad mínima
        let fecha_nacimiento = Self::parsear_fecha_nacimiento(&req.fecha_nacimiento)?;

        let hoy = Utc::now().date_naive();
        if edad_cumplida(fecha_nacimiento, hoy) < EDAD_MINIMA {
            return Err(AppError::ValidationError(format!(
                "Debes tener al menos {} años para registrarte.",
                EDAD_MINIMA
            )));
        }

        // 2. Email no registrado previamente
        let existente = Usuario::find()
            .filter(usuario::Column::Email.eq(&req.email))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if existente.is_some() {
            return Err(AppError::Conflict("El email ya está registrado.".into()));
        }

        // 3. Hash de contraseña y alta del usuario
        let password_hash = hashear_contrasena(&req.password)?;
        let ahora = Utc::now().naive_utc();

        let nuevo = usuario::ActiveModel {
            email: Set(req.email),
            password_hash: Set(password_hash),
            nombre: Set(req.nombre),
            apellido: Set(req.apellido),
            telefono: Set(req.telefono),
            fecha_nacimiento: Set(fecha_nacimiento),
            tipo_usuario: Set(TipoUsuario::Cliente),
            activo: Set(true),
            created_at: Set(ahora),
            updated_at: Set(ahora),
            ..Default::default()
        };

        let creado = nuevo
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("No se pudo crear el usuario: {}", e)))?;

        info!(usuario_id = creado.usuario_id, "usuario registrado");

        Ok(UsuarioResponse::from(creado))
    }

    /// Inicio de sesión. Devuelve la respuesta y el token a colocar en la
    /// cookie de sesión.
    pub async fn login(
        state: AppState,
        req: LoginRequest,
    ) -> Result<(LoginResponse, String), AppError> {
        let encontrado = Usuario::find()
            .filter(usuario::Column::Email.eq(&req.email))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let usuario = encontrado
            .ok_or_else(|| AppError::Unauthorized(MENSAJE_CREDENCIALES_INVALIDAS.into()))?;

        if !usuario.activo {
            return Err(AppError::Unauthorized(MENSAJE_CREDENCIALES_INVALIDAS.into()));
        }

        if !verificar_contrasena(&req.password, &usuario.password_hash) {
            return Err(AppError::Unauthorized(MENSAJE_CREDENCIALES_INVALIDAS.into()));
        }

        let token = generar_token(
            usuario.usuario_id.to_string(),
            usuario.email.clone(),
            usuario.nombre.clone(),
            usuario.apellido.clone(),
            usuario.tipo_usuario.to_value(),
            &state.config.jwt_secret,
            state.config.jwt_expiration,
        )?;

        let redirect_to = usuario.tipo_usuario.destino_redireccion().to_string();

        Ok((
            LoginResponse {
                usuario: UsuarioResponse::from(usuario),
                redirect_to,
            },
            token,
        ))
    }

    /// Sesión actual. Los claims del token no se toman como verdad vigente:
    /// el usuario se vuelve a consultar para confirmar que existe y sigue
    /// activo.
    pub async fn sesion_actual(
        state: AppState,
        claims: &Claims,
    ) -> Result<UsuarioResponse, AppError> {
        let usuario_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Id de usuario inválido.".into()))?;

        let encontrado = Usuario::find_by_id(usuario_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let usuario =
            encontrado.ok_or_else(|| AppError::NotFound("El usuario ya no existe.".into()))?;

        if !usuario.activo {
            return Err(AppError::Unauthorized("La cuenta está desactivada.".into()));
        }

        Ok(UsuarioResponse::from(usuario))
    }

    fn parsear_fecha_nacimiento(valor: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(valor, "%Y-%m-%d").map_err(|_| {
            AppError::ValidationError(
                "La fecha de nacimiento no es válida. (formato YYYY-MM-DD)".to_string(),
            )
        })
    }
}
