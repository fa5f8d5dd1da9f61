use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Claims del token de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (id de usuario)
    pub sub: String,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    /// Valor textual de `TipoUsuario` (CLIENTE, EMPLEADO, ...)
    pub tipo_usuario: String,
    /// Issued At
    pub iat: usize,
    /// Expiration
    pub exp: usize,
}

/// Genera el token de sesión firmado
pub fn generar_token(
    sub: String,
    email: String,
    nombre: String,
    apellido: String,
    tipo_usuario: String,
    secret: &str,
    expiracion_segundos: i64,
) -> Result<String, AppError> {
    let ahora = Utc::now();
    let expiracion = ahora
        .checked_add_signed(Duration::seconds(expiracion_segundos))
        .ok_or_else(|| AppError::InternalError("Expiración de token fuera de rango".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub,
        email,
        nombre,
        apellido,
        tipo_usuario,
        iat: ahora.timestamp() as usize,
        exp: expiracion,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("No se pudo generar el token: {}", e)))
}

/// Valida y decodifica el token de sesión
pub fn decodificar_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::default();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("La sesión ha expirado.".into())
        }
        _ => AppError::Unauthorized("Token inválido.".into()),
    })
}

/// Verificación tolerante: devuelve los claims o `None` ante cualquier fallo
/// (expirado, malformado, firma incorrecta). Nunca propaga errores.
pub fn verificar_token(token: &str, secret: &str) -> Option<Claims> {
    decodificar_token(token, secret).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_de_prueba(secret: &str, expiracion: i64) -> String {
        generar_token(
            "42".to_string(),
            "ana@cine.com".to_string(),
            "Ana".to_string(),
            "García".to_string(),
            "CLIENTE".to_string(),
            secret,
            expiracion,
        )
        .expect("la generación del token no debe fallar")
    }

    #[test]
    fn genera_y_decodifica_token() {
        let secret = "secreto_de_prueba";
        let token = token_de_prueba(secret, 3600);

        let claims = decodificar_token(&token, secret).expect("token válido");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "ana@cine.com");
        assert_eq!(claims.tipo_usuario, "CLIENTE");
    }

    #[test]
    fn rechaza_token_malformado() {
        let result = decodificar_token("token_invalido", "secreto_de_prueba");
        assert!(result.is_err());
    }

    #[test]
    fn rechaza_firma_de_otro_secreto() {
        let token = token_de_prueba("secreto_a", 3600);
        assert!(decodificar_token(&token, "secreto_b").is_err());
    }

    #[test]
    fn verificar_token_devuelve_none_en_fallo() {
        assert!(verificar_token("basura", "secreto").is_none());

        // Token expirado hace una hora (fuera del leeway por defecto)
        let token = token_de_prueba("secreto", -3600);
        assert!(verificar_token(&token, "secreto").is_none());
    }

    #[test]
    fn verificar_token_devuelve_claims_validos() {
        let token = token_de_prueba("secreto", 3600);
        let claims = verificar_token(&token, "secreto").expect("claims presentes");
        assert_eq!(claims.nombre, "Ana");
    }
}
