//! Tests de inicio y cierre de sesión
//!
//! Cubre:
//! - Validación de LoginRequest
//! - Mensaje genérico único de credenciales inválidas
//! - Redirección por rol
//! - Atributos de la cookie de sesión `auth-token`

use cine_server::domain::auth::dto::LoginRequest;
use cine_server::domain::auth::service::MENSAJE_CREDENCIALES_INVALIDAS;
use cine_server::domain::usuario::entity::usuario::TipoUsuario;
use cine_server::utils::cookie::{
    crear_cookie_sesion, limpiar_cookie_sesion, AUTH_TOKEN_COOKIE, MAX_AGE_SESION_SEGUNDOS,
};
use validator::Validate;

// ============== Validación ==============

#[test]
fn acepta_credenciales_bien_formadas() {
    let req = LoginRequest {
        email: "ana@cine.com".to_string(),
        password: "secreta123".to_string(),
    };

    assert!(req.validate().is_ok());
}

#[test]
fn rechaza_email_invalido() {
    let req = LoginRequest {
        email: "sin-arroba".to_string(),
        password: "secreta123".to_string(),
    };

    let result = req.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("email"));
}

#[test]
fn rechaza_contrasena_vacia() {
    let req = LoginRequest {
        email: "ana@cine.com".to_string(),
        password: String::new(),
    };

    assert!(req.validate().is_err());
}

// ============== Mensaje genérico ==============

#[test]
fn el_mensaje_de_credenciales_no_distingue_casos() {
    // El mismo texto debe cubrir usuario inexistente, cuenta inactiva y
    // contraseña incorrecta; cualquier variación permitiría enumerar
    // cuentas registradas.
    assert_eq!(MENSAJE_CREDENCIALES_INVALIDAS, "Credenciales inválidas.");
    assert!(!MENSAJE_CREDENCIALES_INVALIDAS.contains("usuario"));
    assert!(!MENSAJE_CREDENCIALES_INVALIDAS.contains("contraseña"));
}

// ============== Redirección por rol ==============

#[test]
fn los_roles_de_personal_redirigen_al_panel() {
    assert_eq!(TipoUsuario::Empleado.destino_redireccion(), "/admin");
    assert_eq!(TipoUsuario::Administrador.destino_redireccion(), "/admin");
    assert_eq!(TipoUsuario::Gerente.destino_redireccion(), "/admin");
}

#[test]
fn los_clientes_redirigen_a_su_area() {
    assert_eq!(TipoUsuario::Cliente.destino_redireccion(), "/cliente");
    assert!(!TipoUsuario::Cliente.es_personal());
}

// ============== Cookie de sesión ==============

#[test]
fn la_cookie_de_sesion_lleva_los_atributos_requeridos() {
    // Act
    let cookie = crear_cookie_sesion("token_firmado").unwrap();
    let valor = cookie.to_str().unwrap();

    // Assert
    assert!(valor.starts_with(&format!("{}=token_firmado", AUTH_TOKEN_COOKIE)));
    assert!(valor.contains("HttpOnly"));
    assert!(valor.contains("SameSite=Strict"));
    assert!(valor.contains("Path=/"));
    assert!(valor.contains(&format!("Max-Age={}", MAX_AGE_SESION_SEGUNDOS)));
}

#[test]
fn la_sesion_dura_siete_dias() {
    assert_eq!(MAX_AGE_SESION_SEGUNDOS, 7 * 24 * 60 * 60);
}

#[test]
fn limpiar_la_cookie_la_expira_de_inmediato() {
    let cookie = limpiar_cookie_sesion().unwrap();
    let valor = cookie.to_str().unwrap();

    assert!(valor.starts_with(&format!("{}=;", AUTH_TOKEN_COOKIE)));
    assert!(valor.contains("Max-Age=0"));
}
