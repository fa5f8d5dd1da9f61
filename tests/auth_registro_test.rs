//! Tests de registro de usuarios
//!
//! Cubre:
//! - Validación de RegistroRequest
//! - Cálculo de edad con corrección de calendario (mínimo 13 años)
//! - Serialización de UsuarioResponse (sin hash de contraseña)

use chrono::NaiveDate;
use cine_server::domain::auth::dto::{RegistroRequest, UsuarioResponse};
use cine_server::domain::auth::service::{edad_cumplida, EDAD_MINIMA};
use cine_server::domain::usuario::entity::usuario::TipoUsuario;
use validator::Validate;

fn solicitud_valida() -> RegistroRequest {
    RegistroRequest {
        email: "ana@cine.com".to_string(),
        password: "secreta123".to_string(),
        nombre: "Ana".to_string(),
        apellido: "García".to_string(),
        telefono: "555-1234".to_string(),
        fecha_nacimiento: "1990-05-20".to_string(),
    }
}

// ============== Validación ==============

#[test]
fn acepta_solicitud_completa() {
    let req = solicitud_valida();

    assert!(req.validate().is_ok());
}

#[test]
fn rechaza_email_mal_formado() {
    // Arrange
    let mut req = solicitud_valida();
    req.email = "no-es-un-email".to_string();

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("email"));
}

#[test]
fn rechaza_contrasena_de_menos_de_6_caracteres() {
    let mut req = solicitud_valida();
    req.password = "corta".to_string();

    let result = req.validate();

    assert!(result.is_err());
    assert!(result.unwrap_err().field_errors().contains_key("password"));
}

#[test]
fn acepta_contrasena_de_exactamente_6_caracteres() {
    let mut req = solicitud_valida();
    req.password = "seis66".to_string();

    assert!(req.validate().is_ok());
}

#[test]
fn rechaza_campos_obligatorios_vacios() {
    for campo in ["nombre", "apellido", "telefono", "fecha_nacimiento"] {
        let mut req = solicitud_valida();
        match campo {
            "nombre" => req.nombre = String::new(),
            "apellido" => req.apellido = String::new(),
            "telefono" => req.telefono = String::new(),
            _ => req.fecha_nacimiento = String::new(),
        }

        let result = req.validate();
        assert!(result.is_err(), "el campo {} vacío debe fallar", campo);
    }
}

// ============== Edad mínima ==============

#[test]
fn cumplir_13_exactamente_hoy_es_aceptado() {
    // Nació hace exactamente 13 años
    let hoy = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let nacimiento = NaiveDate::from_ymd_opt(2013, 8, 6).unwrap();

    assert_eq!(edad_cumplida(nacimiento, hoy), 13);
    assert!(edad_cumplida(nacimiento, hoy) >= EDAD_MINIMA);
}

#[test]
fn faltar_un_dia_para_los_13_es_rechazado() {
    // Cumple 13 mañana
    let hoy = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let nacimiento = NaiveDate::from_ymd_opt(2013, 8, 7).unwrap();

    assert_eq!(edad_cumplida(nacimiento, hoy), 12);
    assert!(edad_cumplida(nacimiento, hoy) < EDAD_MINIMA);
}

#[test]
fn la_edad_compara_mes_y_dia_no_dias_transcurridos() {
    let nacimiento = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();

    // El 30 de diciembre todavía tiene 25
    let vispera = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
    assert_eq!(edad_cumplida(nacimiento, vispera), 25);

    // El 31 ya tiene 26
    let cumple = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    assert_eq!(edad_cumplida(nacimiento, cumple), 26);
}

#[test]
fn nacido_en_29_de_febrero_cumple_el_1_de_marzo() {
    let nacimiento = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();

    let antes = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
    assert_eq!(edad_cumplida(nacimiento, antes), 12);

    let despues = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assert_eq!(edad_cumplida(nacimiento, despues), 13);
}

// ============== Serialización ==============

#[test]
fn la_respuesta_de_usuario_nunca_expone_el_hash() {
    // Arrange
    let respuesta = UsuarioResponse {
        usuario_id: 1,
        email: "ana@cine.com".to_string(),
        nombre: "Ana".to_string(),
        apellido: "García".to_string(),
        telefono: "555-1234".to_string(),
        fecha_nacimiento: "1990-05-20".to_string(),
        tipo_usuario: TipoUsuario::Cliente,
        activo: true,
    };

    // Act
    let json = serde_json::to_string(&respuesta).unwrap();

    // Assert
    assert!(!json.contains("password"));
    assert!(!json.contains("hash"));
}

#[test]
fn la_respuesta_de_usuario_serializa_en_camel_case() {
    let respuesta = UsuarioResponse {
        usuario_id: 7,
        email: "ana@cine.com".to_string(),
        nombre: "Ana".to_string(),
        apellido: "García".to_string(),
        telefono: "555-1234".to_string(),
        fecha_nacimiento: "1990-05-20".to_string(),
        tipo_usuario: TipoUsuario::Cliente,
        activo: true,
    };

    let json = serde_json::to_string(&respuesta).unwrap();

    assert!(json.contains("usuarioId"));
    assert!(json.contains("fechaNacimiento"));
    assert!(json.contains("tipoUsuario"));
    assert!(!json.contains("usuario_id"));
}
