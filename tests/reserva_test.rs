//! Tests del ciclo de vida de reservas
//!
//! Cubre:
//! - Máquina de estados de EstadoReserva
//! - Generación del código de reserva
//! - Cálculo del precio total
//! - Validación de ReservaCrearRequest

use cine_server::domain::reserva::dto::ReservaCrearRequest;
use cine_server::domain::reserva::entity::reserva::EstadoReserva;
use cine_server::domain::reserva::service::{
    calcular_precio_total, generar_codigo_reserva, MINUTOS_VENCIMIENTO,
};
use rust_decimal::Decimal;
use validator::Validate;

// ============== Máquina de estados ==============

#[test]
fn el_flujo_feliz_avanza_en_orden() {
    use EstadoReserva::*;

    assert!(Pendiente.puede_transicionar_a(Confirmada));
    assert!(Confirmada.puede_transicionar_a(Pagada));
    assert!(Pagada.puede_transicionar_a(Utilizada));
}

#[test]
fn una_reserva_sin_pagar_puede_cancelarse_o_expirar() {
    use EstadoReserva::*;

    assert!(Pendiente.puede_transicionar_a(Cancelada));
    assert!(Pendiente.puede_transicionar_a(Expirada));
    assert!(Confirmada.puede_transicionar_a(Cancelada));
    assert!(Confirmada.puede_transicionar_a(Expirada));
}

#[test]
fn una_reserva_pagada_o_utilizada_no_se_cancela() {
    use EstadoReserva::*;

    assert!(!Pagada.puede_transicionar_a(Cancelada));
    assert!(!Pagada.puede_transicionar_a(Expirada));
    assert!(!Utilizada.puede_transicionar_a(Cancelada));
}

#[test]
fn los_estados_terminales_no_avanzan() {
    use EstadoReserva::*;

    for origen in [Cancelada, Expirada, Utilizada] {
        for destino in [Pendiente, Confirmada, Pagada, Utilizada, Cancelada, Expirada] {
            assert!(
                !origen.puede_transicionar_a(destino),
                "{:?} → {:?} no debería permitirse",
                origen,
                destino
            );
        }
    }
}

#[test]
fn no_se_salta_ningun_paso_del_flujo() {
    use EstadoReserva::*;

    assert!(!Pendiente.puede_transicionar_a(Pagada));
    assert!(!Pendiente.puede_transicionar_a(Utilizada));
    assert!(!Confirmada.puede_transicionar_a(Utilizada));
}

#[test]
fn solo_canceladas_y_expiradas_liberan_asientos() {
    use EstadoReserva::*;

    assert!(Pendiente.es_activa());
    assert!(Confirmada.es_activa());
    assert!(Pagada.es_activa());
    assert!(Utilizada.es_activa());
    assert!(!Cancelada.es_activa());
    assert!(!Expirada.es_activa());
}

// ============== Código de reserva ==============

#[test]
fn el_codigo_tiene_prefijo_y_longitud_fijos() {
    let codigo = generar_codigo_reserva();

    assert!(codigo.starts_with("RES-"));
    assert_eq!(codigo.len(), 16);
    assert!(codigo[4..].chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(codigo, codigo.to_uppercase());
}

#[test]
fn dos_codigos_consecutivos_no_coinciden() {
    assert_ne!(generar_codigo_reserva(), generar_codigo_reserva());
}

// ============== Precio total ==============

#[test]
fn multiplica_el_precio_base_por_la_cantidad() {
    let total = calcular_precio_total(Decimal::new(1000, 2), None, Decimal::ZERO, 3);

    assert_eq!(total, Decimal::new(3000, 2)); // 10.00 × 3
}

#[test]
fn el_descuento_sustituye_al_precio_base() {
    let total = calcular_precio_total(
        Decimal::new(1000, 2),
        Some(Decimal::new(750, 2)),
        Decimal::ZERO,
        2,
    );

    assert_eq!(total, Decimal::new(1500, 2)); // 7.50 × 2
}

#[test]
fn el_extra_de_sala_se_suma_por_asiento() {
    let total = calcular_precio_total(
        Decimal::new(1000, 2),
        None,
        Decimal::new(250, 2), // +2.50 por asiento
        2,
    );

    assert_eq!(total, Decimal::new(2500, 2)); // (10.00 + 2.50) × 2
}

// ============== Validación y constantes ==============

#[test]
fn rechaza_una_seleccion_de_asientos_vacia() {
    let req = ReservaCrearRequest {
        funcion_id: 1,
        asiento_ids: vec![],
    };

    assert!(req.validate().is_err());
}

#[test]
fn acepta_una_seleccion_con_asientos() {
    let req = ReservaCrearRequest {
        funcion_id: 1,
        asiento_ids: vec![10, 11, 12],
    };

    assert!(req.validate().is_ok());
}

#[test]
fn el_plazo_de_pago_es_de_15_minutos() {
    assert_eq!(MINUTOS_VENCIMIENTO, 15);
}
