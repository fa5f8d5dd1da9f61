use std::collections::HashSet;

use chrono::{Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use super::dto::{
    AsientoAsignado, FuncionReservaInfo, PeliculaReservaInfo, ReservaCrearRequest,
    ReservaDetalleResponse,
};
use super::entity::reserva::{self, Entity as Reserva, EstadoReserva};
use super::entity::reserva_asiento::{self, Entity as ReservaAsiento};
use crate::domain::funcion::entity::funcion::{self, Entity as Funcion};
use crate::domain::pelicula::entity::pelicula::Entity as Pelicula;
use crate::domain::sala::dto::SalaResumen;
use crate::domain::sala::entity::asiento::{self, Entity as Asiento};
use crate::domain::sala::entity::sala::Entity as Sala;
use crate::state::AppState;
use crate::utils::error::AppError;

/// Plazo de pago de una reserva pendiente
pub const MINUTOS_VENCIMIENTO: i64 = 15;

/// Código legible de reserva, único por construcción (derivado de UUID v4)
pub fn generar_codigo_reserva() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("RES-{}", uuid[..12].to_uppercase())
}

/// Precio final: (precio con descuento si existe, si no el base, más el
/// extra de la sala) × cantidad de asientos.
pub fn calcular_precio_total(
    precio_base: Decimal,
    precio_descuento: Option<Decimal>,
    precio_extra_sala: Decimal,
    cantidad: i32,
) -> Decimal {
    let unitario = precio_descuento.unwrap_or(precio_base) + precio_extra_sala;
    unitario * Decimal::from(cantidad)
}

pub struct ReservaService;

impl ReservaService {
    /// Creación de reserva con verificación transaccional de asientos.
    ///
    /// El índice UNIQUE (funcion_id, asiento_id) de reserva_asiento
    /// respalda esta comprobación frente a dos peticiones simultáneas:
    /// la segunda inserción falla en la base de datos.
    pub async fn crear(
        state: &AppState,
        usuario_id: i64,
        req: ReservaCrearRequest,
    ) -> Result<ReservaDetalleResponse, AppError> {
        let unicos: HashSet<i64> = req.asiento_ids.iter().copied().collect();
        if unicos.len() != req.asiento_ids.len() {
            return Err(AppError::ValidationError(
                "Hay asientos repetidos en la selección.".to_string(),
            ));
        }

        let cantidad = req.asiento_ids.len() as i32;
        let ahora = Utc::now().naive_utc();

        let funcion_modelo = Funcion::find_by_id(req.funcion_id)
            .filter(funcion::Column::Activo.eq(true))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::NotFound("La función no existe o no está disponible.".to_string())
            })?;

        if funcion_modelo.fecha_hora_inicio <= ahora {
            return Err(AppError::BadRequest(
                "La función ya ha comenzado.".to_string(),
            ));
        }

        let sala = Sala::find_by_id(funcion_modelo.sala_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::InternalError(format!("Sala {} inexistente", funcion_modelo.sala_id))
            })?;

        // Todos los asientos deben pertenecer a la sala de la función
        let asientos = Asiento::find()
            .filter(asiento::Column::AsientoId.is_in(req.asiento_ids.clone()))
            .filter(asiento::Column::SalaId.eq(funcion_modelo.sala_id))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if asientos.len() != req.asiento_ids.len() {
            return Err(AppError::ValidationError(
                "Uno o más asientos no pertenecen a la sala de la función.".to_string(),
            ));
        }

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        // Comprobación de doble reserva dentro de la transacción
        let ocupados = ReservaAsiento::find()
            .filter(reserva_asiento::Column::FuncionId.eq(req.funcion_id))
            .filter(reserva_asiento::Column::AsientoId.is_in(req.asiento_ids.clone()))
            .count(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if ocupados > 0 {
            return Err(AppError::Conflict(
                "Uno o más asientos ya están reservados para esta función.".to_string(),
            ));
        }

        if funcion_modelo.asientos_disponibles < cantidad {
            return Err(AppError::Conflict(
                "No quedan suficientes asientos disponibles.".to_string(),
            ));
        }

        let precio_total = calcular_precio_total(
            funcion_modelo.precio_base,
            funcion_modelo.precio_descuento,
            sala.precio_extra,
            cantidad,
        );

        let nueva = reserva::ActiveModel {
            usuario_id: Set(Some(usuario_id)),
            funcion_id: Set(req.funcion_id),
            codigo_reserva: Set(generar_codigo_reserva()),
            cantidad_asientos: Set(cantidad),
            precio_total: Set(precio_total),
            estado: Set(EstadoReserva::Pendiente),
            fecha_reserva: Set(ahora),
            fecha_vencimiento: Set(ahora + Duration::minutes(MINUTOS_VENCIMIENTO)),
            updated_at: Set(ahora),
            ..Default::default()
        };

        let creada = nueva
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("No se pudo crear la reserva: {}", e)))?;

        for asiento_id in &req.asiento_ids {
            let vinculo = reserva_asiento::ActiveModel {
                reserva_id: Set(creada.reserva_id),
                funcion_id: Set(req.funcion_id),
                asiento_id: Set(*asiento_id),
                ..Default::default()
            };

            // Si otra transacción ganó la carrera, el índice UNIQUE
            // rechaza la inserción aquí
            vinculo.insert(&txn).await.map_err(|_| {
                AppError::Conflict(
                    "Uno o más asientos ya están reservados para esta función.".to_string(),
                )
            })?;
        }

        // Contador desnormalizado de la función, en la misma transacción
        let mut funcion_activa: funcion::ActiveModel = funcion_modelo.clone().into();
        funcion_activa.asientos_disponibles = Set(funcion_modelo.asientos_disponibles - cantidad);
        funcion_activa.asientos_reservados = Set(funcion_modelo.asientos_reservados + cantidad);
        funcion_activa.updated_at = Set(ahora);
        funcion_activa
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            reserva_id = creada.reserva_id,
            funcion_id = req.funcion_id,
            cantidad = cantidad,
            "reserva creada"
        );

        Self::detalle(state, creada.reserva_id).await
    }

    /// Detalle de reserva con función, película, sala y asientos
    pub async fn detalle(
        state: &AppState,
        reserva_id: i64,
    ) -> Result<ReservaDetalleResponse, AppError> {
        let reserva = Reserva::find_by_id(reserva_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::NotFound("La reserva no existe.".to_string()))?;

        let funcion = Funcion::find_by_id(reserva.funcion_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::InternalError(format!("Función {} inexistente", reserva.funcion_id))
            })?;

        let pelicula = Pelicula::find_by_id(funcion.pelicula_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::InternalError(format!("Película {} inexistente", funcion.pelicula_id))
            })?;

        let sala = Sala::find_by_id(funcion.sala_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::InternalError(format!("Sala {} inexistente", funcion.sala_id))
            })?;

        let vinculos = ReservaAsiento::find()
            .filter(reserva_asiento::Column::ReservaId.eq(reserva.reserva_id))
            .find_also_related(Asiento)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let asientos = vinculos
            .into_iter()
            .filter_map(|(_, asiento)| asiento)
            .map(|a| AsientoAsignado {
                asiento_id: a.asiento_id,
                fila: a.fila,
                numero: a.numero,
            })
            .collect();

        Ok(ReservaDetalleResponse {
            reserva_id: reserva.reserva_id,
            codigo_reserva: reserva.codigo_reserva,
            estado: reserva.estado,
            cantidad_asientos: reserva.cantidad_asientos,
            precio_total: reserva.precio_total.to_f64().unwrap_or(0.0),
            fecha_reserva: reserva.fecha_reserva.and_utc().to_rfc3339(),
            fecha_vencimiento: reserva.fecha_vencimiento.and_utc().to_rfc3339(),
            usuario_id: reserva.usuario_id,
            funcion: FuncionReservaInfo {
                funcion_id: funcion.funcion_id,
                fecha_hora_inicio: funcion.fecha_hora_inicio.and_utc().to_rfc3339(),
                fecha_hora_fin: funcion.fecha_hora_fin.and_utc().to_rfc3339(),
                pelicula: PeliculaReservaInfo {
                    pelicula_id: pelicula.pelicula_id,
                    titulo: pelicula.titulo,
                    clasificacion: pelicula.clasificacion.etiqueta().to_string(),
                    duracion_minutos: pelicula.duracion_minutos,
                },
                sala: SalaResumen::from(sala),
            },
            asientos,
        })
    }

    /// Cancelación por el dueño de la reserva. Libera los asientos y
    /// devuelve el cupo al contador de la función, todo en una
    /// transacción.
    pub async fn cancelar(
        state: &AppState,
        usuario_id: i64,
        reserva_id: i64,
    ) -> Result<(), AppError> {
        let reserva = Reserva::find_by_id(reserva_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::NotFound("La reserva no existe.".to_string()))?;

        if reserva.usuario_id != Some(usuario_id) {
            return Err(AppError::Forbidden(
                "La reserva no pertenece a tu cuenta.".to_string(),
            ));
        }

        if !reserva.estado.puede_transicionar_a(EstadoReserva::Cancelada) {
            return Err(AppError::Conflict(
                "La reserva no puede cancelarse en su estado actual.".to_string(),
            ));
        }

        let ahora = Utc::now().naive_utc();

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        // Liberar los asientos: el índice UNIQUE vuelve a dejarlos reservables
        ReservaAsiento::delete_many()
            .filter(reserva_asiento::Column::ReservaId.eq(reserva.reserva_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let funcion_modelo = Funcion::find_by_id(reserva.funcion_id)
            .one(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::InternalError(format!("Función {} inexistente", reserva.funcion_id))
            })?;

        let mut funcion_activa: funcion::ActiveModel = funcion_modelo.clone().into();
        funcion_activa.asientos_disponibles =
            Set(funcion_modelo.asientos_disponibles + reserva.cantidad_asientos);
        funcion_activa.asientos_reservados =
            Set((funcion_modelo.asientos_reservados - reserva.cantidad_asientos).max(0));
        funcion_activa.updated_at = Set(ahora);
        funcion_activa
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let reserva_id_log = reserva.reserva_id;
        let mut reserva_activa: reserva::ActiveModel = reserva.into();
        reserva_activa.estado = Set(EstadoReserva::Cancelada);
        reserva_activa.updated_at = Set(ahora);
        reserva_activa
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(reserva_id = reserva_id_log, "reserva cancelada");

        Ok(())
    }
}
