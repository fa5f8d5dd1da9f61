use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::dto::FuncionListadoItem;
use super::entity::funcion::{self, Entity as Funcion};
use crate::domain::pelicula::entity::pelicula::{self, Entity as Pelicula};
use crate::domain::reserva::entity::reserva::{self, Entity as Reserva, EstadoReserva};
use crate::domain::sala::dto::SalaResumen;
use crate::domain::sala::entity::sala::Entity as Sala;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct FuncionService;

impl FuncionService {
    /// Funciones futuras y activas de una película, con su sala y el
    /// número de reservas vivas, ordenadas por hora de inicio.
    pub async fn funciones_por_pelicula(
        state: &AppState,
        pelicula_id: i64,
    ) -> Result<Vec<FuncionListadoItem>, AppError> {
        let existe = Pelicula::find_by_id(pelicula_id)
            .filter(pelicula::Column::Activo.eq(true))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if existe.is_none() {
            return Err(AppError::NotFound("La película no existe.".to_string()));
        }

        let ahora = Utc::now().naive_utc();

        let funciones_con_sala = Funcion::find()
            .filter(funcion::Column::PeliculaId.eq(pelicula_id))
            .filter(funcion::Column::Activo.eq(true))
            .filter(funcion::Column::FechaHoraInicio.gt(ahora))
            .find_also_related(Sala)
            .order_by_asc(funcion::Column::FechaHoraInicio)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        // Reservas vivas por función, en una sola consulta
        let funcion_ids: Vec<i64> = funciones_con_sala
            .iter()
            .map(|(f, _)| f.funcion_id)
            .collect();

        let mut reservas_por_funcion: HashMap<i64, u64> = HashMap::new();
        if !funcion_ids.is_empty() {
            let reservas = Reserva::find()
                .filter(reserva::Column::FuncionId.is_in(funcion_ids))
                .filter(
                    reserva::Column::Estado
                        .is_not_in([EstadoReserva::Cancelada, EstadoReserva::Expirada]),
                )
                .all(&state.db)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

            for r in reservas {
                *reservas_por_funcion.entry(r.funcion_id).or_insert(0) += 1;
            }
        }

        let mut items = Vec::with_capacity(funciones_con_sala.len());
        for (f, sala) in funciones_con_sala {
            let Some(sala) = sala else { continue };
            items.push(FuncionListadoItem {
                funcion_id: f.funcion_id,
                fecha_hora_inicio: f.fecha_hora_inicio.and_utc().to_rfc3339(),
                fecha_hora_fin: f.fecha_hora_fin.and_utc().to_rfc3339(),
                precio_base: f.precio_base.to_f64().unwrap_or(0.0),
                precio_descuento: f.precio_descuento.and_then(|p| p.to_f64()),
                asientos_disponibles: f.asientos_disponibles,
                asientos_reservados: f.asientos_reservados,
                total_reservas: reservas_por_funcion
                    .get(&f.funcion_id)
                    .copied()
                    .unwrap_or(0),
                sala: SalaResumen::from(sala),
            });
        }

        Ok(items)
    }
}
