use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::dto::{
    ConteoPeliculas, DashboardStatsResponse, FiltrosReporte, ReporteSummaryResponse,
    ReservasDelDia,
};
use crate::domain::funcion::entity::funcion::{self, Entity as Funcion};
use crate::domain::pelicula::entity::pelicula::{self, Entity as Pelicula};
use crate::domain::reserva::entity::reserva::{self, Entity as Reserva, EstadoReserva};
use crate::domain::sala::entity::sala::{self, Entity as Sala};
use crate::domain::usuario::entity::usuario::{self, Entity as Usuario};
use crate::state::AppState;
use crate::utils::error::AppError;

/// Porcentaje de ocupación con dos decimales. Capacidad cero (o
/// negativa) da 0, nunca una división inválida.
pub fn porcentaje_ocupacion(asientos_reservados: i64, capacidad_total: i64) -> f64 {
    if capacidad_total <= 0 {
        return 0.0;
    }
    let porcentaje = asientos_reservados as f64 / capacidad_total as f64 * 100.0;
    (porcentaje * 100.0).round() / 100.0
}

/// Intervalo [00:00 del día, 00:00 del siguiente)
fn rango_dia(dia: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let inicio = dia.and_time(NaiveTime::MIN);
    let fin = dia.succ_opt().unwrap_or(dia).and_time(NaiveTime::MIN);
    (inicio, fin)
}

pub struct AdminService;

impl AdminService {
    /// Estadísticas del dashboard para el día en curso
    pub async fn estadisticas_dashboard(
        state: &AppState,
    ) -> Result<DashboardStatsResponse, AppError> {
        let hoy = Utc::now().date_naive();
        let (inicio, fin) = rango_dia(hoy);

        let total_peliculas = Pelicula::find()
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let peliculas_activas = Pelicula::find()
            .filter(pelicula::Column::Activo.eq(true))
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let usuarios_activos = Usuario::find()
            .filter(usuario::Column::Activo.eq(true))
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let salas_activas = Sala::find()
            .filter(sala::Column::Activo.eq(true))
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let funciones_del_dia = Self::funciones_activas_del_dia(state, inicio, fin).await?;

        // Reservas registradas hoy, agregadas en memoria
        let reservas = Reserva::find()
            .filter(reserva::Column::FechaReserva.gte(inicio))
            .filter(reserva::Column::FechaReserva.lt(fin))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let mut por_estado: BTreeMap<String, u64> = BTreeMap::new();
        let mut asientos_pagados: i64 = 0;
        let mut ingresos = Decimal::ZERO;
        for r in &reservas {
            *por_estado.entry(r.estado.to_value()).or_insert(0) += 1;
            if r.estado == EstadoReserva::Pagada {
                asientos_pagados += i64::from(r.cantidad_asientos);
                ingresos += r.precio_total;
            }
        }

        let ocupacion_hoy = Self::ocupacion_de_funciones(state, &funciones_del_dia).await?;

        Ok(DashboardStatsResponse {
            peliculas: ConteoPeliculas {
                total: total_peliculas,
                activas: peliculas_activas,
            },
            usuarios_activos,
            salas_activas,
            funciones_hoy: funciones_del_dia.len() as u64,
            reservas_hoy: ReservasDelDia {
                total: reservas.len() as u64,
                asientos_pagados,
                ingresos: ingresos.to_f64().unwrap_or(0.0),
                por_estado,
            },
            ocupacion_hoy,
        })
    }

    /// Resumen diario de ventas y ocupación. Usa la misma definición de
    /// ocupación que el dashboard.
    pub async fn resumen_reportes(
        state: &AppState,
        filtros: FiltrosReporte,
    ) -> Result<ReporteSummaryResponse, AppError> {
        let dia = match filtros.fecha.as_deref() {
            Some(valor) => NaiveDate::parse_from_str(valor, "%Y-%m-%d").map_err(|_| {
                AppError::ValidationError("La fecha no es válida. (formato YYYY-MM-DD)".to_string())
            })?,
            None => Utc::now().date_naive(),
        };
        let (inicio, fin) = rango_dia(dia);

        let funciones_del_dia = Self::funciones_activas_del_dia(state, inicio, fin).await?;

        let reservas = Reserva::find()
            .filter(reserva::Column::FechaReserva.gte(inicio))
            .filter(reserva::Column::FechaReserva.lt(fin))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let mut por_estado: BTreeMap<String, u64> = BTreeMap::new();
        let mut entradas_vendidas: i64 = 0;
        let mut ingresos = Decimal::ZERO;
        for r in &reservas {
            *por_estado.entry(r.estado.to_value()).or_insert(0) += 1;
            if r.estado == EstadoReserva::Pagada {
                entradas_vendidas += i64::from(r.cantidad_asientos);
                ingresos += r.precio_total;
            }
        }

        let ocupacion = Self::ocupacion_de_funciones(state, &funciones_del_dia).await?;

        Ok(ReporteSummaryResponse {
            fecha: dia.format("%Y-%m-%d").to_string(),
            funciones: funciones_del_dia.len() as u64,
            entradas_vendidas,
            ingresos: ingresos.to_f64().unwrap_or(0.0),
            ocupacion,
            por_estado,
        })
    }

    async fn funciones_activas_del_dia(
        state: &AppState,
        inicio: NaiveDateTime,
        fin: NaiveDateTime,
    ) -> Result<Vec<funcion::Model>, AppError> {
        Funcion::find()
            .filter(funcion::Column::Activo.eq(true))
            .filter(funcion::Column::FechaHoraInicio.gte(inicio))
            .filter(funcion::Column::FechaHoraInicio.lt(fin))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))
    }

    /// Definición única de ocupación: asientos retenidos por reservas
    /// vivas sobre las funciones dadas ÷ capacidad de sus salas.
    async fn ocupacion_de_funciones(
        state: &AppState,
        funciones: &[funcion::Model],
    ) -> Result<f64, AppError> {
        if funciones.is_empty() {
            return Ok(0.0);
        }

        let sala_ids: HashSet<i64> = funciones.iter().map(|f| f.sala_id).collect();
        let salas = Sala::find()
            .filter(sala::Column::SalaId.is_in(sala_ids))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let capacidad_por_sala: std::collections::HashMap<i64, i64> = salas
            .into_iter()
            .map(|s| (s.sala_id, i64::from(s.capacidad_total)))
            .collect();

        // La misma sala cuenta una vez por función programada
        let capacidad_total: i64 = funciones
            .iter()
            .filter_map(|f| capacidad_por_sala.get(&f.sala_id))
            .sum();

        let funcion_ids: Vec<i64> = funciones.iter().map(|f| f.funcion_id).collect();
        let reservas = Reserva::find()
            .filter(reserva::Column::FuncionId.is_in(funcion_ids))
            .filter(
                reserva::Column::Estado
                    .is_not_in([EstadoReserva::Cancelada, EstadoReserva::Expirada]),
            )
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let asientos_reservados: i64 = reservas
            .iter()
            .map(|r| i64::from(r.cantidad_asientos))
            .sum();

        Ok(porcentaje_ocupacion(asientos_reservados, capacidad_total))
    }
}
