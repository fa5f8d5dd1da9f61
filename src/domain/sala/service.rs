use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::dto::{FiltrosSalas, ListadoSalasResponse, SalaCrearRequest, SalaResponse};
use super::entity::asiento;
use super::entity::sala::{self, Entity as Sala};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::Paginacion;

pub struct SalaService;

impl SalaService {
    /// Listado administrativo con búsqueda, filtro por estado y paginación
    pub async fn listar(
        state: &AppState,
        filtros: FiltrosSalas,
    ) -> Result<ListadoSalasResponse, AppError> {
        let pagina = filtros.pagina();
        let limite = filtros.limite();

        let mut query = Sala::find();

        if let Some(texto) = filtros.search.as_deref().filter(|t| !t.is_empty()) {
            let mut condicion = Condition::any().add(sala::Column::Nombre.contains(texto));
            // Un término numérico también busca por número de sala
            if let Ok(numero) = texto.parse::<i32>() {
                condicion = condicion.add(sala::Column::Numero.eq(numero));
            }
            query = query.filter(condicion);
        }

        if let Some(activa) = filtros.activa {
            query = query.filter(sala::Column::Activo.eq(activa));
        }

        let paginador = query
            .order_by_asc(sala::Column::Numero)
            .paginate(&state.db, limite);
        let total = paginador
            .num_items()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
        let modelos = paginador
            .fetch_page(pagina - 1)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(ListadoSalasResponse {
            salas: modelos.into_iter().map(SalaResponse::from).collect(),
            pagination: Paginacion::nueva(total, pagina, limite),
        })
    }

    /// Alta de sala. Materializa sus asientos en la misma transacción.
    pub async fn crear(state: &AppState, req: SalaCrearRequest) -> Result<SalaResponse, AppError> {
        // Invariante: capacidad_total = filas × asientos_por_fila
        if !req.capacidad_consistente() {
            return Err(AppError::ValidationError(
                "La capacidad total debe ser igual a filas × asientos por fila.".to_string(),
            ));
        }

        let duplicada = Sala::find()
            .filter(sala::Column::Numero.eq(req.numero))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if duplicada.is_some() {
            return Err(AppError::Conflict(
                "Ya existe una sala con ese número.".to_string(),
            ));
        }

        let precio_extra = match req.precio_extra {
            Some(valor) => Decimal::try_from(valor).map_err(|_| {
                AppError::ValidationError("El precio extra no es válido.".to_string())
            })?,
            None => Decimal::ZERO,
        };

        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let ahora = Utc::now().naive_utc();

        let nueva = sala::ActiveModel {
            numero: Set(req.numero),
            nombre: Set(req.nombre),
            tipo_sala: Set(req.tipo_sala),
            capacidad_total: Set(req.capacidad_total),
            filas: Set(req.filas),
            asientos_por_fila: Set(req.asientos_por_fila),
            precio_extra: Set(precio_extra),
            equipamiento: Set(req.equipamiento),
            activo: Set(true),
            created_at: Set(ahora),
            updated_at: Set(ahora),
            ..Default::default()
        };

        let creada = nueva
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("No se pudo crear la sala: {}", e)))?;

        // Asientos estáticos de la sala
        for fila in 1..=creada.filas {
            for numero in 1..=creada.asientos_por_fila {
                let asiento = asiento::ActiveModel {
                    sala_id: Set(creada.sala_id),
                    fila: Set(fila),
                    numero: Set(numero),
                    ..Default::default()
                };

                asiento
                    .insert(&txn)
                    .await
                    .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            sala_id = creada.sala_id,
            numero = creada.numero,
            capacidad = creada.capacidad_total,
            "sala creada"
        );

        Ok(SalaResponse::from(creada))
    }
}
