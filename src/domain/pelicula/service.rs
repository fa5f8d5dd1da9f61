use std::collections::HashMap;

use chrono::{Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::dto::{
    FiltrosAplicados, FiltrosPeliculas, FuncionResumen, ListadoPeliculasResponse, OrdenPeliculas,
    PeliculaDetalleResponse, PeliculaListadoItem, PeliculaSimpleItem, LIMITE_BUSQUEDA_SIMPLE,
};
use super::entity::pelicula::{self, Clasificacion, Entity as Pelicula};
use super::entity::pelicula_genero::{self, Entity as PeliculaGenero};
use crate::domain::catalogo::entity::genero::{self, Entity as Genero};
use crate::domain::funcion::entity::funcion::{self, Entity as Funcion};
use crate::domain::sala::dto::SalaResumen;
use crate::domain::sala::entity::sala::Entity as Sala;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::Paginacion;

/// Ventana de gracia del detalle: las funciones que empezaron hace menos
/// de 30 minutos se siguen mostrando.
pub const VENTANA_GRACIA_MINUTOS: i64 = 30;

pub struct PeliculaService;

impl PeliculaService {
    /// Listado público: solo películas activas, con búsqueda libre,
    /// filtro por clasificación, ordenación y paginación.
    pub async fn listar_publicas(
        state: &AppState,
        filtros: FiltrosPeliculas,
    ) -> Result<ListadoPeliculasResponse, AppError> {
        let pagina = filtros.pagina();
        let limite = filtros.limite();
        let orden = OrdenPeliculas::parsear(filtros.ordenar_por.as_deref());

        // Mapeo etiqueta de UI → enum; una etiqueta desconocida es un 400
        let clasificacion = match filtros.clasificacion.as_deref() {
            Some(etiqueta) if !etiqueta.is_empty() => Some(
                Clasificacion::from_etiqueta(etiqueta).ok_or_else(|| {
                    AppError::ValidationError("Clasificación desconocida.".to_string())
                })?,
            ),
            _ => None,
        };

        let mut query = Pelicula::find().filter(pelicula::Column::Activo.eq(true));

        if let Some(texto) = filtros.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(pelicula::Column::Titulo.contains(texto))
                    .add(pelicula::Column::Director.contains(texto))
                    .add(pelicula::Column::Reparto.contains(texto)),
            );
        }

        if let Some(c) = clasificacion {
            query = query.filter(pelicula::Column::Clasificacion.eq(c));
        }

        query = match orden {
            OrdenPeliculas::Titulo => query.order_by_asc(pelicula::Column::Titulo),
            OrdenPeliculas::Puntuacion => query.order_by_desc(pelicula::Column::PuntuacionImdb),
            OrdenPeliculas::FechaEstreno => {
                query.order_by_desc(pelicula::Column::FechaEstrenoLocal)
            }
        };

        let paginador = query.paginate(&state.db, limite);
        let total = paginador
            .num_items()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
        let modelos = paginador
            .fetch_page(pagina - 1)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let mut generos_por_pelicula =
            Self::generos_por_pelicula(state, modelos.iter().map(|m| m.pelicula_id).collect())
                .await?;

        let peliculas = modelos
            .into_iter()
            .map(|m| PeliculaListadoItem {
                generos: generos_por_pelicula
                    .remove(&m.pelicula_id)
                    .map(|nombres| nombres.join(", "))
                    .unwrap_or_default(),
                pelicula_id: m.pelicula_id,
                titulo: m.titulo,
                poster_url: m.poster_url,
                clasificacion: m.clasificacion.etiqueta().to_string(),
                duracion_minutos: m.duracion_minutos,
                puntuacion_imdb: m.puntuacion_imdb,
                fecha_estreno_local: m.fecha_estreno_local.format("%Y-%m-%d").to_string(),
            })
            .collect();

        Ok(ListadoPeliculasResponse {
            peliculas,
            pagination: Paginacion::nueva(total, pagina, limite),
            filtros: FiltrosAplicados {
                search: filtros.search,
                clasificacion: filtros.clasificacion,
                ordenar_por: orden.nombre().to_string(),
            },
        })
    }

    /// Detalle público con funciones próximas (ventana de gracia incluida)
    pub async fn detalle(
        state: &AppState,
        pelicula_id: i64,
    ) -> Result<PeliculaDetalleResponse, AppError> {
        let modelo = Pelicula::find_by_id(pelicula_id)
            .filter(pelicula::Column::Activo.eq(true))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::NotFound("La película no existe.".to_string()))?;

        let desde = Utc::now().naive_utc() - Duration::minutes(VENTANA_GRACIA_MINUTOS);

        let funciones_con_sala = Funcion::find()
            .filter(funcion::Column::PeliculaId.eq(pelicula_id))
            .filter(funcion::Column::Activo.eq(true))
            .filter(funcion::Column::FechaHoraInicio.gte(desde))
            .find_also_related(Sala)
            .order_by_asc(funcion::Column::FechaHoraInicio)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let mut funciones = Vec::with_capacity(funciones_con_sala.len());
        for (f, sala) in funciones_con_sala {
            let Some(sala) = sala else { continue };
            funciones.push(FuncionResumen {
                funcion_id: f.funcion_id,
                fecha_hora_inicio: f.fecha_hora_inicio.and_utc().to_rfc3339(),
                fecha_hora_fin: f.fecha_hora_fin.and_utc().to_rfc3339(),
                precio_base: f.precio_base.to_f64().unwrap_or(0.0),
                precio_descuento: f.precio_descuento.and_then(|p| p.to_f64()),
                asientos_disponibles: f.asientos_disponibles,
                sala: SalaResumen::from(sala),
            });
        }

        let generos = Self::generos_por_pelicula(state, vec![pelicula_id])
            .await?
            .remove(&pelicula_id)
            .unwrap_or_default();

        Ok(PeliculaDetalleResponse {
            pelicula_id: modelo.pelicula_id,
            titulo: modelo.titulo,
            sinopsis: modelo.sinopsis,
            poster_url: modelo.poster_url,
            trailer_url: modelo.trailer_url,
            duracion_minutos: modelo.duracion_minutos,
            clasificacion: modelo.clasificacion.etiqueta().to_string(),
            director: modelo.director,
            reparto: modelo.reparto,
            puntuacion_imdb: modelo.puntuacion_imdb,
            fecha_estreno_mundial: modelo.fecha_estreno_mundial.format("%Y-%m-%d").to_string(),
            fecha_estreno_local: modelo.fecha_estreno_local.format("%Y-%m-%d").to_string(),
            generos,
            funciones,
        })
    }

    /// Búsqueda administrativa: título, director o género, hasta 50
    /// resultados, las más recientes primero. Incluye inactivas.
    pub async fn buscar_simple(
        state: &AppState,
        search: Option<String>,
    ) -> Result<Vec<PeliculaSimpleItem>, AppError> {
        let mut query = Pelicula::find();

        if let Some(texto) = search.as_deref().filter(|t| !t.is_empty()) {
            let mut condicion = Condition::any()
                .add(pelicula::Column::Titulo.contains(texto))
                .add(pelicula::Column::Director.contains(texto));

            // Coincidencia por nombre de género
            let generos = Genero::find()
                .filter(genero::Column::Nombre.contains(texto))
                .all(&state.db)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

            if !generos.is_empty() {
                let genero_ids: Vec<i64> = generos.into_iter().map(|g| g.genero_id).collect();
                let enlaces = PeliculaGenero::find()
                    .filter(pelicula_genero::Column::GeneroId.is_in(genero_ids))
                    .all(&state.db)
                    .await
                    .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

                let pelicula_ids: Vec<i64> =
                    enlaces.into_iter().map(|e| e.pelicula_id).collect();
                if !pelicula_ids.is_empty() {
                    condicion = condicion.add(pelicula::Column::PeliculaId.is_in(pelicula_ids));
                }
            }

            query = query.filter(condicion);
        }

        let modelos = query
            .order_by_desc(pelicula::Column::CreatedAt)
            .limit(LIMITE_BUSQUEDA_SIMPLE)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(modelos
            .into_iter()
            .map(|m| PeliculaSimpleItem {
                pelicula_id: m.pelicula_id,
                titulo: m.titulo,
                director: m.director,
                clasificacion: m.clasificacion.etiqueta().to_string(),
                activo: m.activo,
            })
            .collect())
    }

    /// Nombres de género por película, en una sola consulta
    async fn generos_por_pelicula(
        state: &AppState,
        pelicula_ids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<String>>, AppError> {
        let mut mapa: HashMap<i64, Vec<String>> = HashMap::new();

        if pelicula_ids.is_empty() {
            return Ok(mapa);
        }

        let enlaces = PeliculaGenero::find()
            .filter(pelicula_genero::Column::PeliculaId.is_in(pelicula_ids))
            .find_also_related(Genero)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        for (enlace, genero) in enlaces {
            if let Some(g) = genero {
                mapa.entry(enlace.pelicula_id).or_default().push(g.nombre);
            }
        }

        Ok(mapa)
    }
}
