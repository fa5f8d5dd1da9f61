use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::sala::dto::SalaResumen;
use crate::utils::response::Paginacion;

/// Límite máximo de resultados por página en el listado público
pub const LIMITE_MAX_PELICULAS: u64 = 50;

/// Límite de resultados de la búsqueda administrativa simple
pub const LIMITE_BUSQUEDA_SIMPLE: u64 = 50;

/// Criterio de ordenación del listado público.
/// Cada valor soportado está enumerado de forma explícita.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdenPeliculas {
    /// Alfabético por título
    Titulo,
    /// Puntuación IMDB descendente
    Puntuacion,
    /// Fecha de estreno local descendente (por defecto)
    FechaEstreno,
}

impl OrdenPeliculas {
    pub fn parsear(valor: Option<&str>) -> Self {
        match valor {
            Some("titulo") => OrdenPeliculas::Titulo,
            Some("puntuacion") => OrdenPeliculas::Puntuacion,
            _ => OrdenPeliculas::FechaEstreno,
        }
    }

    pub fn nombre(&self) -> &'static str {
        match self {
            OrdenPeliculas::Titulo => "titulo",
            OrdenPeliculas::Puntuacion => "puntuacion",
            OrdenPeliculas::FechaEstreno => "fecha_estreno",
        }
    }
}

/// Query params del listado público de películas
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosPeliculas {
    pub search: Option<String>,
    pub clasificacion: Option<String>,
    pub ordenar_por: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl FiltrosPeliculas {
    /// Página pedida, 1 como mínimo
    pub fn pagina(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Límite acotado a `LIMITE_MAX_PELICULAS` sin importar lo pedido
    pub fn limite(&self) -> u64 {
        self.limit
            .unwrap_or(LIMITE_MAX_PELICULAS)
            .clamp(1, LIMITE_MAX_PELICULAS)
    }
}

/// Película en el listado público. `generos` es la lista de nombres
/// unida por comas.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeliculaListadoItem {
    pub pelicula_id: i64,
    pub titulo: String,
    pub poster_url: Option<String>,
    pub clasificacion: String,
    pub duracion_minutos: i32,
    pub puntuacion_imdb: f32,
    pub fecha_estreno_local: String,
    pub generos: String,
}

/// Filtros efectivamente aplicados, devueltos junto al listado
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosAplicados {
    pub search: Option<String>,
    pub clasificacion: Option<String>,
    pub ordenar_por: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListadoPeliculasResponse {
    pub peliculas: Vec<PeliculaListadoItem>,
    pub pagination: Paginacion,
    pub filtros: FiltrosAplicados,
}

/// Función próxima incluida en el detalle de película
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuncionResumen {
    pub funcion_id: i64,
    pub fecha_hora_inicio: String,
    pub fecha_hora_fin: String,
    pub precio_base: f64,
    pub precio_descuento: Option<f64>,
    pub asientos_disponibles: i32,
    pub sala: SalaResumen,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeliculaDetalleResponse {
    pub pelicula_id: i64,
    pub titulo: String,
    pub sinopsis: Option<String>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duracion_minutos: i32,
    pub clasificacion: String,
    pub director: String,
    pub reparto: String,
    pub puntuacion_imdb: f32,
    pub fecha_estreno_mundial: String,
    pub fecha_estreno_local: String,
    pub generos: Vec<String>,
    pub funciones: Vec<FuncionResumen>,
}

/// Resultado de la búsqueda administrativa simple
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeliculaSimpleItem {
    pub pelicula_id: i64,
    pub titulo: String,
    pub director: String,
    pub clasificacion: String,
    pub activo: bool,
}

/// Query params de la búsqueda administrativa simple
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosBusquedaSimple {
    pub search: Option<String>,
}

// --- Envoltorios para Swagger ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessListadoPeliculasResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ListadoPeliculasResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPeliculaDetalleResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: PeliculaDetalleResponse,
}
