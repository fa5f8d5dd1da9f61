use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Clasificación por edades
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "Clasificacion")]
pub enum Clasificacion {
    #[sea_orm(string_value = "G")]
    G,
    #[sea_orm(string_value = "PG")]
    Pg,
    #[sea_orm(string_value = "PG_13")]
    Pg13,
    #[sea_orm(string_value = "R")]
    R,
    #[sea_orm(string_value = "NC_17")]
    Nc17,
}

impl Clasificacion {
    /// Mapea la etiqueta de la UI (p. ej. "PG-13") al valor del enum.
    /// Acepta también la forma interna ("PG_13").
    pub fn from_etiqueta(etiqueta: &str) -> Option<Self> {
        match etiqueta {
            "G" => Some(Clasificacion::G),
            "PG" => Some(Clasificacion::Pg),
            "PG-13" | "PG_13" => Some(Clasificacion::Pg13),
            "R" => Some(Clasificacion::R),
            "NC-17" | "NC_17" => Some(Clasificacion::Nc17),
            _ => None,
        }
    }

    /// Etiqueta visible en la UI
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Clasificacion::G => "G",
            Clasificacion::Pg => "PG",
            Clasificacion::Pg13 => "PG-13",
            Clasificacion::R => "R",
            Clasificacion::Nc17 => "NC-17",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pelicula")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pelicula_id: i64,
    pub titulo: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub sinopsis: Option<String>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duracion_minutos: i32,
    pub clasificacion: Clasificacion,
    pub director: String,
    #[sea_orm(column_type = "Text")]
    pub reparto: String,
    pub puntuacion_imdb: f32,
    pub fecha_estreno_mundial: Date,
    pub fecha_estreno_local: Date,
    pub pais_id: Option<i64>,
    pub activo: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::catalogo::entity::pais::Entity",
        from = "Column::PaisId",
        to = "crate::domain::catalogo::entity::pais::Column::PaisId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Pais,
    #[sea_orm(has_many = "super::pelicula_genero::Entity")]
    PeliculaGenero,
    #[sea_orm(has_many = "crate::domain::funcion::entity::funcion::Entity")]
    Funcion,
}

impl Related<crate::domain::catalogo::entity::pais::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pais.def()
    }
}

impl Related<super::pelicula_genero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeliculaGenero.def()
    }
}

impl Related<crate::domain::funcion::entity::funcion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funcion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
