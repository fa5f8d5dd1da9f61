use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tabla de unión película ↔ género
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pelicula_genero")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pelicula_genero_id: i64,
    pub pelicula_id: i64,
    pub genero_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pelicula::Entity",
        from = "Column::PeliculaId",
        to = "super::pelicula::Column::PeliculaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pelicula,
    #[sea_orm(
        belongs_to = "crate::domain::catalogo::entity::genero::Entity",
        from = "Column::GeneroId",
        to = "crate::domain::catalogo::entity::genero::Column::GeneroId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Genero,
}

impl Related<super::pelicula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pelicula.def()
    }
}

impl Related<crate::domain::catalogo::entity::genero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genero.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
