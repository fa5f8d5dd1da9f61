use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "genero")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub genero_id: i64,
    pub nombre: String,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::pelicula::entity::pelicula_genero::Entity")]
    PeliculaGenero,
}

impl Related<crate::domain::pelicula::entity::pelicula_genero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeliculaGenero.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
