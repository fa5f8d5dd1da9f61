use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pais")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pais_id: i64,
    pub nombre: String,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::pelicula::entity::pelicula::Entity")]
    Pelicula,
}

impl Related<crate::domain::pelicula::entity::pelicula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pelicula.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
