use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Asiento físico de una sala. Se materializa al crear la sala
/// y no cambia después.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asiento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub asiento_id: i64,
    pub sala_id: i64,
    pub fila: i32,
    pub numero: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sala::Entity",
        from = "Column::SalaId",
        to = "super::sala::Column::SalaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Sala,
    #[sea_orm(has_many = "crate::domain::reserva::entity::reserva_asiento::Entity")]
    ReservaAsiento,
}

impl Related<super::sala::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sala.def()
    }
}

impl Related<crate::domain::reserva::entity::reserva_asiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservaAsiento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
