use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vínculo reserva ↔ asiento para una función concreta.
///
/// `funcion_id` se desnormaliza aquí para poder sostener el índice UNIQUE
/// (funcion_id, asiento_id) que impide la doble reserva del mismo asiento.
/// Al cancelar o expirar una reserva sus vínculos se eliminan, de modo que
/// el índice cubre exactamente los asientos ocupados vivos.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reserva_asiento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reserva_asiento_id: i64,
    pub reserva_id: i64,
    pub funcion_id: i64,
    pub asiento_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reserva::Entity",
        from = "Column::ReservaId",
        to = "super::reserva::Column::ReservaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Reserva,
    #[sea_orm(
        belongs_to = "crate::domain::funcion::entity::funcion::Entity",
        from = "Column::FuncionId",
        to = "crate::domain::funcion::entity::funcion::Column::FuncionId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Funcion,
    #[sea_orm(
        belongs_to = "crate::domain::sala::entity::asiento::Entity",
        from = "Column::AsientoId",
        to = "crate::domain::sala::entity::asiento::Column::AsientoId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Asiento,
}

impl Related<super::reserva::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reserva.def()
    }
}

impl Related<crate::domain::funcion::entity::funcion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funcion.def()
    }
}

impl Related<crate::domain::sala::entity::asiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asiento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
