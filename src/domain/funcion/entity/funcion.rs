use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Proyección programada de una película en una sala.
///
/// `asientos_reservados` es un contador desnormalizado; las mutaciones de
/// reservas lo mantienen consistente con los asientos vinculados activos
/// dentro de la misma transacción. Invariante: asientos_reservados ≤
/// capacidad de la sala.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "funcion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub funcion_id: i64,
    pub pelicula_id: i64,
    pub sala_id: i64,
    pub fecha_hora_inicio: DateTime,
    pub fecha_hora_fin: DateTime,
    pub precio_base: Decimal,
    pub precio_descuento: Option<Decimal>,
    pub asientos_disponibles: i32,
    pub asientos_reservados: i32,
    pub activo: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::pelicula::entity::pelicula::Entity",
        from = "Column::PeliculaId",
        to = "crate::domain::pelicula::entity::pelicula::Column::PeliculaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pelicula,
    #[sea_orm(
        belongs_to = "crate::domain::sala::entity::sala::Entity",
        from = "Column::SalaId",
        to = "crate::domain::sala::entity::sala::Column::SalaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Sala,
    #[sea_orm(has_many = "crate::domain::reserva::entity::reserva::Entity")]
    Reserva,
}

impl Related<crate::domain::pelicula::entity::pelicula::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pelicula.def()
    }
}

impl Related<crate::domain::sala::entity::sala::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sala.def()
    }
}

impl Related<crate::domain::reserva::entity::reserva::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reserva.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
