use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Estado de una reserva.
///
/// Ciclo de vida: PENDIENTE → CONFIRMADA → PAGADA → UTILIZADA.
/// Una reserva sin pagar puede pasar a CANCELADA o EXPIRADA.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "EstadoReserva")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoReserva {
    #[sea_orm(string_value = "PENDIENTE")]
    Pendiente,
    #[sea_orm(string_value = "CONFIRMADA")]
    Confirmada,
    #[sea_orm(string_value = "PAGADA")]
    Pagada,
    #[sea_orm(string_value = "UTILIZADA")]
    Utilizada,
    #[sea_orm(string_value = "CANCELADA")]
    Cancelada,
    #[sea_orm(string_value = "EXPIRADA")]
    Expirada,
}

impl EstadoReserva {
    /// Transiciones permitidas del ciclo de vida
    pub fn puede_transicionar_a(&self, destino: EstadoReserva) -> bool {
        use EstadoReserva::*;
        matches!(
            (self, destino),
            (Pendiente, Confirmada)
                | (Confirmada, Pagada)
                | (Pagada, Utilizada)
                | (Pendiente, Cancelada)
                | (Pendiente, Expirada)
                | (Confirmada, Cancelada)
                | (Confirmada, Expirada)
        )
    }

    /// Una reserva viva retiene sus asientos
    pub fn es_activa(&self) -> bool {
        !matches!(self, EstadoReserva::Cancelada | EstadoReserva::Expirada)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reserva")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reserva_id: i64,
    /// Nulo en flujos de invitado
    pub usuario_id: Option<i64>,
    pub funcion_id: i64,
    #[sea_orm(unique)]
    pub codigo_reserva: String,
    pub cantidad_asientos: i32,
    pub precio_total: Decimal,
    pub estado: EstadoReserva,
    pub fecha_reserva: DateTime,
    pub fecha_vencimiento: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::usuario::entity::usuario::Entity",
        from = "Column::UsuarioId",
        to = "crate::domain::usuario::entity::usuario::Column::UsuarioId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Usuario,
    #[sea_orm(
        belongs_to = "crate::domain::funcion::entity::funcion::Entity",
        from = "Column::FuncionId",
        to = "crate::domain::funcion::entity::funcion::Column::FuncionId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Funcion,
    #[sea_orm(has_many = "super::reserva_asiento::Entity")]
    ReservaAsiento,
}

impl Related<crate::domain::usuario::entity::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<crate::domain::funcion::entity::funcion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funcion.def()
    }
}

impl Related<super::reserva_asiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservaAsiento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
