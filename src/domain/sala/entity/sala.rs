use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "TipoSala")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoSala {
    #[sea_orm(string_value = "ESTANDAR")]
    Estandar,
    #[sea_orm(string_value = "PREMIUM")]
    Premium,
    #[sea_orm(string_value = "IMAX")]
    Imax,
    #[sea_orm(string_value = "4D")]
    #[serde(rename = "4D")]
    CuatroD,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sala")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sala_id: i64,
    #[sea_orm(unique)]
    pub numero: i32,
    pub nombre: String,
    pub tipo_sala: TipoSala,
    /// Invariante: capacidad_total = filas × asientos_por_fila
    pub capacidad_total: i32,
    pub filas: i32,
    pub asientos_por_fila: i32,
    pub precio_extra: Decimal,
    pub equipamiento: Option<String>,
    pub activo: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asiento::Entity")]
    Asiento,
    #[sea_orm(has_many = "crate::domain::funcion::entity::funcion::Entity")]
    Funcion,
}

impl Related<super::asiento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asiento.def()
    }
}

impl Related<crate::domain::funcion::entity::funcion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funcion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
