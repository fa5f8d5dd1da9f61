use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rol del usuario. Determina la redirección tras el login
/// y el acceso a las rutas administrativas.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "TipoUsuario")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoUsuario {
    #[sea_orm(string_value = "CLIENTE")]
    Cliente,
    #[sea_orm(string_value = "EMPLEADO")]
    Empleado,
    #[sea_orm(string_value = "ADMINISTRADOR")]
    Administrador,
    #[sea_orm(string_value = "GERENTE")]
    Gerente,
}

impl TipoUsuario {
    /// Roles con acceso al panel administrativo
    pub fn es_personal(&self) -> bool {
        !matches!(self, TipoUsuario::Cliente)
    }

    /// Destino de redirección tras un login exitoso
    pub fn destino_redireccion(&self) -> &'static str {
        if self.es_personal() {
            "/admin"
        } else {
            "/cliente"
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub usuario_id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: Date,
    pub tipo_usuario: TipoUsuario,
    pub activo: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::reserva::entity::reserva::Entity")]
    Reserva,
}

impl Related<crate::domain::reserva::entity::reserva::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reserva.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
