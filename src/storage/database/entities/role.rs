use crate::core::models::Role as DomainRole;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Role ID (UUID string)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Display name
    pub name: String,

    /// Uppercased name, unique
    #[sea_orm(unique)]
    pub normalized_name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Membership edges relation
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain role model
    pub fn to_domain_role(&self) -> DomainRole {
        DomainRole {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }

    /// Convert domain role model to SeaORM active model
    pub fn from_domain_role(role: &DomainRole) -> ActiveModel {
        ActiveModel {
            id: Set(role.id.clone()),
            name: Set(role.name.clone()),
            normalized_name: Set(role.normalized_name()),
            created_at: Set(role.created_at.into()),
        }
    }
}
