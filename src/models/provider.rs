//! Provider entity model
//!
//! This module contains the SeaORM entity model for the `provider` table.
//! Rows with a non-null `deleted_at` are soft-deleted and invisible to lookups.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::domain::Provider;

/// Storage record for a provider
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "provider")]
pub struct Model {
    /// Surrogate key (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Public identifier, unique across all rows
    #[sea_orm(unique)]
    pub uuid: String,

    /// Short name, unique among active rows
    pub short_name: String,

    pub long_name: String,

    /// Timestamp when the provider was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the provider was last updated
    pub updated_at: DateTimeWithTimeZone,

    /// Soft-delete marker
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl From<Model> for Provider {
    fn from(model: Model) -> Self {
        Self {
            uuid: model.uuid,
            short_name: model.short_name,
            long_name: model.long_name,
        }
    }
}
