//! Provider repository for database operations
//!
//! This module provides [`SqlProviderRepository`], the SeaORM implementation of
//! [`ProviderRepository`]. It is the only place that builds `provider` rows.
//! Deletion is soft: it stamps `deleted_at`, and every read filters on
//! `deleted_at IS NULL`.

use async_trait::async_trait;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    Set,
};
use std::sync::Arc;

use crate::domain::{Provider, ProviderRepository};
use crate::error::DomainError;
use crate::models::provider::{self, Entity as ProviderRecord};

/// SQL-backed provider repository
#[derive(Debug, Clone)]
pub struct SqlProviderRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl SqlProviderRepository {
    /// Creates a new SqlProviderRepository instance
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection pool
    /// * `auto_migrate` - Apply pending schema migrations before returning
    ///
    /// # Returns
    ///
    /// Returns the repository, or the migration error if the schema could not be applied
    pub async fn new(
        db: Arc<DatabaseConnection>,
        auto_migrate: bool,
    ) -> Result<Self, DomainError> {
        if auto_migrate {
            Migrator::up(&*db, None).await.map_err(|err| {
                tracing::error!(error = %err, "Failed migrating provider schema");
                DomainError::from(err)
            })?;
        }
        Ok(Self { db })
    }

    fn active() -> Select<ProviderRecord> {
        ProviderRecord::find().filter(provider::Column::DeletedAt.is_null())
    }

    fn now() -> DateTimeWithTimeZone {
        Utc::now().into()
    }
}

#[async_trait]
impl ProviderRepository for SqlProviderRepository {
    async fn create_provider(&self, p: &Provider) -> Result<(), DomainError> {
        let now = Self::now();
        let record = provider::ActiveModel {
            uuid: Set(p.uuid.clone()),
            short_name: Set(p.short_name.clone()),
            long_name: Set(p.long_name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        ProviderRecord::insert(record)
            .exec(&*self.db)
            .await
            .map_err(|err| {
                tracing::error!(
                    uuid = %p.uuid,
                    short_name = %p.short_name,
                    error = %err,
                    "Failed creating new provider"
                );
                DomainError::from(err)
            })?;

        Ok(())
    }

    async fn update_provider(&self, p: &Provider) -> Result<(), DomainError> {
        let result = ProviderRecord::update_many()
            .col_expr(provider::Column::ShortName, Expr::value(p.short_name.clone()))
            .col_expr(provider::Column::LongName, Expr::value(p.long_name.clone()))
            .col_expr(provider::Column::UpdatedAt, Expr::value(Self::now()))
            .filter(provider::Column::Uuid.eq(p.uuid.as_str()))
            .filter(provider::Column::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(|err| {
                tracing::error!(uuid = %p.uuid, error = %err, "Failed updating provider");
                DomainError::from(err)
            })?;

        if result.rows_affected == 0 {
            tracing::warn!(uuid = %p.uuid, "Provider with this UUID doesn't exist");
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn delete_provider_by_uuid(&self, uuid: &str) -> Result<(), DomainError> {
        let now = Self::now();
        let result = ProviderRecord::update_many()
            .col_expr(provider::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(provider::Column::UpdatedAt, Expr::value(now))
            .filter(provider::Column::Uuid.eq(uuid))
            .filter(provider::Column::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(|err| {
                tracing::error!(uuid = %uuid, error = %err, "Failed deleting provider");
                DomainError::from(err)
            })?;

        if result.rows_affected == 0 {
            tracing::debug!(uuid = %uuid, "No active provider to delete");
        }

        Ok(())
    }

    async fn get_provider_by_uuid(&self, uuid: &str) -> Result<Provider, DomainError> {
        let record = Self::active()
            .filter(provider::Column::Uuid.eq(uuid))
            .one(&*self.db)
            .await
            .map_err(|err| {
                tracing::error!(uuid = %uuid, error = %err, "Failed getting provider");
                DomainError::from(err)
            })?;

        match record {
            Some(record) => Ok(record.into()),
            None => {
                tracing::warn!(uuid = %uuid, "Provider with this UUID doesn't exist");
                Err(DomainError::NotFound)
            }
        }
    }

    async fn get_provider_by_short_name(&self, short_name: &str) -> Result<Provider, DomainError> {
        let record = Self::active()
            .filter(provider::Column::ShortName.eq(short_name))
            .one(&*self.db)
            .await
            .map_err(|err| {
                tracing::error!(
                    short_name = %short_name,
                    error = %err,
                    "Failed getting provider"
                );
                DomainError::from(err)
            })?;

        match record {
            Some(record) => Ok(record.into()),
            None => {
                tracing::warn!(
                    short_name = %short_name,
                    "Provider with this short name doesn't exist"
                );
                Err(DomainError::NotFound)
            }
        }
    }

    async fn get_providers(&self, limit: i64) -> Result<Vec<Provider>, DomainError> {
        let mut query = Self::active().order_by_asc(provider::Column::Id);
        if let Ok(limit) = u64::try_from(limit)
            && limit > 0
        {
            query = query.limit(limit);
        }

        let records = query.all(&*self.db).await.map_err(|err| {
            tracing::error!(limit, error = %err, "Failed getting providers");
            DomainError::from(err)
        })?;

        Ok(records.into_iter().map(Provider::from).collect())
    }
}
