//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use provider_catalog::models::provider;
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Reads the raw storage row for `uuid`, including soft-deleted rows.
#[allow(dead_code)]
pub async fn find_record(db: &DatabaseConnection, uuid: &str) -> Result<Option<provider::Model>> {
    let record = provider::Entity::find()
        .filter(provider::Column::Uuid.eq(uuid))
        .one(db)
        .await?;
    Ok(record)
}
