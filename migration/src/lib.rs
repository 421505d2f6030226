//! Database migrations for the provider catalog.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_01_01_000001_create_provider;
mod m2025_01_01_000002_add_provider_active_short_name_guard;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_01_01_000001_create_provider::Migration),
            Box::new(m2025_01_01_000002_add_provider_active_short_name_guard::Migration),
        ]
    }
}
