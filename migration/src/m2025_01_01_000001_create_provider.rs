//! Migration to create the provider table.
//!
//! Rows carry a surrogate integer key, the public UUID, both names, the
//! bookkeeping timestamps and a nullable `deleted_at` soft-delete marker.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Provider::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Provider::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Provider::Uuid).text().not_null())
                    .col(ColumnDef::new(Provider::ShortName).text().not_null())
                    .col(ColumnDef::new(Provider::LongName).text().not_null())
                    .col(
                        ColumnDef::new(Provider::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Provider::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Provider::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // UUIDs stay unique across deleted rows too
        manager
            .create_index(
                Index::create()
                    .name("idx_provider_uuid")
                    .table(Provider::Table)
                    .col(Provider::Uuid)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_provider_short_name")
                    .table(Provider::Table)
                    .col(Provider::ShortName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_provider_short_name").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_provider_uuid").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Provider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Provider {
    Table,
    Id,
    Uuid,
    ShortName,
    LongName,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
