//! # Provider Catalog CLI
//!
//! Operator entry point: loads configuration, connects to the database and
//! runs one provider operation, printing the result as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use provider_catalog::{
    config::ConfigLoader,
    db,
    domain::{ProviderRepository, ProviderService},
    repositories::SqlProviderRepository,
    services::DefaultProviderService,
    telemetry,
};

#[derive(Parser)]
#[command(name = "provider-catalog")]
#[command(about = "Manage the provider catalog")]
struct Cli {
    /// Apply pending schema migrations before running the command
    #[arg(long, global = true)]
    migrate: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a provider
    Create {
        #[arg(long)]
        short_name: String,
        #[arg(long)]
        long_name: String,
    },

    /// Replace the names of an existing provider
    Update {
        uuid: String,
        #[arg(long)]
        short_name: String,
        #[arg(long)]
        long_name: String,
    },

    /// Show a provider by UUID
    Get { uuid: String },

    /// List providers (0 or less means no limit)
    List {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Delete a provider by UUID
    Delete { uuid: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;
    telemetry::init_tracing(&config).context("initializing telemetry")?;
    tracing::debug!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted) = config.redacted_json() {
        tracing::debug!(config = %redacted, "Effective configuration");
    }

    let pool = db::init_pool(&config)
        .await
        .context("initializing database connection pool")?;
    db::health_check(&pool).await?;
    let repository: Arc<dyn ProviderRepository> = Arc::new(
        SqlProviderRepository::new(Arc::new(pool), config.auto_migrate || cli.migrate)
            .await
            .context("initializing provider repository")?,
    );
    let service = DefaultProviderService::new(repository);

    let output = match cli.command {
        Commands::Create {
            short_name,
            long_name,
        } => serde_json::to_string_pretty(&service.create_provider(&short_name, &long_name).await?)?,
        Commands::Update {
            uuid,
            short_name,
            long_name,
        } => serde_json::to_string_pretty(
            &service
                .update_provider(&uuid, &short_name, &long_name)
                .await?,
        )?,
        Commands::Get { uuid } => {
            serde_json::to_string_pretty(&service.get_provider_by_uuid(&uuid).await?)?
        }
        Commands::List { limit } => {
            serde_json::to_string_pretty(&service.get_providers(limit).await?)?
        }
        Commands::Delete { uuid } => {
            service.delete_provider_by_uuid(&uuid).await?;
            serde_json::json!({ "deleted": uuid }).to_string()
        }
    };

    println!("{}", output);
    Ok(())
}
