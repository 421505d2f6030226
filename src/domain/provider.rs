//! Provider entity and its service/repository contracts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An external service provider as seen by the business layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Globally unique identifier, immutable after creation
    pub uuid: String,
    /// Short name, unique among active providers
    pub short_name: String,
    /// Descriptive name
    pub long_name: String,
}

impl Provider {
    pub fn new(
        uuid: impl Into<String>,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            short_name: short_name.into(),
            long_name: long_name.into(),
        }
    }
}

/// Business operations on providers.
///
/// Dropping a returned future cancels the operation at its next await point.
#[async_trait]
pub trait ProviderService: Send + Sync {
    /// Creates a provider with a freshly generated UUID.
    async fn create_provider(
        &self,
        short_name: &str,
        long_name: &str,
    ) -> Result<Provider, DomainError>;

    /// Replaces the names of the active provider identified by `uuid`.
    async fn update_provider(
        &self,
        uuid: &str,
        short_name: &str,
        long_name: &str,
    ) -> Result<Provider, DomainError>;

    async fn get_provider_by_uuid(&self, uuid: &str) -> Result<Provider, DomainError>;

    /// Lists active providers; `limit <= 0` means no cap.
    async fn get_providers(&self, limit: i64) -> Result<Vec<Provider>, DomainError>;

    async fn delete_provider_by_uuid(&self, uuid: &str) -> Result<(), DomainError>;
}

/// Persistence operations on providers.
///
/// Lookups only see active (not soft-deleted) records and report a miss as
/// [`DomainError::NotFound`].
#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn create_provider(&self, provider: &Provider) -> Result<(), DomainError>;

    async fn update_provider(&self, provider: &Provider) -> Result<(), DomainError>;

    /// Deleting an unknown UUID is not an error.
    async fn delete_provider_by_uuid(&self, uuid: &str) -> Result<(), DomainError>;

    async fn get_provider_by_uuid(&self, uuid: &str) -> Result<Provider, DomainError>;

    async fn get_provider_by_short_name(
        &self,
        short_name: &str,
    ) -> Result<Provider, DomainError>;

    /// Lists active providers in insertion order; `limit <= 0` means no cap.
    async fn get_providers(&self, limit: i64) -> Result<Vec<Provider>, DomainError>;
}
