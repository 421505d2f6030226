//! Provider service
//!
//! Business rules on top of a [`ProviderRepository`]: UUID generation and
//! short-name conflict detection.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Provider, ProviderRepository, ProviderService};
use crate::error::DomainError;

/// Default [`ProviderService`] implementation
#[derive(Clone)]
pub struct DefaultProviderService {
    repository: Arc<dyn ProviderRepository>,
}

impl DefaultProviderService {
    pub fn new(repository: Arc<dyn ProviderRepository>) -> Self {
        Self { repository }
    }

    /// Fails with `Conflict` when an active provider other than `owner_uuid`
    /// already uses `short_name`.
    async fn ensure_short_name_available(
        &self,
        short_name: &str,
        owner_uuid: Option<&str>,
    ) -> Result<(), DomainError> {
        match self.repository.get_provider_by_short_name(short_name).await {
            Ok(existing) if Some(existing.uuid.as_str()) == owner_uuid => Ok(()),
            Ok(_) => {
                tracing::warn!(short_name = %short_name, "Provider short name already taken");
                Err(DomainError::Conflict(short_name.to_string()))
            }
            Err(DomainError::NotFound) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Maps a unique-index violation raised by a concurrent writer onto `Conflict`.
fn conflict_on_unique_violation(err: DomainError, short_name: &str) -> DomainError {
    if err.is_unique_violation() {
        DomainError::Conflict(short_name.to_string())
    } else {
        err
    }
}

#[async_trait]
impl ProviderService for DefaultProviderService {
    async fn create_provider(
        &self,
        short_name: &str,
        long_name: &str,
    ) -> Result<Provider, DomainError> {
        self.ensure_short_name_available(short_name, None).await?;

        let provider = Provider::new(Uuid::new_v4().to_string(), short_name, long_name);
        self.repository
            .create_provider(&provider)
            .await
            .map_err(|err| conflict_on_unique_violation(err, short_name))?;

        tracing::info!(uuid = %provider.uuid, short_name = %short_name, "Created provider");
        Ok(provider)
    }

    async fn update_provider(
        &self,
        uuid: &str,
        short_name: &str,
        long_name: &str,
    ) -> Result<Provider, DomainError> {
        let current = self.repository.get_provider_by_uuid(uuid).await?;
        if current.short_name != short_name {
            self.ensure_short_name_available(short_name, Some(uuid))
                .await?;
        }

        let updated = Provider::new(uuid, short_name, long_name);
        self.repository
            .update_provider(&updated)
            .await
            .map_err(|err| conflict_on_unique_violation(err, short_name))?;

        self.repository.get_provider_by_uuid(uuid).await
    }

    async fn get_provider_by_uuid(&self, uuid: &str) -> Result<Provider, DomainError> {
        self.repository.get_provider_by_uuid(uuid).await
    }

    async fn get_providers(&self, limit: i64) -> Result<Vec<Provider>, DomainError> {
        self.repository.get_providers(limit).await
    }

    async fn delete_provider_by_uuid(&self, uuid: &str) -> Result<(), DomainError> {
        self.repository.delete_provider_by_uuid(uuid).await
    }
}
