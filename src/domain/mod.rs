//! # Domain Layer
//!
//! Business-level types and the two capability contracts around them: the
//! service contract consumed by callers and the repository contract
//! implemented by storage adapters.

pub mod provider;

pub use provider::{Provider, ProviderRepository, ProviderService};
