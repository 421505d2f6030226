//! # Repository Layer
//!
//! Storage adapters implementing the domain repository contracts with SeaORM.

pub mod provider;

pub use provider::SqlProviderRepository;
