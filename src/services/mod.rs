//! # Service Layer
//!
//! Implementations of the domain service contracts.

pub mod provider;

pub use provider::DefaultProviderService;
