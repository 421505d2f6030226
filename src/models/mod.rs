//! # Data Models
//!
//! SeaORM entity models backing the domain types.

pub mod provider;
