//! # Provider Catalog Library
//!
//! This library provides the provider domain types, the SeaORM-backed
//! repository, the provider service and the ambient configuration,
//! database and telemetry setup around them.

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod telemetry;
pub use migration;
