//! Holocron API server core modules.
//!
//! This crate contains the full backend for the Holocron reference-data API:
//! HTTP routing, request controllers, the favorites service, database
//! repositories, configuration, and error handling. Reference data (people,
//! planets) is read-only through the API; population happens out-of-band
//! through the migration tooling and direct inserts.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
