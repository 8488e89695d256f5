//! Data access layer repositories.
//!
//! Repositories provide a thin abstraction over database operations. Each is
//! generic over [`sea_orm::ConnectionTrait`] so the same code runs against a
//! plain connection or inside a transaction.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
