//! HTTP controller endpoints for the Holocron API.
//!
//! Controllers handle HTTP requests, resolve the acting user, call into
//! repositories or the favorites service, and return JSON responses. Every
//! handler carries a utoipa annotation for the OpenAPI document.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod util;
