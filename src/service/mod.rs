//! Service layer for business logic.
//!
//! Services coordinate repositories and enforce the rules the storage layer
//! alone cannot express with a useful error: favorites require the target to
//! exist and reject duplicates per (user, target) pair.

pub mod favorite;
