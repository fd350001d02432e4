//! Common test utilities and helpers
//!
//! - `TestApp`: a test server over the real router and a shared memory store
//! - Authentication helpers for seeding users and minting tokens
//! - Assertion macros for `{"message": ...}` error bodies
//! - PostgreSQL fixtures, active only when `DATABASE_URL` is set

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
