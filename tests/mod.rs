//! Test suite for Palabrator
//!
//! API tests drive the real router through `axum-test`, backed by the
//! in-memory store. Store tests under `integration::database` run against
//! PostgreSQL when `DATABASE_URL` is set and are skipped otherwise.

pub mod common;
