//! PostgreSQL store tests
//!
//! Each test returns early when `DATABASE_URL` is unset.

pub mod migrations_test;
