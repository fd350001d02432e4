//! Profiles Module
//!
//! Authenticated CRUD over a user's named profiles. Every handler takes the
//! `CurrentUser` extractor, so the caller's identity is re-resolved from the
//! token before any profile is touched.
//!
//! # Module Structure
//!
//! ```text
//! profiles/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Profile, request bodies, page arithmetic
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Shared helpers
//!     ├── list.rs     - GET /profiles
//!     ├── create.rs   - POST /profiles
//!     ├── rename.rs   - PUT /profiles
//!     └── delete.rs   - DELETE /profiles
//! ```
//!
//! # Ownership
//!
//! Profile names are unique per owner. Rename and delete filter on
//! `{id, owner}` where the owner is the verified user; the `owner` field of
//! the request body only drives the early 401.

/// Profile types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_profile, delete_profile, list_profiles, rename_profile};
pub use types::{CreateProfileRequest, Page, PageQuery, Profile};
