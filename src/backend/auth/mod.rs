//! Authentication Module
//!
//! This module handles user registration, login and the token identity that
//! protected routes rely on.
//!
//! # Architecture
//!
//! - **`users`** - User model and email normalization
//! - **`sessions`** - Token signing and verification (`TokenService`)
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`identity`** - Resolve the acting user from verified claims
//! - **`handlers`** - HTTP handlers for `/auth/login` and `/auth/signup`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── sessions.rs     - Token service
//! ├── password.rs     - Password hashing
//! ├── identity.rs     - Identity extraction
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs    - Request types
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, last name, email and password → user created → token returned (201)
//! 2. **Login**: email and password → credentials verified → token returned (200)
//! 3. **Protected request**: token verified by middleware → user re-resolved by email claim
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 12) and never logged
//! - Tokens are HS256, bound to an issuer and audience, and expire
//! - Bad credentials answer 400 with the same message whether the email or
//!   the password was wrong

/// User model
pub mod users;

/// Token signing and verification
pub mod sessions;

/// Password hashing
pub mod password;

/// Identity extraction from verified claims
pub mod identity;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, signup};
pub use handlers::types::{LoginRequest, SignupRequest};
pub use identity::{resolve_identity, IdentityError};
pub use sessions::{Claims, TokenService};
pub use users::{normalize_email, User};
