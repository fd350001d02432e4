//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and middleware stack
//! - **`api_routes`** - Auth and profile endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /auth/signup` - User registration
//! - `POST /auth/login` - User login
//!
//! ## Protected
//!
//! - `GET /profiles` - List profiles
//! - `POST /profiles` - Create a profile
//! - `PUT /profiles` - Rename a profile
//! - `DELETE /profiles` - Delete a profile
//!
//! Protected routes run `auth_middleware` first. A missing or invalid token
//! answers 401 with `WWW-Authenticate: Bearer realm="..."`.

/// Main router creation
pub mod router;

/// API route handlers
pub mod api_routes;

pub use router::create_router;
