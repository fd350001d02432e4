//! Profile Handlers Module
//!
//! - **`list_profiles`** - GET /profiles - One page of the caller's profiles
//! - **`create_profile`** - POST /profiles - Create, answer with the first page (201)
//! - **`rename_profile`** - PUT /profiles - Rename, echo the submitted profile
//! - **`delete_profile`** - DELETE /profiles - Delete (204)

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::profiles::types::Profile;

/// List handler
pub mod list;

/// Create handler
pub mod create;

/// Rename handler
pub mod rename;

/// Delete handler
pub mod delete;

pub use create::create_profile;
pub use delete::delete_profile;
pub use list::list_profiles;
pub use rename::rename_profile;

/// Reject a submitted profile whose `owner` is not the caller
pub(crate) fn ensure_owner(profile: &Profile, user: &User) -> Result<(), BackendError> {
    if profile.owner != user.id {
        tracing::warn!(
            "User {} tried to modify profile {} owned by {}",
            user.id,
            profile.id,
            profile.owner
        );
        return Err(BackendError::authorization("You don't have access to this resource"));
    }
    Ok(())
}
