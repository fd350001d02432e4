/**
 * Profile Types
 *
 * The profile record, the request bodies for the profile endpoints and the
 * page arithmetic used by listing.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named profile owned by exactly one user
///
/// Also the request body for rename and delete, which take the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    /// Id of the owning user
    pub owner: Uuid,
    pub name: String,
}

/// Body of `POST /profiles`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
}

/// Query string of `GET /profiles`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// A validated page request
///
/// `page` is 1-based and never below 1. `limit` is clamped to
/// `1..=MAX_LIMIT`.
///
/// # Example
///
/// ```rust
/// use palabrator::backend::profiles::types::Page;
///
/// let page = Page::new(Some(2), Some(10));
/// assert_eq!(page.offset(), 10);
///
/// let clamped = Page::new(Some(0), Some(5_000));
/// assert_eq!(clamped.page(), 1);
/// assert_eq!(clamped.limit(), Page::MAX_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u32,
    limit: u32,
}

impl Page {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(Self::DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT),
        }
    }

    /// The first page at the default size
    pub fn first() -> Self {
        Self::new(None, None)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records to skip: `(page - 1) * limit`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

impl From<PageQuery> for Page {
    fn from(query: PageQuery) -> Self {
        Self::new(query.page, query.limit)
    }
}
