//! Storage interface for users.
//!
//! Handlers depend on [`UserRepository`] rather than a concrete store so a
//! deployment, or a single test, can inject its own instance.

use async_trait::async_trait;

use crate::errors::{StoreResult, ValidationError};
use crate::user::{User, UserDetails, UserId};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Zero-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::invalid_paging("size", "must be at least 1"));
        }
        if size > MAX_PAGE_SIZE {
            return Err(ValidationError::invalid_paging(
                "size",
                format!("must not exceed {}", MAX_PAGE_SIZE),
            ));
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first element on this page.
    pub fn offset(&self) -> usize {
        self.number.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the counts needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.request.size())
    }
}

/// Result of an upsert, telling the caller which branch was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(User),
    Updated(User),
}

impl UpsertOutcome {
    pub fn user(&self) -> &User {
        match self {
            Self::Created(user) | Self::Updated(user) => user,
        }
    }

    pub fn into_user(self) -> User {
        match self {
            Self::Created(user) | Self::Updated(user) => user,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// CRUD operations over users.
///
/// Implementations must serialize mutations: two concurrent `create` calls
/// never receive the same id, and an id is never handed out twice, even after
/// the user holding it was deleted.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Users ordered by ascending id.
    async fn list(&self, page: PageRequest) -> StoreResult<Page<User>>;

    async fn get(&self, id: UserId) -> StoreResult<User>;

    /// Store a new user under the next free id.
    ///
    /// Fails with `IdsExhausted` once an id of `u64::MAX` has been used.
    async fn create(&self, details: UserDetails) -> StoreResult<User>;

    /// Replace the user at `id`, or create it there if absent.
    ///
    /// Fails with `IdRetired` if `id` belonged to a deleted user.
    async fn upsert(&self, id: UserId, details: UserDetails) -> StoreResult<UpsertOutcome>;

    /// Remove a user permanently. Fails with `NotFound` if absent.
    async fn delete(&self, id: UserId) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<usize>;
}
