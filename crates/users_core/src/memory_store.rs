//! In-memory [`UserRepository`] implementation.
//!
//! All state sits behind a single `RwLock`. Mutations take the write lock for
//! their whole duration, which makes id assignment atomic and gives
//! read-after-write consistency to any caller that awaited the mutation.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::{StoreResult, UserStoreError};
use crate::repository::{Page, PageRequest, UpsertOutcome, UserRepository};
use crate::seed::seed_users;
use crate::user::{User, UserDetails, UserId};

#[cfg(test)]
#[path = "memory_store_tests.rs"]
mod tests;

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,

    /// Ids of deleted users.
    retired: BTreeSet<UserId>,

    /// Largest id this store has ever held. `None` until the first insert.
    high_water: Option<UserId>,
}

impl StoreState {
    fn with_users(users: Vec<User>) -> Self {
        let mut state = Self::default();
        for user in users {
            state.insert(user);
        }
        state
    }

    fn insert(&mut self, user: User) {
        if self.high_water.map_or(true, |mark| user.id > mark) {
            self.high_water = Some(user.id);
        }
        self.users.insert(user.id, user);
    }

    /// Id for the next created user. `None` once the mark is at `u64::MAX`.
    fn next_id(&self) -> Option<UserId> {
        match self.high_water {
            Some(mark) => mark.next(),
            None => Some(UserId::new(1)),
        }
    }
}

/// Store that keeps users in process memory.
///
/// Each instance is independent; tests create one per case to stay isolated.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// A store with no users. The first created user receives id 1.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding the standard seed users.
    pub fn seeded() -> StoreResult<Self> {
        let users = seed_users()?;
        Ok(Self {
            state: RwLock::new(StoreState::with_users(users)),
        })
    }

    /// Restore the seed, discarding every change including retired ids.
    pub async fn reset(&self) -> StoreResult<()> {
        let users = seed_users()?;
        let mut state = self.state.write().await;
        *state = StoreState::with_users(users);
        info!(users = state.users.len(), "User store reset to seed data");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self, page: PageRequest) -> StoreResult<Page<User>> {
        let state = self.state.read().await;
        let items = state
            .users
            .values()
            .skip(page.offset())
            .take(page.size())
            .cloned()
            .collect();

        Ok(Page {
            items,
            request: page,
            total_elements: state.users.len(),
        })
    }

    async fn get(&self, id: UserId) -> StoreResult<User> {
        let state = self.state.read().await;
        state
            .users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::NotFound { id })
    }

    async fn create(&self, details: UserDetails) -> StoreResult<User> {
        let mut state = self.state.write().await;
        let id = match state.next_id() {
            Some(id) => id,
            None => {
                let last = UserId::new(u64::MAX);
                warn!(last = %last, "No user ids left to assign");
                return Err(UserStoreError::IdsExhausted { last });
            }
        };
        let user = User::new(id, details);
        state.insert(user.clone());

        debug!(id = %id, "User created");
        Ok(user)
    }

    async fn upsert(&self, id: UserId, details: UserDetails) -> StoreResult<UpsertOutcome> {
        let mut state = self.state.write().await;

        if state.retired.contains(&id) {
            return Err(UserStoreError::IdRetired { id });
        }

        if let Some(existing) = state.users.get_mut(&id) {
            existing.details = details;
            debug!(id = %id, "User replaced");
            return Ok(UpsertOutcome::Updated(existing.clone()));
        }

        let user = User::new(id, details);
        state.insert(user.clone());

        debug!(id = %id, "User created at caller-supplied id");
        Ok(UpsertOutcome::Created(user))
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        let mut state = self.state.write().await;

        if state.users.remove(&id).is_none() {
            return Err(UserStoreError::NotFound { id });
        }
        state.retired.insert(id);

        debug!(id = %id, "User deleted");
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.state.read().await.users.len())
    }
}
