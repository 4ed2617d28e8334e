//! # Users Core
//!
//! Domain types and storage for the user resource service.
//!
//! ## Overview
//!
//! - [`User`], [`UserId`] and [`UserDetails`]: the entity and its validated fields
//! - [`UserRepository`]: the storage interface the HTTP layer depends on
//! - [`InMemoryUserStore`]: the seeded in-memory implementation
//!
//! A fresh [`InMemoryUserStore::seeded`] store holds [`SEED_USER_COUNT`] users
//! with ids `1..=20`. Ids are assigned from a high-water mark and are never
//! reused, even after the user holding them is deleted.
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use users_core::{InMemoryUserStore, UserDetails, UserRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryUserStore::seeded()?;
//! let details = UserDetails::new(
//!     "Ivan",
//!     "Ivanov",
//!     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//!     "ivan@example.com",
//! )?;
//!
//! let user = store.create(details).await?;
//! assert_eq!(user.id.value(), 21);
//! # Ok(())
//! # }
//! ```
//!
//! This crate has no HTTP dependencies. The dependency flows
//! HTTP API → users_core, never the reverse.

pub mod errors;
pub mod memory_store;
pub mod repository;
pub mod seed;
pub mod user;

pub use errors::{StoreResult, UserStoreError, ValidationError};
pub use memory_store::InMemoryUserStore;
pub use repository::{
    Page, PageRequest, UpsertOutcome, UserRepository, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use seed::{seed_users, SEED_USER_COUNT};
pub use user::{parse_date, User, UserDetails, UserId, DATE_FORMAT};
