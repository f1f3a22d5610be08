//! Persistence port for user records.
//!
//! The admin surface reads users through composed filters and mutates only
//! the activity flag; every other user write path lives outside this
//! service.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::listing::FilterFragment;
use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// Port for user storage and retrieval.
///
/// `find_all` and `count` take the same composed [`FilterFragment`] so the
/// page and its total always describe the same predicate. `set_active`
/// returns the updated record, or `None` when no user has the identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    ///
    /// Returns `None` if no user exists with the given id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch one page of users matching the composed filter.
    async fn find_all(
        &self,
        filter: &FilterFragment,
        page: &PageRequest,
    ) -> Result<Vec<User>, UserRepositoryError>;

    /// Count every user matching the composed filter, across all pages.
    async fn count(&self, filter: &FilterFragment) -> Result<u64, UserRepositoryError>;

    /// Persist a new activity flag and return the updated record.
    ///
    /// Returns `None` if no user exists with the given id.
    async fn set_active(
        &self,
        id: &UserId,
        active: bool,
    ) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation used until a real persistence adapter is wired.
///
/// Lookups return empty results and mutations report the record as missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn find_all(
        &self,
        _filter: &FilterFragment,
        _page: &PageRequest,
    ) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self, _filter: &FilterFragment) -> Result<u64, UserRepositoryError> {
        Ok(0)
    }

    async fn set_active(
        &self,
        _id: &UserId,
        _active: bool,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}
