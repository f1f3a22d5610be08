//! Driving port for the admin read path over users.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;
use pagination::{PageInfo, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserId, UserRole};

/// Parameters for the filtered, paginated user list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListUsersRequest {
    /// Free-text search term applied across the searchable user fields.
    pub search: Option<String>,
    /// Exact-match role filter.
    pub role: Option<UserRole>,
    /// Activity filter; `None` includes both active and blocked accounts.
    pub active: Option<bool>,
    /// Page to fetch.
    pub page: PageRequest,
}

/// One page of users plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    /// Users in page order.
    pub data: Vec<User>,
    /// Total count and derived page count for the same filter.
    #[schema(value_type = Object)]
    pub pagination: PageInfo,
}

/// Domain use-case port for the admin user read path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersAdminQuery: Send + Sync {
    /// Fetch a single user by identifier.
    async fn find_user(&self, id: &UserId) -> Result<User, Error>;

    /// Fetch one page of users matching the request's filters.
    async fn list_users(&self, request: ListUsersRequest) -> Result<UserPage, Error>;
}

/// Fixture query used until persistence is wired: every user is missing and
/// every list is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersAdminQuery;

#[async_trait]
impl UsersAdminQuery for FixtureUsersAdminQuery {
    async fn find_user(&self, id: &UserId) -> Result<User, Error> {
        Err(Error::not_found(format!("no user with id {id}")))
    }

    async fn list_users(&self, request: ListUsersRequest) -> Result<UserPage, Error> {
        let pagination = PageInfo::compute(0, request.page.limit)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(UserPage {
            data: Vec::new(),
            pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_query_reports_users_as_missing() {
        let query = FixtureUsersAdminQuery;
        let id = UserId::new("u-1").expect("valid id");

        let err = query.find_user(&id).await.expect_err("missing user");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn fixture_query_lists_an_empty_page() {
        let query = FixtureUsersAdminQuery;
        let request = ListUsersRequest {
            search: None,
            role: None,
            active: None,
            page: PageRequest::first(20),
        };

        let page = query.list_users(request).await.expect("list ok");
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn fixture_query_still_validates_the_limit() {
        let query = FixtureUsersAdminQuery;
        let request = ListUsersRequest {
            search: None,
            role: None,
            active: None,
            page: PageRequest::first(0),
        };

        let err = query.list_users(request).await.expect_err("zero limit");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
