//! Translation between HTTP types and domain types
//!
//! Conversions between the request/response models and `users_core` types.
//! Translation happens at the API boundary and includes validation.

use users_core::{
    parse_date, Page, PageRequest, User, UserDetails, UserId, ValidationError, DATE_FORMAT,
    DEFAULT_PAGE_SIZE,
};

use crate::{
    errors::ApiError,
    models::{request::*, response::*},
};

/// Parse the `{id}` path segment.
pub fn http_user_id_to_domain(raw: &str) -> Result<UserId, ApiError> {
    Ok(raw.parse::<UserId>()?)
}

/// Convert an HTTP user body to validated domain details.
///
/// # Errors
///
/// Returns a validation error if a field is missing, blank, too long, or
/// badly formatted. Fields are checked in declaration order and the first
/// failure is reported.
pub fn http_user_request_to_domain(http_req: UserRequest) -> Result<UserDetails, ApiError> {
    let first_name = required("firstName", http_req.first_name)?;
    let last_name = required("lastName", http_req.last_name)?;
    let day_of_birth = required("dayOfBirth", http_req.day_of_birth)?;
    let day_of_birth = parse_date("dayOfBirth", &day_of_birth)?;
    let email = required("email", http_req.email)?;

    Ok(UserDetails::new(first_name, last_name, day_of_birth, email)?)
}

/// Reject an update body whose `id` names a different user than the path.
pub fn check_body_id(path_id: UserId, http_req: &UserRequest) -> Result<(), ApiError> {
    match http_req.id {
        Some(body_id) if body_id != path_id.value() => Err(ValidationError::IdMismatch {
            path: path_id,
            body: UserId::new(body_id),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Convert list query parameters to a domain page request.
pub fn http_list_query_to_domain(query: ListUsersQuery) -> Result<PageRequest, ApiError> {
    let number = parse_paging("page", query.page, 0)?;
    let size = parse_paging("size", query.size, DEFAULT_PAGE_SIZE)?;
    Ok(PageRequest::new(number, size)?)
}

pub fn domain_user_to_http(user: User) -> UserResponse {
    UserResponse {
        id: user.id.value(),
        first_name: user.details.first_name().to_string(),
        last_name: user.details.last_name().to_string(),
        day_of_birth: user.details.day_of_birth().format(DATE_FORMAT).to_string(),
        email: user.details.email().to_string(),
    }
}

pub fn domain_page_to_http(page: Page<User>) -> UserPageResponse {
    let metadata = PageMetadata {
        size: page.request.size(),
        total_elements: page.total_elements,
        total_pages: page.total_pages(),
        number: page.request.number(),
    };

    UserPageResponse {
        embedded: EmbeddedUsers {
            users: page.items.into_iter().map(domain_user_to_http).collect(),
        },
        page: metadata,
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or_else(|| ValidationError::empty_field(field))
}

fn parse_paging(
    parameter: &str,
    value: Option<String>,
    default: usize,
) -> Result<usize, ValidationError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            ValidationError::invalid_paging(
                parameter,
                format!("'{}' is not a non-negative integer", raw),
            )
        }),
    }
}

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;
