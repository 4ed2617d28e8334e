//! User entity and its validated field set.
//!
//! [`UserDetails`] holds every mutable field of a user and can only be built
//! through [`UserDetails::new`], which enforces the field rules. Accepted
//! values are stored exactly as given. A [`User`] is a set of details bound
//! to a store-assigned [`UserId`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;

/// Maximum length of a first or last name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Wire format of `dayOfBirth`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is a valid regex")
});

/// Identifier of a user. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id. Callers holding untrusted input should go through
    /// [`UserId::try_from_raw`] or [`str::parse`] instead.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn try_from_raw(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::InvalidId {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id immediately after this one, or `None` at the top of the range.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().parse::<u64>().map_err(|_| ValidationError::InvalidId {
            value: s.to_string(),
        })?;
        Self::try_from_raw(raw)
    }
}

/// The mutable fields of a user.
///
/// Only `Serialize` is derived: values can be built solely through
/// [`UserDetails::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    first_name: String,
    last_name: String,
    day_of_birth: NaiveDate,
    email: String,
}

impl UserDetails {
    /// Validate and build a field set.
    ///
    /// Names and email must contain something other than whitespace. They
    /// are kept verbatim, so a padded email fails the address check. The day
    /// of birth may not lie after today (UTC).
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        day_of_birth: NaiveDate,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = required_text("firstName", first_name.into(), MAX_NAME_LENGTH)?;
        let last_name = required_text("lastName", last_name.into(), MAX_NAME_LENGTH)?;
        let email = required_text("email", email.into(), MAX_EMAIL_LENGTH)?;

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::invalid_email("email", email));
        }

        if day_of_birth > Utc::now().date_naive() {
            return Err(ValidationError::FutureDate {
                field: "dayOfBirth".to_string(),
                value: day_of_birth.format(DATE_FORMAT).to_string(),
            });
        }

        Ok(Self {
            first_name,
            last_name,
            day_of_birth,
            email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn day_of_birth(&self) -> NaiveDate {
        self.day_of_birth
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Parse a `YYYY-MM-DD` date for the named field.
///
/// Only the canonical zero-padded form is accepted, so the parsed date
/// formats back to exactly `value`.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
        .ok_or_else(|| ValidationError::invalid_date(field, value))
}

fn required_text(field: &str, value: String, max: usize) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::too_long(field, length, max));
    }
    Ok(value)
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,

    #[serde(flatten)]
    pub details: UserDetails,
}

impl User {
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }
}
