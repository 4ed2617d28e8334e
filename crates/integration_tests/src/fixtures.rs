//! Request payload fixtures.

use users_api::request::UserRequest;

/// The payload used throughout the suite.
pub fn ivan_ivanov() -> UserRequest {
    user_request("Ivan", "Ivanov", "2000-01-01", "asdas@asdas.tr")
}

/// A second, distinct payload for replacement tests.
pub fn petr_petrov() -> UserRequest {
    user_request("Petr", "Petrov", "1991-06-15", "petr.petrov@example.org")
}

pub fn user_request(first_name: &str, last_name: &str, day_of_birth: &str, email: &str) -> UserRequest {
    UserRequest {
        id: None,
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        day_of_birth: Some(day_of_birth.to_string()),
        email: Some(email.to_string()),
    }
}
