//! Fixed seed data for a fresh store.

use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::user::{User, UserDetails, UserId, DATE_FORMAT};

/// Number of users in a freshly seeded store.
pub const SEED_USER_COUNT: usize = 20;

/// (first name, last name, day of birth, email)
const SEED_ROWS: [(&str, &str, &str, &str); SEED_USER_COUNT] = [
    ("Ivan", "Petrov", "1985-03-14", "ivan.petrov@example.com"),
    ("Anna", "Smirnova", "1990-07-02", "anna.smirnova@example.com"),
    ("Sergey", "Kuznetsov", "1978-11-23", "sergey.kuznetsov@example.com"),
    ("Olga", "Popova", "1995-01-30", "olga.popova@example.com"),
    ("Dmitry", "Vasiliev", "1982-05-09", "dmitry.vasiliev@example.com"),
    ("Elena", "Sokolova", "1988-09-17", "elena.sokolova@example.com"),
    ("Alexey", "Mikhailov", "1975-12-01", "alexey.mikhailov@example.com"),
    ("Maria", "Novikova", "1999-04-25", "maria.novikova@example.com"),
    ("Pavel", "Fedorov", "1983-08-11", "pavel.fedorov@example.com"),
    ("Natalia", "Morozova", "1992-02-28", "natalia.morozova@example.com"),
    ("Andrey", "Volkov", "1980-06-06", "andrey.volkov@example.com"),
    ("Tatiana", "Alekseeva", "1987-10-19", "tatiana.alekseeva@example.com"),
    ("Mikhail", "Lebedev", "1993-03-03", "mikhail.lebedev@example.com"),
    ("Irina", "Semenova", "1979-07-21", "irina.semenova@example.com"),
    ("Nikolai", "Egorov", "1991-11-08", "nikolai.egorov@example.com"),
    ("Svetlana", "Pavlova", "1986-12-24", "svetlana.pavlova@example.com"),
    ("Viktor", "Kozlov", "1977-04-12", "viktor.kozlov@example.com"),
    ("Ekaterina", "Stepanova", "1996-09-05", "ekaterina.stepanova@example.com"),
    ("Yuri", "Nikolaev", "1984-01-16", "yuri.nikolaev@example.com"),
    ("Galina", "Orlova", "1989-05-29", "galina.orlova@example.com"),
];

/// The seed users, with ids `1..=SEED_USER_COUNT`.
pub fn seed_users() -> Result<Vec<User>, ValidationError> {
    SEED_ROWS
        .iter()
        .zip(1u64..)
        .map(|(&(first, last, born, email), id)| {
            let day_of_birth = NaiveDate::parse_from_str(born, DATE_FORMAT)
                .map_err(|_| ValidationError::invalid_date("dayOfBirth", born))?;
            let details = UserDetails::new(first, last, day_of_birth, email)?;
            Ok(User::new(UserId::new(id), details))
        })
        .collect()
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
