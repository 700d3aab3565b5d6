// Domain models for the store's user account API
use serde::{Deserialize, Serialize};
use shopharness_common::{HarnessError, HarnessResult};

/// Titles the account endpoints accept.
pub const ACCEPTED_TITLES: &[&str] = &["Mr", "Mrs", "Miss"];

/// Login credentials for the demo store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Check the pair is sendable: a well-formed email and a non-empty
    /// password.
    pub fn validate(&self) -> HarnessResult<()> {
        let mut problems = Vec::new();
        if !is_plausible_email(&self.email) {
            problems.push(format!("email: '{}' is not a valid email address", self.email));
        }
        if self.password.is_empty() {
            problems.push("password: must not be empty".to_string());
        }
        check(problems)
    }
}

/// Full account payload accepted by `POST /createAccount` and returned by
/// `GET /getUserDetailByEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Mr, Mrs, or Miss.
    pub title: String,
    pub birth_date: String,
    pub birth_month: String,
    pub birth_year: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub company: String,
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    pub country: String,
    pub zipcode: String,
    pub state: String,
    pub city: String,
    pub mobile_number: String,
}

impl TestUser {
    /// Credentials pair for this user.
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }

    /// Check the payload against the account endpoints' rules before it is
    /// sent: well-formed email, password of at least 8 characters, a known
    /// title, a 1-2 digit birth date, a 4-digit birth year, and every
    /// required field non-empty. `company` and `address2` may be blank.
    pub fn validate(&self) -> HarnessResult<()> {
        let mut problems = Vec::new();

        if !is_plausible_email(&self.email) {
            problems.push(format!("email: '{}' is not a valid email address", self.email));
        }
        if self.password.len() < 8 {
            problems.push("password: must be at least 8 characters".to_string());
        }
        if !ACCEPTED_TITLES.contains(&self.title.as_str()) {
            problems.push(format!("title: '{}' must be one of Mr, Mrs, Miss", self.title));
        }
        if !is_digits(&self.birth_date, 1, 2) {
            problems.push(format!("birth_date: '{}' must be 1-2 digits", self.birth_date));
        }
        if !is_digits(&self.birth_year, 4, 4) {
            problems.push(format!("birth_year: '{}' must be a 4-digit year", self.birth_year));
        }

        for (name, value) in [
            ("name", &self.name),
            ("birth_month", &self.birth_month),
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("address1", &self.address1),
            ("country", &self.country),
            ("zipcode", &self.zipcode),
            ("state", &self.state),
            ("city", &self.city),
            ("mobile_number", &self.mobile_number),
        ] {
            if value.is_empty() {
                problems.push(format!("{name}: must not be empty"));
            }
        }

        check(problems)
    }

    /// Form-encoded field list for the account endpoints.
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("title", self.title.clone()),
            ("birth_date", self.birth_date.clone()),
            ("birth_month", self.birth_month.clone()),
            ("birth_year", self.birth_year.clone()),
            ("firstname", self.firstname.clone()),
            ("lastname", self.lastname.clone()),
            ("company", self.company.clone()),
            ("address1", self.address1.clone()),
            ("address2", self.address2.clone()),
            ("country", self.country.clone()),
            ("zipcode", self.zipcode.clone()),
            ("state", self.state.clone()),
            ("city", self.city.clone()),
            ("mobile_number", self.mobile_number.clone()),
        ]
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && domain.len() >= 3,
        None => false,
    }
}

fn is_digits(value: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

fn check(problems: Vec<String>) -> HarnessResult<()> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::validation(problems.join("; ")))
    }
}
