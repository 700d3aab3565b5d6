// Test-data factories: unique, valid-by-default account payloads
use chrono::Utc;
use rand::Rng;

use crate::models::{Credentials, TestUser};

/// Account scenarios the factory can prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserScenario {
    /// Well-formed account with a unique email.
    Valid,
    /// Malformed email and an under-length password.
    Invalid,
    /// Fixed email that already exists upstream.
    Existing,
}

/// Factory for [`TestUser`] payloads.
///
/// Emails combine a millisecond timestamp, a per-factory sequence number,
/// and a random suffix so parallel test runs never collide.
#[derive(Debug, Default)]
pub struct UserFactory {
    sequence: u32,
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a unique, valid test user.
    pub fn create(&mut self) -> TestUser {
        let suffix = rand::thread_rng().gen_range(0..1000);
        let email = self.unique_email("user");
        TestUser {
            name: format!("Test User {suffix}"),
            email,
            password: "testpassword123".to_string(),
            title: "Mr".to_string(),
            birth_date: "15".to_string(),
            birth_month: "January".to_string(),
            birth_year: "1990".to_string(),
            firstname: "Test".to_string(),
            lastname: format!("User{suffix}"),
            company: "Test Company Inc.".to_string(),
            address1: "123 Test Street".to_string(),
            address2: "Apt 4B".to_string(),
            country: "United States".to_string(),
            zipcode: "12345".to_string(),
            state: "California".to_string(),
            city: "Test City".to_string(),
            mobile_number: "+1234567890".to_string(),
        }
    }

    /// Create several users at once.
    pub fn create_many(&mut self, count: usize) -> Vec<TestUser> {
        (0..count).map(|_| self.create()).collect()
    }

    /// Login credentials for a fresh user.
    pub fn credentials(&mut self) -> Credentials {
        self.create().credentials()
    }

    /// Create a user shaped for a specific test scenario.
    pub fn create_for_scenario(&mut self, scenario: UserScenario) -> TestUser {
        match scenario {
            UserScenario::Valid => self.create(),
            UserScenario::Invalid => {
                let mut user = self.create();
                user.email = "invalid-email".to_string();
                user.password = "123".to_string();
                user
            }
            UserScenario::Existing => {
                let mut user = self.create();
                user.email = "existing.user@example.com".to_string();
                user
            }
        }
    }

    fn unique_email(&mut self, prefix: &str) -> String {
        let sequence = self.sequence;
        self.sequence += 1;
        let random: u32 = rand::thread_rng().gen_range(0..1000);
        format!("{prefix}.{}.{sequence}.{random}@example.com", Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn created_users_have_unique_emails() {
        let mut factory = UserFactory::new();
        let emails: HashSet<String> =
            factory.create_many(50).into_iter().map(|user| user.email).collect();
        assert_eq!(emails.len(), 50);
    }

    #[test]
    fn valid_scenario_passes_basic_shape_checks() {
        let mut factory = UserFactory::new();
        let user = factory.create_for_scenario(UserScenario::Valid);
        assert!(user.email.contains('@'));
        assert!(user.password.len() >= 8);
    }

    #[test]
    fn invalid_scenario_breaks_email_and_password() {
        let mut factory = UserFactory::new();
        let user = factory.create_for_scenario(UserScenario::Invalid);
        assert!(!user.email.contains('@'));
        assert!(user.password.len() < 8);
    }

    #[test]
    fn existing_scenario_uses_the_fixed_email() {
        let mut factory = UserFactory::new();
        let user = factory.create_for_scenario(UserScenario::Existing);
        assert_eq!(user.email, "existing.user@example.com");
    }
}
