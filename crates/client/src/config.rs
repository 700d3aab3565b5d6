// Environment-driven harness configuration with an explicit validation pass
use std::time::Duration;

use shopharness_common::{HarnessError, HarnessResult};
use url::Url;

const DEFAULT_BASE_URL: &str = "https://automationexercise.com";
const DEFAULT_API_BASE_URL: &str = "https://automationexercise.com/api";
const DEFAULT_TEST_EMAIL: &str = "test.user@example.com";
const DEFAULT_TEST_PASSWORD: &str = "testpassword123";
const DEFAULT_TEST_USERNAME: &str = "TestUser";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated harness configuration.
///
/// Values come from the process environment (after a best-effort `.env`
/// load) with working defaults for every variable, so a bare checkout can
/// run against the public demo site.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: Url,
    pub api_base_url: Url,
    pub test_email: String,
    pub test_password: String,
    pub test_username: String,
    pub request_timeout: Duration,
    pub ci: bool,
}

impl HarnessConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> HarnessResult<Self> {
        // Missing .env file is fine; real env vars still apply
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Split out from
    /// [`from_env`](Self::from_env) so validation is testable without
    /// mutating process state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HarnessResult<Self> {
        let base_url = parse_url("BASE_URL", &var_or(&lookup, "BASE_URL", DEFAULT_BASE_URL))?;
        let api_base_url =
            parse_url("API_BASE_URL", &var_or(&lookup, "API_BASE_URL", DEFAULT_API_BASE_URL))?;

        let test_email = var_or(&lookup, "TEST_EMAIL", DEFAULT_TEST_EMAIL);
        if !test_email.contains('@') {
            return Err(HarnessError::config(format!(
                "TEST_EMAIL: '{test_email}' is not a valid email address"
            )));
        }

        let test_password = var_or(&lookup, "TEST_PASSWORD", DEFAULT_TEST_PASSWORD);
        if test_password.len() < 8 {
            return Err(HarnessError::config(
                "TEST_PASSWORD: must be at least 8 characters",
            ));
        }

        let test_username = var_or(&lookup, "TEST_USERNAME", DEFAULT_TEST_USERNAME);
        if test_username.len() < 3 {
            return Err(HarnessError::config(
                "TEST_USERNAME: must be at least 3 characters",
            ));
        }

        let request_timeout = match lookup("REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let millis: u64 = raw.parse().map_err(|_| {
                    HarnessError::config(format!(
                        "REQUEST_TIMEOUT_MS: '{raw}' is not a valid duration in milliseconds"
                    ))
                })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let ci = lookup("CI").is_some_and(|value| !value.is_empty());

        Ok(Self {
            base_url,
            api_base_url,
            test_email,
            test_password,
            test_username,
            request_timeout,
            ci,
        })
    }

    /// Test credentials as a pair.
    pub fn test_credentials(&self) -> (String, String) {
        (self.test_email.clone(), self.test_password.clone())
    }
}

fn var_or(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name).filter(|value| !value.is_empty()).unwrap_or_else(|| default.to_string())
}

fn parse_url(name: &str, value: &str) -> HarnessResult<Url> {
    Url::parse(value)
        .map_err(|err| HarnessError::config(format!("{name}: '{value}' is not a valid URL: {err}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |name| map.get(name).map(|v| (*v).to_string())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = HarnessConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url.as_str(), "https://automationexercise.com/");
        assert_eq!(config.api_base_url.as_str(), "https://automationexercise.com/api");
        assert_eq!(config.test_email, "test.user@example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.ci);
    }

    #[test]
    fn invalid_url_is_rejected_with_variable_name() {
        let err = HarnessConfig::from_lookup(lookup_from(&[("API_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains("API_BASE_URL"));
    }

    #[test]
    fn short_password_is_rejected() {
        let err =
            HarnessConfig::from_lookup(lookup_from(&[("TEST_PASSWORD", "short")])).unwrap_err();
        assert!(err.to_string().contains("TEST_PASSWORD"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err =
            HarnessConfig::from_lookup(lookup_from(&[("TEST_EMAIL", "invalid-email")]))
                .unwrap_err();
        assert!(err.to_string().contains("TEST_EMAIL"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = HarnessConfig::from_lookup(lookup_from(&[
            ("API_BASE_URL", "http://localhost:8080/api"),
            ("REQUEST_TIMEOUT_MS", "5000"),
            ("CI", "1"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/api");
        assert_eq!(config.request_timeout, Duration::from_millis(5000));
        assert!(config.ci);
    }
}
