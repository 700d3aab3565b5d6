// Per-test session state, passed explicitly instead of living in a global
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::{Credentials, TestUser};

const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// The "current test user" for a single test case.
///
/// Deliberately not a process-wide singleton: each test creates its own
/// context in setup and drops it at teardown, so no state leaks across
/// cases.
#[derive(Debug)]
pub struct SessionContext {
    user: Option<TestUser>,
    login_time: Option<DateTime<Utc>>,
    session_id: Option<Uuid>,
    session_timeout: Duration,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            user: None,
            login_time: None,
            session_id: None,
            session_timeout: DEFAULT_SESSION_TIMEOUT,
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the inactivity window after which the session counts as
    /// expired.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }

    /// Record a login; returns the session id assigned to it.
    pub fn login(&mut self, user: TestUser) -> Uuid {
        let session_id = Uuid::new_v4();
        debug!(email = %user.email, %session_id, "test user logged in");
        self.user = Some(user);
        self.login_time = Some(Utc::now());
        self.session_id = Some(session_id);
        session_id
    }

    /// Drop the current login, if any.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            debug!(email = %user.email, "test user logged out");
        }
        self.login_time = None;
        self.session_id = None;
    }

    /// The logged-in user, or `None` if there is no session or it has
    /// expired (expiry logs the user out).
    pub fn current_user(&mut self) -> Option<&TestUser> {
        if self.is_expired() {
            self.logout();
        }
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some() && !self.is_expired()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    /// Credentials of the current user, if a live session exists.
    pub fn credentials(&mut self) -> Option<Credentials> {
        self.current_user().map(TestUser::credentials)
    }

    /// Time elapsed since login.
    pub fn session_age(&self) -> Duration {
        self.login_time
            .map(|at| (Utc::now() - at).to_std().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Reset everything, regardless of expiry.
    pub fn clear(&mut self) {
        self.user = None;
        self.login_time = None;
        self.session_id = None;
    }

    fn is_expired(&self) -> bool {
        match self.login_time {
            Some(at) => (Utc::now() - at).to_std().unwrap_or_default() > self.session_timeout,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::UserFactory;

    #[test]
    fn login_assigns_session_id_and_user() {
        let mut factory = UserFactory::new();
        let user = factory.create();
        let email = user.email.clone();

        let mut session = SessionContext::new();
        assert!(!session.is_logged_in());

        let session_id = session.login(user);
        assert!(session.is_logged_in());
        assert_eq!(session.session_id(), Some(session_id));
        assert_eq!(session.current_user().map(|u| u.email.clone()), Some(email));
    }

    #[test]
    fn logout_clears_everything() {
        let mut factory = UserFactory::new();
        let mut session = SessionContext::new();
        session.login(factory.create());

        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
        assert!(session.session_id().is_none());
        assert_eq!(session.session_age(), Duration::ZERO);
    }

    #[test]
    fn expired_session_reports_no_user() {
        let mut factory = UserFactory::new();
        let mut session = SessionContext::new().with_timeout(Duration::ZERO);
        session.login(factory.create());

        // Zero timeout: expired as soon as any time passes
        std::thread::sleep(Duration::from_millis(5));
        assert!(session.current_user().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn credentials_come_from_the_live_session() {
        let mut factory = UserFactory::new();
        let user = factory.create();
        let expected = user.credentials();

        let mut session = SessionContext::new();
        session.login(user);
        assert_eq!(session.credentials(), Some(expected));

        session.clear();
        assert_eq!(session.credentials(), None);
    }
}
