// Mock route definition: method filter, URL matcher, canned response
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use regex::Regex;
use serde_json::Value;

use crate::error::{HarnessError, HarnessResult};

/// HTTP methods a mock route can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl MockMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Parse from the upper-case wire form.
    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for MockMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a mock route applies to a request URL.
#[derive(Debug, Clone)]
pub enum UrlMatcher {
    /// Substring containment against the full request URL.
    Exact(String),
    /// Regex test against the full request URL.
    Pattern(Regex),
}

impl UrlMatcher {
    pub fn exact(fragment: impl Into<String>) -> Self {
        Self::Exact(fragment.into())
    }

    /// Compile a regex matcher. Invalid patterns are configuration errors.
    pub fn pattern(pattern: &str) -> HarnessResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|err| HarnessError::config(format!("invalid route pattern: {err}")))?;
        Ok(Self::Pattern(regex))
    }

    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(fragment) => url.contains(fragment),
            Self::Pattern(regex) => regex.is_match(url),
        }
    }

    /// Stable key text used for the one-entry-per-(method, matcher)
    /// invariant.
    pub(crate) fn key(&self) -> &str {
        match self {
            Self::Exact(fragment) => fragment,
            Self::Pattern(regex) => regex.as_str(),
        }
    }
}

/// A canned HTTP response registered for a (method, matcher) pair.
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub method: MockMethod,
    pub matcher: UrlMatcher,
    pub status: u16,
    pub body: Value,
    pub headers: Option<HashMap<String, String>>,
    pub delay: Option<Duration>,
}

impl MockRoute {
    pub fn new(method: MockMethod, matcher: UrlMatcher, status: u16, body: Value) -> Self {
        Self { method, matcher, status, body, headers: None, delay: None }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Simulated network latency applied before responding.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Registry key: one entry per distinct (method, matcher) pair.
    pub(crate) fn key(&self) -> (MockMethod, &str) {
        (self.method, self.matcher.key())
    }

    /// Produce the canned response, waiting out the simulated delay first.
    pub async fn respond(&self) -> MockResponse {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        MockResponse {
            status: self.status,
            headers: self.headers.clone().unwrap_or_default(),
            body: self.body.to_string(),
        }
    }
}

/// The wire shape a mock emulates: status, headers, JSON text body.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}
