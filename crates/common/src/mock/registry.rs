// Insertion-ordered store of mock routes
use tracing::debug;

use crate::mock::route::{MockMethod, MockRoute};

/// Registry of mock routes, scanned in insertion order.
///
/// Invariants:
/// - At most one entry per distinct (method, matcher) pair; re-adding the
///   same pair replaces the entry in place, keeping its original position.
/// - When several routes could match a request, the first-registered one
///   wins.
///
/// Not synchronized. The expected usage is one registry per test case,
/// created in setup and discarded at teardown; do not share an instance
/// across concurrently running cases.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<MockRoute>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Never fails; an existing route with the same
    /// (method, matcher) key is overwritten.
    pub fn add_route(&mut self, route: MockRoute) {
        if let Some(existing) = self.routes.iter_mut().find(|r| r.key() == route.key()) {
            debug!(method = %route.method, matcher = route.matcher.key(), "overwriting mock route");
            *existing = route;
        } else {
            self.routes.push(route);
        }
    }

    /// Register a whole fixture set at once.
    pub fn add_routes(&mut self, routes: impl IntoIterator<Item = MockRoute>) {
        for route in routes {
            self.add_route(route);
        }
    }

    /// First-registered route matching the request, if any. Absence is a
    /// valid outcome (the caller falls through to the real transport), not
    /// an error.
    pub fn match_route(&self, method: MockMethod, url: &str) -> Option<&MockRoute> {
        self.routes.iter().find(|route| route.method == method && route.matcher.matches(url))
    }

    /// Remove every registered route.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
