// In-memory HTTP mocking: canned routes answered in place of the network

pub mod fixtures;
pub mod registry;
pub mod route;

pub use registry::RouteRegistry;
pub use route::{MockMethod, MockResponse, MockRoute, UrlMatcher};
