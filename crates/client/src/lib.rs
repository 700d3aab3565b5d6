//! API-harness layer for the AutomationExercise demo store.
//!
//! Wraps the store's REST API behind a typed client with optional mock
//! interception, plus the per-test plumbing the harness needs: env-driven
//! configuration, endpoint controllers, a session context, and test-data
//! factories.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod builders;
pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod factories;
pub mod models;
pub mod response;
pub mod session;

pub use builders::UserAccountBuilder;
pub use client::{ApiClient, ApiClientBuilder, MockMode};
pub use config::HarnessConfig;
pub use error::{ClientError, ClientResult};
pub use factories::UserFactory;
pub use models::{Credentials, TestUser};
pub use response::{ApiResponse, ParsedBody};
pub use session::SessionContext;
