//! Integration tests for Rolodex.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database, apply migrations, start the API
//! cargo run -p rolodex-cli -- migrate
//! cargo run -p rolodex-api &
//!
//! # Run the ignored end-to-end tests
//! cargo test -p rolodex-integration-tests -- --ignored
//! ```
//!
//! Tests live in `tests/` and are `#[ignore]`d by default because they need
//! a running API service and database.

use reqwest::Client;

/// Base URL for the API service (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("DIRECTORY_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Build the HTTP client used by the tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
