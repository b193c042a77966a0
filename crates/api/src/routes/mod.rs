//! HTTP route handlers for the API service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health        - Liveness check (in main.rs)
//! GET    /health/ready  - Readiness check, probes the database (in main.rs)
//!
//! # Users
//! GET    /users         - List all records
//! POST   /users         - Create a record
//! PUT    /users/{id}    - Update a record (404 if absent)
//! DELETE /users/{id}    - Delete a record (404 if absent)
//! ```

pub mod users;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        .route("/{id}", put(users::update).delete(users::remove))
}

/// Create all routes for the API service.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/users", user_routes())
}
