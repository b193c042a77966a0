//! HTTP route handlers for the form UI.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Directory page (table + overlay + notice)
//! POST /refresh             - Re-fetch the record list
//! POST /editor/new          - Open the overlay with an empty draft
//! POST /editor/{id}/edit    - Open the overlay preloaded from a record
//! POST /editor/cancel       - Close the overlay, discarding the draft
//! POST /editor/save         - Submit the overlay form (create or update)
//! POST /users/{id}/delete   - Delete a record
//! ```

pub mod directory;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the editor routes router.
pub fn editor_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(directory::open_create))
        .route("/{id}/edit", post(directory::open_edit))
        .route("/cancel", post(directory::cancel))
        .route("/save", post(directory::save))
}

/// Create all routes for the UI.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(directory::page))
        .route("/refresh", post(directory::refresh))
        .nest("/editor", editor_routes())
        .route("/users/{id}/delete", post(directory::delete))
}
