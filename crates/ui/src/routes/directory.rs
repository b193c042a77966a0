//! Directory page handlers.
//!
//! Every intent handler follows the same cycle: lock the client state,
//! dispatch one command, render the page from the new state. Store failures
//! never bubble out of dispatch - they land in the notice banner - so these
//! handlers are infallible.

use axum::{Form, extract::Path, extract::State};
use serde::Deserialize;
use tracing::instrument;

use rolodex_core::UserId;

use crate::client::{Command, Draft};
use crate::state::AppState;
use crate::view::DirectoryPage;

/// Overlay form data.
#[derive(Debug, Deserialize)]
pub struct DraftForm {
    pub name: String,
    pub email: String,
}

/// Render the directory page.
///
/// GET /
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> DirectoryPage {
    let client = state.client().await;
    DirectoryPage::from(&*client)
}

/// Re-fetch the record list.
///
/// POST /refresh
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> DirectoryPage {
    dispatch(&state, Command::Refresh).await
}

/// Open the overlay with an empty draft.
///
/// POST /editor/new
#[instrument(skip(state))]
pub async fn open_create(State(state): State<AppState>) -> DirectoryPage {
    dispatch(&state, Command::OpenCreate).await
}

/// Open the overlay preloaded from a record.
///
/// POST /editor/{id}/edit
#[instrument(skip(state))]
pub async fn open_edit(State(state): State<AppState>, Path(id): Path<UserId>) -> DirectoryPage {
    dispatch(&state, Command::OpenEdit(id)).await
}

/// Close the overlay, discarding the draft.
///
/// POST /editor/cancel
#[instrument(skip(state))]
pub async fn cancel(State(state): State<AppState>) -> DirectoryPage {
    dispatch(&state, Command::Cancel).await
}

/// Submit the overlay form.
///
/// POST /editor/save
#[instrument(skip(state), fields(name = %form.name))]
pub async fn save(State(state): State<AppState>, Form(form): Form<DraftForm>) -> DirectoryPage {
    dispatch(
        &state,
        Command::Save(Draft {
            name: form.name,
            email: form.email,
        }),
    )
    .await
}

/// Delete a record.
///
/// POST /users/{id}/delete
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<UserId>) -> DirectoryPage {
    dispatch(&state, Command::Delete(id)).await
}

async fn dispatch(state: &AppState, command: Command) -> DirectoryPage {
    let mut client = state.client().await;
    client.dispatch(command, state.store()).await;
    DirectoryPage::from(&*client)
}
