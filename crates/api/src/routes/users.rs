//! User CRUD route handlers.
//!
//! Each handler is one synchronous request/response exchange against the
//! record store. There is no field validation at this layer - empty strings
//! are accepted, presence checks belong to the form UI.

use axum::{Json, extract::Path, extract::State};
use serde::Serialize;
use tracing::instrument;

use rolodex_core::{NewUser, UserId, UserPatch, UserRecord};

use crate::db::UserRepository;
use crate::error::Result;
use crate::state::AppState;

/// Confirmation body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteReceipt {
    pub message: String,
}

/// List all records, in store-defined order.
///
/// GET /users
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Create a record; the store assigns the id.
///
/// POST /users
#[instrument(skip(state), fields(name = %payload.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<UserRecord>> {
    let user = UserRepository::new(state.pool()).create(&payload).await?;
    tracing::info!(id = %user.id, "user created");
    Ok(Json(user))
}

/// Replace the fields present in the payload on an existing record.
///
/// PUT /users/{id}
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserRecord>> {
    let user = UserRepository::new(state.pool()).update(id, &patch).await?;
    tracing::info!(id = %user.id, "user updated");
    Ok(Json(user))
}

/// Remove a record permanently.
///
/// DELETE /users/{id}
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<DeleteReceipt>> {
    UserRepository::new(state.pool()).delete(id).await?;
    tracing::info!(%id, "user deleted");
    Ok(Json(DeleteReceipt {
        message: "user deleted".to_owned(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_receipt_shape() {
        let receipt = DeleteReceipt {
            message: "user deleted".to_owned(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["message"], "user deleted");
    }
}
