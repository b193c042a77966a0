//! The record-store seam behind the client state.
//!
//! The UI ships in two versions that share all state and form code: a purely
//! in-memory one ([`LocalStore`]) and one synced against the API service
//! ([`RemoteStore`]). [`Backend`] picks between them at startup based on
//! configuration.

use std::sync::Mutex;

use rolodex_core::{NewUser, UserId, UserPatch, UserRecord};

use crate::api::{ApiClient, ApiError};

/// The four operations the client state needs from a record store.
pub trait RecordStore {
    /// Fetch all records.
    fn list(&self) -> impl Future<Output = Result<Vec<UserRecord>, ApiError>> + Send;
    /// Create a record; the store assigns the id.
    fn create(&self, new_user: NewUser) -> impl Future<Output = Result<UserRecord, ApiError>> + Send;
    /// Replace the fields present in the patch; `NotFound` if the id is absent.
    fn update(
        &self,
        id: UserId,
        patch: UserPatch,
    ) -> impl Future<Output = Result<UserRecord, ApiError>> + Send;
    /// Remove a record; `NotFound` if the id is absent.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Purely in-memory record store. Records are lost on restart.
///
/// Ids are generated locally since there is no database to assign them.
#[derive(Debug, Default)]
pub struct LocalStore {
    records: Mutex<Vec<UserRecord>>,
}

impl LocalStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a panic elsewhere; the Vec itself is fine.
    fn records(&self) -> std::sync::MutexGuard<'_, Vec<UserRecord>> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RecordStore for LocalStore {
    async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        Ok(self.records().clone())
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, ApiError> {
        let record = UserRecord {
            id: UserId::generate(),
            name: new_user.name,
            email: new_user.email,
        };
        self.records().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<UserRecord, ApiError> {
        let mut records = self.records();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound)?;
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        let mut records = self.records();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

/// Record store synced against the API service.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: ApiClient,
}

impl RemoteStore {
    /// Wrap an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl RecordStore for RemoteStore {
    async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.client.list_users().await
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, ApiError> {
        self.client.create_user(&new_user).await
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<UserRecord, ApiError> {
        self.client.update_user(id, &patch).await
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}

/// The store variant selected at startup.
#[derive(Debug)]
pub enum Backend {
    Local(LocalStore),
    Remote(RemoteStore),
}

impl RecordStore for Backend {
    async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        match self {
            Self::Local(store) => store.list().await,
            Self::Remote(store) => store.list().await,
        }
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, ApiError> {
        match self {
            Self::Local(store) => store.create(new_user).await,
            Self::Remote(store) => store.create(new_user).await,
        }
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<UserRecord, ApiError> {
        match self {
            Self::Local(store) => store.update(id, patch).await,
            Self::Remote(store) => store.update(id, patch).await,
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        match self {
            Self::Local(store) => store.delete(id).await,
            Self::Remote(store) => store.delete(id).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_store_crud() {
        let store = LocalStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let created = store
            .create(NewUser {
                name: "A".to_owned(),
                email: "a@x.com".to_owned(),
            })
            .await
            .unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);

        let updated = store
            .update(created.id, UserPatch::full("B", "b@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "B");

        store.delete(created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_local_store_absent_id_is_not_found() {
        let store = LocalStore::new();
        let id = UserId::generate();

        assert!(matches!(
            store.update(id, UserPatch::default()).await,
            Err(ApiError::NotFound)
        ));
        assert!(matches!(store.delete(id).await, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_local_store_partial_patch() {
        let store = LocalStore::new();
        let created = store
            .create(NewUser {
                name: "A".to_owned(),
                email: "a@x.com".to_owned(),
            })
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                UserPatch {
                    email: Some("b@x.com".to_owned()),
                    ..UserPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "A");
        assert_eq!(updated.email, "b@x.com");
    }
}
