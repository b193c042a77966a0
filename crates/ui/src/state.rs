//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::ClientState;
use crate::store::Backend;

/// Application state shared across all handlers.
///
/// The client state sits behind a mutex: handlers lock it, dispatch one
/// command, and render the page from the result. Locking also serializes
/// store requests, so at most one is outstanding at a time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    client: Mutex<ClientState>,
    store: Backend,
}

impl AppState {
    /// Create a new application state around a store backend.
    #[must_use]
    pub fn new(client: ClientState, store: Backend) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                client: Mutex::new(client),
                store,
            }),
        }
    }

    /// Lock the client state for one dispatch-and-render cycle.
    pub async fn client(&self) -> tokio::sync::MutexGuard<'_, ClientState> {
        self.inner.client.lock().await
    }

    /// Get a reference to the record store backend.
    #[must_use]
    pub fn store(&self) -> &Backend {
        &self.inner.store
    }
}
