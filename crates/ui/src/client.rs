//! Client state: the record list plus the edit-in-progress form.
//!
//! All user intents arrive as explicit [`Command`] values and are applied by
//! [`ClientState::dispatch`]. The state machine is:
//!
//! ```text
//! Idle --OpenCreate--> Creating (empty draft, editing = None)
//! Idle --OpenEdit----> Editing  (draft preloaded,  editing = Some(id))
//! Creating/Editing --Cancel or successful Save--> Idle
//! Delete runs directly from Idle, never through the draft.
//! ```
//!
//! Save with no editing id creates; with an editing id it updates. A
//! successful result is merged into the local list without a re-fetch. Any
//! store failure surfaces as a [`Notice`] and leaves the state at its
//! pre-action value, except `loading`, which is always cleared.

use core::fmt;

use rolodex_core::{NewUser, UserId, UserPatch, UserRecord};

use crate::store::RecordStore;

/// Transient copy of a record's editable fields while the overlay is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    /// Presence check: both fields must be non-empty to save.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// The open edit overlay: a draft plus the record it edits, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub draft: Draft,
    /// `None` while creating, `Some` while editing an existing record.
    pub editing: Option<UserId>,
}

/// A user intent dispatched from the form UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-fetch the record list from the store.
    Refresh,
    /// Open the overlay with an empty draft.
    OpenCreate,
    /// Open the overlay with a draft preloaded from the given record.
    OpenEdit(UserId),
    /// Close the overlay, discarding the draft.
    Cancel,
    /// Submit the overlay form. Creates or updates depending on the editor.
    Save(Draft),
    /// Remove a record. Not mediated by the draft state.
    Delete(UserId),
}

/// Synchronous user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A required field was empty; no request was issued.
    AllFieldsRequired,
    /// A store operation failed; state is unchanged.
    RequestFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllFieldsRequired => write!(f, "All fields are required"),
            Self::RequestFailed(message) => write!(f, "Request failed: {message}"),
        }
    }
}

/// The record list, loading flag, active draft and last notice.
#[derive(Debug, Default)]
pub struct ClientState {
    users: Vec<UserRecord>,
    loading: bool,
    editor: Option<Editor>,
    notice: Option<Notice>,
}

impl ClientState {
    /// Fresh state with an empty list and closed overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current record list.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The open overlay, if any.
    #[must_use]
    pub const fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// The notification from the last action, if it produced one.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Apply one user intent, talking to the store where needed.
    ///
    /// At most one store request is issued per call. The loading flag is an
    /// advisory guard only; it does not hard-block a concurrent submission
    /// (the UI disables its controls while loading, which is the only
    /// protection against duplicates).
    pub async fn dispatch<S: RecordStore>(&mut self, command: Command, store: &S) {
        self.notice = None;

        match command {
            Command::Refresh => self.refresh(store).await,
            Command::OpenCreate => {
                self.editor = Some(Editor {
                    draft: Draft::default(),
                    editing: None,
                });
            }
            Command::OpenEdit(id) => self.open_edit(id),
            Command::Cancel => self.editor = None,
            Command::Save(draft) => self.save(draft, store).await,
            Command::Delete(id) => self.delete(id, store).await,
        }
    }

    async fn refresh<S: RecordStore>(&mut self, store: &S) {
        self.begin_request();
        match store.list().await {
            Ok(users) => self.users = users,
            Err(e) => self.notice = Some(Notice::RequestFailed(e.to_string())),
        }
        self.loading = false;
    }

    fn open_edit(&mut self, id: UserId) {
        let Some(record) = self.users.iter().find(|u| u.id == id) else {
            // Stale row (record vanished between renders); nothing to edit.
            tracing::warn!(%id, "edit requested for unknown record");
            return;
        };
        self.editor = Some(Editor {
            draft: Draft {
                name: record.name.clone(),
                email: record.email.clone(),
            },
            editing: Some(id),
        });
    }

    async fn save<S: RecordStore>(&mut self, draft: Draft, store: &S) {
        // Keep the submitted values in the overlay so a failed save does not
        // throw away what the user typed.
        let editing = match self.editor.as_mut() {
            Some(editor) => {
                editor.draft = draft.clone();
                editor.editing
            }
            // Overlay already closed; treat the submission as a create.
            None => None,
        };

        // Rejected locally, no network call.
        if !draft.is_complete() {
            self.notice = Some(Notice::AllFieldsRequired);
            return;
        }

        self.begin_request();
        let outcome = match editing {
            None => {
                let new_user = NewUser {
                    name: draft.name,
                    email: draft.email,
                };
                store.create(new_user).await.map(|record| {
                    self.users.push(record);
                })
            }
            Some(id) => store
                .update(id, UserPatch::full(&draft.name, &draft.email))
                .await
                .map(|record| {
                    // Replace in place: same position, never a duplicate.
                    if let Some(existing) = self.users.iter_mut().find(|u| u.id == id) {
                        *existing = record;
                    } else {
                        self.users.push(record);
                    }
                }),
        };

        match outcome {
            Ok(()) => self.editor = None,
            Err(e) => self.notice = Some(Notice::RequestFailed(e.to_string())),
        }
        self.loading = false;
    }

    async fn delete<S: RecordStore>(&mut self, id: UserId, store: &S) {
        self.begin_request();
        match store.delete(id).await {
            Ok(()) => self.users.retain(|u| u.id != id),
            Err(e) => self.notice = Some(Notice::RequestFailed(e.to_string())),
        }
        self.loading = false;
    }

    fn begin_request(&mut self) {
        if self.loading {
            tracing::warn!("dispatching while a request is already outstanding");
        }
        self.loading = true;
    }
}
