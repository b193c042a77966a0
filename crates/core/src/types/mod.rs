//! Domain types shared between the API service and the UI.

mod id;
mod record;

pub use id::UserId;
pub use record::{NewUser, UserPatch, UserRecord};
