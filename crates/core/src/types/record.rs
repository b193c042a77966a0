//! The user record and its request payloads.

use serde::{Deserialize, Serialize};

use super::UserId;

/// One user entry in the directory.
///
/// A record either exists with both fields populated or does not exist at
/// all; there are no partial or tombstoned states. `name` and `email` are
/// free text - presence is enforced by the form UI, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct UserRecord {
    /// Store-assigned identifier, immutable after creation.
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Payload for creating a record.
///
/// Any `id` the client sends along is dropped during deserialization; the
/// store assigns the real one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial-or-full payload for updating a record.
///
/// Present fields replace the stored values wholesale; absent fields are
/// left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    /// A patch that replaces both fields.
    #[must_use]
    pub fn full(name: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
        }
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_shape() {
        let record = UserRecord {
            id: UserId::generate(),
            name: "A".to_owned(),
            email: "a@x.com".to_owned(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["email"], "a@x.com");
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_new_user_ignores_client_supplied_id() {
        let payload: NewUser =
            serde_json::from_str(r#"{"id": "1234", "name": "A", "email": "a@x.com"}"#).unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.email, "a@x.com");
    }

    #[test]
    fn test_patch_defaults_to_absent_fields() {
        let patch: UserPatch = serde_json::from_str(r#"{"email": "b@x.com"}"#).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.email.as_deref(), Some("b@x.com"));

        let empty: UserPatch = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_patch_skips_absent_fields_on_serialize() {
        let patch = UserPatch {
            name: Some("B".to_owned()),
            email: None,
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"name":"B"}"#);
    }
}
