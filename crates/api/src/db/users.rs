//! User repository for database operations.
//!
//! Queries use the runtime sqlx API; `UserRecord` derives `FromRow` in the
//! core crate (behind its `postgres` feature) so rows map straight into the
//! shared type.

use sqlx::PgPool;

use rolodex_core::{NewUser, UserId, UserPatch, UserRecord};

use super::RepositoryError;

/// Repository for user record operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all records.
    ///
    /// No ORDER BY on purpose: callers get store-defined order and must not
    /// rely on it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        let users = sqlx::query_as::<_, UserRecord>("SELECT id, name, email FROM directory_user")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Create a new record. The database assigns the id.
    ///
    /// No field validation happens here; presence checks are the form UI's
    /// responsibility.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_user: &NewUser) -> Result<UserRecord, RepositoryError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r"
            INSERT INTO directory_user (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            ",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Replace the fields present in `patch` on an existing record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: UserId,
        patch: &UserPatch,
    ) -> Result<UserRecord, RepositoryError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r"
            UPDATE directory_user
            SET name  = COALESCE($2, name),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, name, email
            ",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .fetch_optional(self.pool)
        .await?;

        user.ok_or(RepositoryError::NotFound)
    }

    /// Remove a record permanently.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM directory_user WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
