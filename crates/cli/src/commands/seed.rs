//! Seed the database with sample records.

use secrecy::ExposeSecret;
use sqlx::PgPool;

use rolodex_core::UserRecord;

use super::{CommandError, database_url};

/// Insert `count` sample records.
///
/// # Errors
///
/// Returns an error if the database URL is missing or an insert fails.
pub async fn run(count: u32) -> Result<(), CommandError> {
    let database_url = database_url()?;
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    for i in 1..=count {
        let user = sqlx::query_as::<_, UserRecord>(
            r"
            INSERT INTO directory_user (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            ",
        )
        .bind(format!("Sample User {i}"))
        .bind(format!("sample{i}@example.com"))
        .fetch_one(&pool)
        .await?;

        tracing::info!(id = %user.id, name = %user.name, "seeded record");
    }

    tracing::info!("Seeded {count} records");
    Ok(())
}
