//! Database connection management

use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError, query};

use crate::auth::AuthenticatedUser;

/// SQL used to expose the caller's JWT claims to row-level security policies.
pub const SET_JWT_CLAIMS_SQL: &str = "SELECT set_config('request.jwt.claims', $1, true)";

/// SQL used to expose the caller's id to `auth.uid()`.
pub const SET_JWT_SUBJECT_SQL: &str = "SELECT set_config('request.jwt.claim.sub', $1, true)";

/// SQL used to drop service-role privileges for the rest of the transaction.
pub const SET_AUTHENTICATED_ROLE_SQL: &str = "SET LOCAL ROLE authenticated";

/// Postgres role name Supabase assigns to signed-in users.
const AUTHENTICATED_ROLE: &str = "authenticated";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction that runs as the given user under RLS.
    ///
    /// The service-role connection switches to the `authenticated` role and
    /// publishes the user's claims, so `auth.uid()` inside policies resolves to
    /// the caller rather than the server.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting the claims fails.
    pub async fn begin_user_transaction(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let subject = user.uuid.to_string();
        let claims = json!({
            "sub": subject,
            "role": AUTHENTICATED_ROLE,
            "email": user.email,
        });

        query(SET_JWT_CLAIMS_SQL)
            .bind(claims.to_string())
            .execute(&mut *tx)
            .await?;

        query(SET_JWT_SUBJECT_SQL)
            .bind(subject)
            .execute(&mut *tx)
            .await?;

        query(SET_AUTHENTICATED_ROLE_SQL).execute(&mut *tx).await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply pending schema migrations in order.
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history diverges.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
