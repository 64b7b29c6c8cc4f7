//! Repository for the `connections` table.

use skillswap_core::connection::{ConnectionStatus, NewConnection};
use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::connection::Connection;

/// Column list for `connections` queries.
const COLUMNS: &str = "id, from_skill_id, to_skill_id, status, message, created_at";

/// Provides data access for connections.
pub struct ConnectionRepo;

impl ConnectionRepo {
    /// Insert a new connection. `status` takes its `'pending'` column default.
    ///
    /// Dangling skill ids fail with a foreign-key violation (SQLSTATE 23503).
    pub async fn create(pool: &PgPool, dto: &NewConnection) -> Result<Connection, sqlx::Error> {
        let query = format!(
            "INSERT INTO connections (from_skill_id, to_skill_id, message) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(dto.from_skill_id)
            .bind(dto.to_skill_id)
            .bind(&dto.message)
            .fetch_one(pool)
            .await
    }

    /// Find a connection by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Connection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM connections WHERE id = $1");
        sqlx::query_as::<_, Connection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the connection for an ordered `(from, to)` pair.
    ///
    /// Direction matters: `(b, a)` never matches a lookup for `(a, b)`.
    /// If the pair was requested more than once the earliest row wins.
    pub async fn find_by_pair(
        pool: &PgPool,
        from_skill_id: DbId,
        to_skill_id: DbId,
    ) -> Result<Option<Connection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM connections \
             WHERE from_skill_id = $1 AND to_skill_id = $2 \
             ORDER BY id ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(from_skill_id)
            .bind(to_skill_id)
            .fetch_optional(pool)
            .await
    }

    /// List connections sent by a skill.
    pub async fn list_outgoing(
        pool: &PgPool,
        skill_id: DbId,
    ) -> Result<Vec<Connection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM connections \
             WHERE from_skill_id = $1 \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(skill_id)
            .fetch_all(pool)
            .await
    }

    /// Move a pending connection to `status`.
    ///
    /// Returns `None` when no row matched: either the id does not exist or
    /// the connection was already decided. The status guard lives in the
    /// `WHERE` clause so concurrent deciders cannot both win.
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        status: ConnectionStatus,
    ) -> Result<Option<Connection>, sqlx::Error> {
        let query = format!(
            "UPDATE connections SET status = $2 \
             WHERE id = $1 AND status = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(ConnectionStatus::Pending.as_str())
            .fetch_optional(pool)
            .await
    }
}
