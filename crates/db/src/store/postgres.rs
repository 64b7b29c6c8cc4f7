//! PostgreSQL-backed store.
//!
//! Thin adapter from the [`Store`] traits onto the zero-sized repositories.
//! Referential integrity is left to the `fk_connections_*` constraints; a
//! violation is translated into [`StoreError::MissingSkill`] so callers see
//! the same error kind as with [`super::MemoryStore`].

use async_trait::async_trait;
use skillswap_core::connection::{Decision, NewConnection};
use skillswap_core::skill::NewSkill;
use skillswap_core::types::DbId;
use sqlx::PgPool;

use super::{ConnectionStore, SkillStore, Store, StoreError};
use crate::models::connection::Connection;
use crate::models::skill::Skill;
use crate::repositories::{ConnectionRepo, SkillRepo};

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// [`Store`] over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SkillStore for PgStore {
    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        Ok(SkillRepo::list(&self.pool).await?)
    }

    async fn create_skill(&self, input: &NewSkill) -> Result<Skill, StoreError> {
        Ok(SkillRepo::create(&self.pool, input).await?)
    }
}

#[async_trait]
impl ConnectionStore for PgStore {
    async fn create_connection(&self, input: &NewConnection) -> Result<Connection, StoreError> {
        ConnectionRepo::create(&self.pool, input)
            .await
            .map_err(|err| classify_insert_error(err, input))
    }

    async fn find_connection(
        &self,
        from_skill_id: DbId,
        to_skill_id: DbId,
    ) -> Result<Option<Connection>, StoreError> {
        Ok(ConnectionRepo::find_by_pair(&self.pool, from_skill_id, to_skill_id).await?)
    }

    async fn update_connection_status(
        &self,
        id: DbId,
        decision: Decision,
    ) -> Result<Connection, StoreError> {
        if let Some(updated) = ConnectionRepo::decide(&self.pool, id, decision.into()).await? {
            return Ok(updated);
        }

        // Zero rows updated: tell "no such id" apart from "already decided".
        match ConnectionRepo::find_by_id(&self.pool, id).await? {
            Some(existing) => Err(StoreError::TerminalStatus {
                id,
                status: existing.status,
            }),
            None => Err(StoreError::NotFound {
                entity: "Connection",
                id,
            }),
        }
    }

    async fn list_outgoing_connections(
        &self,
        skill_id: DbId,
    ) -> Result<Vec<Connection>, StoreError> {
        Ok(ConnectionRepo::list_outgoing(&self.pool, skill_id).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Map a foreign key violation on `connections` to [`StoreError::MissingSkill`].
fn classify_insert_error(err: sqlx::Error, input: &NewConnection) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            let (field, id) = match db_err.constraint() {
                Some("fk_connections_to_skill") => ("toSkillId", input.to_skill_id),
                _ => ("fromSkillId", input.from_skill_id),
            };
            tracing::warn!(field, skill_id = id, "Connection references a missing skill");
            return StoreError::MissingSkill { field, id };
        }
    }
    StoreError::Database(err)
}
