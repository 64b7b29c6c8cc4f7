//! Store capability traits.
//!
//! The API layer talks to persistence only through [`Store`]. Two
//! implementations exist: [`MemoryStore`] (process lifetime, used for local
//! runs and tests) and [`PgStore`] (PostgreSQL). One is chosen at startup
//! and injected into the router state; they are never mixed.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use skillswap_core::connection::{ConnectionStatus, Decision, NewConnection};
use skillswap_core::skill::NewSkill;
use skillswap_core::types::DbId;

use crate::models::connection::Connection;
use crate::models::skill::Skill;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures surfaced by either store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The connection was already decided; terminal statuses never change.
    #[error("Connection {id} is already {status}")]
    TerminalStatus { id: DbId, status: ConnectionStatus },

    /// A connection referenced a skill that does not exist.
    #[error("{field} references skill {id}, which does not exist")]
    MissingSkill { field: &'static str, id: DbId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait SkillStore: Send + Sync {
    /// Every skill, ordered by creation time ascending (ties by id).
    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError>;

    /// Persist a validated skill and return the stored row.
    async fn create_skill(&self, input: &NewSkill) -> Result<Skill, StoreError>;
}

#[async_trait]
pub trait ConnectionStore: Send + Sync {
    /// Persist a new `pending` connection.
    async fn create_connection(&self, input: &NewConnection) -> Result<Connection, StoreError>;

    /// The connection for the ordered pair `(from, to)`, if any.
    async fn find_connection(
        &self,
        from_skill_id: DbId,
        to_skill_id: DbId,
    ) -> Result<Option<Connection>, StoreError>;

    /// Decide a pending connection.
    async fn update_connection_status(
        &self,
        id: DbId,
        decision: Decision,
    ) -> Result<Connection, StoreError>;

    /// Connections sent by `skill_id`. Incoming connections are not included.
    async fn list_outgoing_connections(
        &self,
        skill_id: DbId,
    ) -> Result<Vec<Connection>, StoreError>;
}

/// The full persistence capability handed to the API layer.
#[async_trait]
pub trait Store: SkillStore + ConnectionStore {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backing resources. Called once during shutdown.
    async fn close(&self);
}
