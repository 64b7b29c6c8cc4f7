//! Process-lifetime store backed by in-memory maps.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use skillswap_core::connection::{ConnectionStatus, Decision, NewConnection};
use skillswap_core::skill::NewSkill;
use skillswap_core::types::DbId;
use tokio::sync::RwLock;

use super::{ConnectionStore, SkillStore, Store, StoreError};
use crate::models::connection::Connection;
use crate::models::skill::Skill;

#[derive(Debug, Default)]
struct Tables {
    skills: BTreeMap<DbId, Skill>,
    connections: BTreeMap<DbId, Connection>,
    last_skill_id: DbId,
    last_connection_id: DbId,
}

/// In-memory [`Store`].
///
/// Ids start at 1 and are never reused. All state sits behind one
/// `RwLock`, so id assignment and insertion happen under the same write
/// guard and concurrent creates always get distinct ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkillStore for MemoryStore {
    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        let tables = self.tables.read().await;
        let mut skills: Vec<Skill> = tables.skills.values().cloned().collect();
        skills.sort_by_key(|s| (s.created_at, s.id));
        Ok(skills)
    }

    async fn create_skill(&self, input: &NewSkill) -> Result<Skill, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_skill_id += 1;
        let skill = Skill {
            id: tables.last_skill_id,
            name: input.name.clone(),
            can_teach: input.can_teach.clone(),
            wants_to_learn: input.wants_to_learn.clone(),
            created_at: Utc::now(),
        };
        tables.skills.insert(skill.id, skill.clone());
        tracing::debug!(skill_id = skill.id, "Skill stored in memory");
        Ok(skill)
    }
}

#[async_trait]
impl ConnectionStore for MemoryStore {
    async fn create_connection(&self, input: &NewConnection) -> Result<Connection, StoreError> {
        let mut tables = self.tables.write().await;
        for (field, id) in [
            ("fromSkillId", input.from_skill_id),
            ("toSkillId", input.to_skill_id),
        ] {
            if !tables.skills.contains_key(&id) {
                return Err(StoreError::MissingSkill { field, id });
            }
        }

        tables.last_connection_id += 1;
        let connection = Connection {
            id: tables.last_connection_id,
            from_skill_id: input.from_skill_id,
            to_skill_id: input.to_skill_id,
            status: ConnectionStatus::Pending,
            message: input.message.clone(),
            created_at: Utc::now(),
        };
        tables.connections.insert(connection.id, connection.clone());
        tracing::debug!(connection_id = connection.id, "Connection stored in memory");
        Ok(connection)
    }

    async fn find_connection(
        &self,
        from_skill_id: DbId,
        to_skill_id: DbId,
    ) -> Result<Option<Connection>, StoreError> {
        let tables = self.tables.read().await;
        // BTreeMap iterates in id order, so the earliest match wins.
        Ok(tables
            .connections
            .values()
            .find(|c| c.from_skill_id == from_skill_id && c.to_skill_id == to_skill_id)
            .cloned())
    }

    async fn update_connection_status(
        &self,
        id: DbId,
        decision: Decision,
    ) -> Result<Connection, StoreError> {
        let mut tables = self.tables.write().await;
        let connection = tables
            .connections
            .get_mut(&id)
            .ok_or(StoreError::NotFound {
                entity: "Connection",
                id,
            })?;

        let current = connection.status;
        connection.status = current
            .apply(decision)
            .map_err(|_| StoreError::TerminalStatus {
                id,
                status: current,
            })?;
        Ok(connection.clone())
    }

    async fn list_outgoing_connections(
        &self,
        skill_id: DbId,
    ) -> Result<Vec<Connection>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .connections
            .values()
            .filter(|c| c.from_skill_id == skill_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}
}
