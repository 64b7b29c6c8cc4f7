use serde::Serialize;
use skillswap_core::connection::ConnectionStatus;
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `connections` table.
///
/// `status` is stored as TEXT and decoded through `ConnectionStatus: TryFrom<String>`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: DbId,
    pub from_skill_id: DbId,
    pub to_skill_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: ConnectionStatus,
    pub message: Option<String>,
    pub created_at: Timestamp,
}
