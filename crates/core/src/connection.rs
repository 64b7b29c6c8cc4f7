//! Connection schema and status state machine.
//!
//! A connection starts `pending` and may be decided exactly once, to
//! `accepted` or `rejected`. Both decided states are terminal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{FieldViolation, PayloadReader};

/// Lifecycle status of a connection, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ConnectionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Apply a decision, returning the new status.
    ///
    /// Fails with [`CoreError::Conflict`] if the connection was already decided.
    pub fn apply(self, decision: Decision) -> Result<Self, CoreError> {
        if self.is_terminal() {
            return Err(CoreError::Conflict(format!(
                "Connection is already {self} and cannot be changed to {decision}"
            )));
        }
        Ok(decision.into())
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown connection status: {0}")]
pub struct ParseStatusError(String);

impl FromStr for ConnectionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Used by `sqlx::FromRow` to decode the `status` TEXT column.
impl TryFrom<String> for ConnectionStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The target of a status update. `pending` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        ConnectionStatus::from(self).as_str()
    }

    /// Validate a raw status update body (`{status}`).
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let mut reader = PayloadReader::new(body);
        let decision = match reader.required_string("status").as_deref() {
            Some("accepted") => Some(Self::Accepted),
            Some("rejected") => Some(Self::Rejected),
            Some(other) => {
                reader.reject(FieldViolation::new(
                    "status",
                    "invalid_value",
                    format!("Expected 'accepted' | 'rejected', received '{other}'"),
                ));
                None
            }
            None => None,
        };
        let decision = reader.finish(decision)?;
        decision.ok_or_else(|| CoreError::Internal("status accepted without a value".into()))
    }
}

impl From<Decision> for ConnectionStatus {
    fn from(value: Decision) -> Self {
        match value {
            Decision::Accepted => Self::Accepted,
            Decision::Rejected => Self::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated connection creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConnection {
    pub from_skill_id: DbId,
    pub to_skill_id: DbId,
    pub message: Option<String>,
}

impl NewConnection {
    /// Validate a raw JSON body (`{fromSkillId, toSkillId, message?}`).
    ///
    /// `status` is always `pending` on creation; a `status` field in the body
    /// is ignored along with `id` and `createdAt`.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let mut reader = PayloadReader::new(body);
        let from_skill_id = reader.required_id("fromSkillId");
        let to_skill_id = reader.required_id("toSkillId");
        let message = reader.optional_string("message");
        let ids = reader.finish((from_skill_id, to_skill_id))?;

        match ids {
            (Some(from_skill_id), Some(to_skill_id)) => Ok(Self {
                from_skill_id,
                to_skill_id,
                message,
            }),
            _ => Err(CoreError::Internal(
                "connection ids accepted without values".into(),
            )),
        }
    }
}
