//! Skill creation schema.

use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::PayloadReader;

/// A validated skill creation payload.
///
/// `id` and `createdAt` are assigned by the store and have no place here;
/// if a client sends them they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Describe at least one thing you can teach"))]
    pub can_teach: String,
    #[validate(length(min = 1, message = "Describe at least one thing you want to learn"))]
    pub wants_to_learn: String,
}

impl NewSkill {
    /// Validate a raw JSON body (`{name, canTeach, wantsToLearn}`).
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let mut reader = PayloadReader::new(body);
        let draft = Self {
            name: reader.required_string("name").unwrap_or_default(),
            can_teach: reader.required_string("canTeach").unwrap_or_default(),
            wants_to_learn: reader.required_string("wantsToLearn").unwrap_or_default(),
        };
        reader.check(&draft);
        reader.finish(draft)
    }
}
