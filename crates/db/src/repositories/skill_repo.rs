//! Repository for the `skills` table.

use skillswap_core::skill::NewSkill;
use sqlx::PgPool;

use crate::models::skill::Skill;

/// Column list for `skills` queries.
const COLUMNS: &str = "id, name, can_teach, wants_to_learn, created_at";

/// Provides data access for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List every skill, oldest first. Ties on `created_at` fall back to id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Insert a new skill. `id` and `created_at` come from column defaults.
    pub async fn create(pool: &PgPool, dto: &NewSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, can_teach, wants_to_learn) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&dto.name)
            .bind(&dto.can_teach)
            .bind(&dto.wants_to_learn)
            .fetch_one(pool)
            .await
    }
}
