//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. One SQL statement per method.

pub mod connection_repo;
pub mod skill_repo;

pub use connection_repo::ConnectionRepo;
pub use skill_repo::SkillRepo;
