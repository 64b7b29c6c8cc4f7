//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Create payloads live in `skillswap_core` because they
//! are validated before any store is involved.

pub mod connection;
pub mod skill;
