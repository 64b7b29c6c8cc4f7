//! Storage-independent domain logic for SkillSwap.
//!
//! Holds the shared id/timestamp types, the domain error type, payload
//! validation for skills and connections, and the connection status state
//! machine. Nothing in this crate performs I/O.

pub mod connection;
pub mod error;
pub mod skill;
pub mod types;
pub mod validation;
