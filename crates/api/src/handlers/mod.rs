pub mod connections;
pub mod skills;
