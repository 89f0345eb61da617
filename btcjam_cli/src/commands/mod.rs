//! CLI subcommand implementations.

pub mod listings;
pub mod profile;
