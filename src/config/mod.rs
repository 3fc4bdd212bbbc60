/// Database connection and table creation
pub mod database;

/// Milestone seed configuration loading from config.toml
pub mod milestones;

/// HTTP listen address and config path from environment variables
pub mod server;
