//! Configuration module for Rerouter
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP bind address and port
//! - `database`: Settings store location
//! - `scheduler`: Periodic trigger intervals and idle threshold
//! - `remote`: Optional remote list source
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod remote;
pub mod root;
pub mod scheduler;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use remote::RemoteConfig;
pub use root::{CliOverrides, Config};
pub use scheduler::SchedulerConfig;
pub use server::ServerConfig;
