//! Rerouter Infrastructure Layer
pub mod database;
pub mod enforcement;
pub mod notifier;
pub mod remote;
pub mod repositories;
pub mod system;
