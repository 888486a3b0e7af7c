//! Rerouter Domain Layer
pub mod config;
pub mod defaults;
pub mod errors;
pub mod message;
pub mod presence;
pub mod remote;
pub mod rule;
pub mod schedule;
pub mod settings;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use message::{Message, MessageResponse, ResponseStatus};
pub use presence::{ActivationState, PresenceState};
pub use remote::RemoteLists;
pub use rule::{RedirectRule, RedirectTarget, ResourceType, RuleAction, RuleCondition, RuleUpdate};
pub use schedule::{Schedule, TimeOfDay};
pub use settings::{RedirectStats, Settings, SettingsKey, SettingsPatch};
