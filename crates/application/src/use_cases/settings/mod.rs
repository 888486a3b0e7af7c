pub mod get;
pub mod update;

pub use get::GetSettingsUseCase;
pub use update::{SettingsUpdate, UpdateSettingsUseCase};
