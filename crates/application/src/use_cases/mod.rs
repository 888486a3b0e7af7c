pub mod handle_message;
pub mod initialize_settings;
pub mod resolve_navigation;
pub mod settings;
pub mod sync_rules;

pub use handle_message::HandleMessageUseCase;
pub use initialize_settings::InitializeSettingsUseCase;
pub use resolve_navigation::{NavigationDecision, ResolveNavigationUseCase};
pub use settings::{GetSettingsUseCase, SettingsUpdate, UpdateSettingsUseCase};
pub use sync_rules::{SyncOutcome, SyncRulesUseCase};
