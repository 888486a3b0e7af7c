pub mod clock;
pub mod enforcement_layer;
pub mod presence_source;
pub mod remote_list_source;
pub mod settings_store;
pub mod state_notifier;

pub use clock::Clock;
pub use enforcement_layer::EnforcementLayer;
pub use presence_source::PresenceSource;
pub use remote_list_source::RemoteListSource;
pub use settings_store::SettingsStore;
pub use state_notifier::StateNotifier;
