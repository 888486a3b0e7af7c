pub mod navigation;
pub mod presence;
pub mod settings;

pub use navigation::{NavigateRequest, NavigateResponse};
pub use presence::{ActivityRequest, PresenceRequest, PresenceResponse};
pub use settings::UpdateSettingsRequest;
