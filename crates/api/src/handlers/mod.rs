pub mod events;
pub mod health;
pub mod message;
pub mod navigation;
pub mod presence;
pub mod rules;
pub mod settings;

pub use events::state_events;
pub use health::health_check;
pub use message::post_message;
pub use navigation::navigate;
pub use presence::{report_activity, report_presence};
pub use rules::get_rules;
pub use settings::{get_settings, update_settings};
