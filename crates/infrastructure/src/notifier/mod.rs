pub mod broadcast;

pub use broadcast::BroadcastNotifier;
