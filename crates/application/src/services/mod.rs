pub mod activation_controller;
pub mod rule_compiler;
pub mod schedule_kick;
pub mod sync_coordinator;

pub use activation_controller::{ActivationController, ActivationSignal};
pub use rule_compiler::RuleCompiler;
pub use schedule_kick::ScheduleKick;
pub use sync_coordinator::{SyncCoordinator, SyncHandle, SyncTrigger};
