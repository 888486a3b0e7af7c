use rerouter_application::ports::EnforcementLayer;
use rerouter_application::services::ActivationController;
use rerouter_application::use_cases::{
    GetSettingsUseCase, HandleMessageUseCase, ResolveNavigationUseCase, UpdateSettingsUseCase,
};
use rerouter_infrastructure::notifier::BroadcastNotifier;
use rerouter_infrastructure::system::IdleDetector;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handle_message: Arc<HandleMessageUseCase>,
    pub get_settings: Arc<GetSettingsUseCase>,
    pub update_settings: Arc<UpdateSettingsUseCase>,
    pub resolve_navigation: Arc<ResolveNavigationUseCase>,
    pub activation: Arc<ActivationController>,
    pub enforcement: Arc<dyn EnforcementLayer>,
    pub notifier: BroadcastNotifier,
    pub idle_detector: Arc<IdleDetector>,
}
