use rerouter_application::use_cases::NavigationDecision;
use rerouter_domain::ResourceType;
use serde::{Deserialize, Serialize};

fn default_resource_type() -> ResourceType {
    ResourceType::MainFrame
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateRequest {
    pub url: String,
    #[serde(default = "default_resource_type")]
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum NavigateResponse {
    Allow,
    #[serde(rename_all = "camelCase")]
    Redirect { rule_id: u32, redirect_url: String },
}

impl From<NavigationDecision> for NavigateResponse {
    fn from(decision: NavigationDecision) -> Self {
        match decision {
            NavigationDecision::Allow => NavigateResponse::Allow,
            NavigationDecision::Redirect { rule_id, url } => NavigateResponse::Redirect {
                rule_id,
                redirect_url: url,
            },
        }
    }
}
