use serde::{Deserialize, Serialize};
use url::Url;

/// Request categories a rule condition can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    MainFrame,
    SubFrame,
    Script,
    Image,
    Stylesheet,
    Xmlhttprequest,
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::MainFrame => "main_frame",
            ResourceType::SubFrame => "sub_frame",
            ResourceType::Script => "script",
            ResourceType::Image => "image",
            ResourceType::Stylesheet => "stylesheet",
            ResourceType::Xmlhttprequest => "xmlhttprequest",
            ResourceType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RuleAction {
    Redirect { redirect: RedirectTarget },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedirectTarget {
    pub url: String,
}

/// Domain-anchored filter: `||<domain>^` restricted to a set of resource
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    pub url_filter: String,
    pub resource_types: Vec<ResourceType>,
}

impl RuleCondition {
    /// Matches `site` and every subdomain of it, top-level navigations only.
    pub fn domain_anchored(site: &str) -> Self {
        Self {
            url_filter: format!("||{}^", site.trim().to_ascii_lowercase()),
            resource_types: vec![ResourceType::MainFrame],
        }
    }

    /// The anchored domain, if the filter has the `||domain^` shape.
    pub fn anchored_domain(&self) -> Option<&str> {
        let domain = self.url_filter.strip_prefix("||")?.strip_suffix('^')?;
        (!domain.is_empty()).then_some(domain)
    }

    pub fn matches(&self, url: &str, resource_type: ResourceType) -> bool {
        if !self.resource_types.contains(&resource_type) {
            return false;
        }

        let Some(domain) = self.anchored_domain() else {
            return false;
        };

        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        let Some(host) = parsed.host_str() else {
            return false;
        };

        let host = host.trim_end_matches('.').to_ascii_lowercase();
        let domain = domain.to_ascii_lowercase();

        host == domain || host.ends_with(&format!(".{}", domain))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedirectRule {
    pub id: u32,
    pub priority: u32,
    pub action: RuleAction,
    pub condition: RuleCondition,
}

impl RedirectRule {
    pub fn redirect(id: u32, site: &str, destination: &str) -> Self {
        Self {
            id,
            priority: 1,
            action: RuleAction::Redirect {
                redirect: RedirectTarget {
                    url: destination.to_string(),
                },
            },
            condition: RuleCondition::domain_anchored(site),
        }
    }

    pub fn redirect_url(&self) -> &str {
        match &self.action {
            RuleAction::Redirect { redirect } => &redirect.url,
        }
    }
}

/// One atomic change to the live rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleUpdate {
    pub remove_rule_ids: Vec<u32>,
    pub add_rules: Vec<RedirectRule>,
}

impl RuleUpdate {
    pub fn clear(ids: Vec<u32>) -> Self {
        Self {
            remove_rule_ids: ids,
            add_rules: Vec::new(),
        }
    }

    pub fn replace(ids: Vec<u32>, rules: Vec<RedirectRule>) -> Self {
        Self {
            remove_rule_ids: ids,
            add_rules: rules,
        }
    }
}
