use crate::domain::{ProjectionPolicy, SortKey};

const API_BASE_URL_VAR: &str = "WCA_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub per_page: u32,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.worldcubeassociation.org/api/v0".to_string(),
            per_page: 100,
            user_agent: "YauRanking/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingSettings {
    /// WCA event whose personal records are ranked ("555" is 5x5x5 Cube)
    pub event_id: String,
    pub default_sort: SortKey,
    pub policy: ProjectionPolicy,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            event_id: "555".to_string(),
            default_sort: SortKey::Average,
            policy: ProjectionPolicy::SkipMalformed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub ranking: RankingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            ranking: RankingSettings::default(),
        }
    }

    /// Defaults, with the API base URL taken from `WCA_API_BASE_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(base_url) = std::env::var(API_BASE_URL_VAR) {
            config.api.base_url = base_url;
        }
        config
    }

    pub fn with_policy(mut self, policy: ProjectionPolicy) -> Self {
        self.ranking.policy = policy;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }
}
