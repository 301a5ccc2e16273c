use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub log_filter: String,
    pub task_list: TaskListConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListConfig {
    pub page_limit: u64,
    pub default_state: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:6543".to_string(),
            request_timeout_secs: 30,
            log_filter: "taskify=info".to_string(),
            task_list: TaskListConfig::default(),
        }
    }
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            page_limit: crate::query::DEFAULT_LIMIT,
            default_state: None,
        }
    }
}

impl DashboardConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(DashboardConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("TASKIFY_").split("__"));

        figment.extract()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
