use serde::Deserialize;

use crate::infra::config::{ApiConfig, AppConfig, CredentialsConfig, DemoConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub api: Option<FileApiConfig>,
    pub demo: Option<FileDemoConfig>,
    pub credentials: Option<FileCredentialsConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(api) = self.api {
            api.merge_into(&mut config.api);
        }

        if let Some(demo) = self.demo {
            demo.merge_into(&mut config.demo);
        }

        if let Some(credentials) = self.credentials {
            credentials.merge_into(&mut config.credentials);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileApiConfig {
    pub base_url: Option<String>,
}

impl FileApiConfig {
    fn merge_into(self, config: &mut ApiConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDemoConfig {
    pub enabled: Option<bool>,
    pub delay_ms: Option<u64>,
}

impl FileDemoConfig {
    fn merge_into(self, config: &mut DemoConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }

        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
    }
}

#[derive(Deserialize, Default)]
pub struct FileCredentialsConfig {
    pub instance_id: Option<String>,
    pub token: Option<String>,
}

impl FileCredentialsConfig {
    fn merge_into(self, config: &mut CredentialsConfig) {
        if let Some(instance_id) = self.instance_id {
            config.instance_id = instance_id;
        }

        if let Some(token) = self.token {
            config.token = token;
        }
    }
}

impl std::fmt::Debug for FileCredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentialsConfig")
            .field("instance_id", &self.instance_id)
            .field("token_set", &self.token.is_some())
            .finish()
    }
}
