use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Values given on the command line; they win over the config file.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub demo: bool,
    pub instance_id: Option<String>,
    pub token: Option<String>,
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("base_url", &self.base_url)
            .field("demo", &self.demo)
            .field("instance_id", &self.instance_id)
            .field("token_set", &self.token.is_some())
            .finish()
    }
}

impl ConfigOverrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url.clone_from(base_url);
        }

        // The flag can only switch demo mode on; off is the file's call.
        if self.demo {
            config.demo.enabled = true;
        }

        if let Some(instance_id) = &self.instance_id {
            config.credentials.instance_id.clone_from(instance_id);
        }

        if let Some(token) = &self.token {
            config.credentials.token.clone_from(token);
        }
    }
}

/// Config file merged over defaults, then command-line overrides on top.
#[derive(Debug, Clone, Default)]
pub struct LayeredConfigAdapter {
    path: Option<PathBuf>,
    overrides: ConfigOverrides,
}

impl LayeredConfigAdapter {
    pub fn new(path: Option<&Path>, overrides: ConfigOverrides) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            overrides,
        }
    }
}

impl ConfigAdapter for LayeredConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let mut config = load(self.path.as_deref())?;
        self.overrides.apply(&mut config);
        Ok(config)
    }
}
