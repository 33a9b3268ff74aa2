use anyhow::Result;

use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

/// Config source that always yields defaults with demo mode on and no latency.
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();
        config.demo.enabled = true;
        config.demo.delay_ms = 0;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_is_instant_demo_mode() {
        let config = StubConfigAdapter.load().expect("stub config must load");

        assert!(config.demo.enabled);
        assert_eq!(config.demo.delay_ms, 0);
        assert_eq!(config.api, AppConfig::default().api);
    }
}
