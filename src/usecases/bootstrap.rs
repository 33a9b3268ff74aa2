use std::{path::Path, sync::Arc};

use crate::{
    api::{Endpoint, HttpTransport, SimulatedTransport},
    infra::{
        self,
        config::{AppConfig, ConfigOverrides, LayeredConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
        logging::{LogSink, LoggingGuard},
        storage_layout::StorageLayout,
    },
    usecases::{context::AppContext, dispatch::Dispatcher},
};

/// Where logs should go for the command being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Files,
}

pub struct Bootstrapped {
    pub context: AppContext,
    pub logging: LoggingGuard,
}

pub fn bootstrap(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    log_target: LogTarget,
) -> Result<Bootstrapped, AppError> {
    let config = load_config(&LayeredConfigAdapter::new(config_path, overrides))?;
    let logging = infra::logging::init(&config.logging, &resolve_sink(log_target)?)?;

    tracing::debug!(
        base_url = %config.api.base_url,
        demo = config.demo.enabled,
        demo_delay_ms = config.demo.delay_ms,
        credentials = ?config.credentials,
        "configuration loaded"
    );

    let context = build_context(config)?;
    Ok(Bootstrapped { context, logging })
}

fn load_config(adapter: &dyn ConfigAdapter) -> Result<AppConfig, AppError> {
    adapter.load().map_err(AppError::Other)
}

fn resolve_sink(log_target: LogTarget) -> Result<LogSink, AppError> {
    match log_target {
        LogTarget::Stderr => Ok(LogSink::Stderr),
        LogTarget::Files => {
            let layout = StorageLayout::resolve()?;
            layout.ensure_dirs()?;
            Ok(LogSink::DailyFile {
                dir: layout.log_dir,
            })
        }
    }
}

fn build_context(config: AppConfig) -> Result<AppContext, AppError> {
    let live = HttpTransport::new(Endpoint::new(&config.api.base_url))?;
    let simulated = SimulatedTransport::new(config.demo.delay());
    let dispatcher = Dispatcher::new(Arc::new(live), Arc::new(simulated));

    Ok(AppContext::new(config, Arc::new(dispatcher)))
}
