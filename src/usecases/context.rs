use std::sync::Arc;

use crate::{infra::config::AppConfig, usecases::dispatch::Dispatcher};

pub struct AppContext {
    pub config: AppConfig,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppContext {
    pub fn new(config: AppConfig, dispatcher: Arc<Dispatcher>) -> Self {
        Self { config, dispatcher }
    }
}
