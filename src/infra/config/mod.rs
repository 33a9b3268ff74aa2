mod adapter;
mod app_config;
mod file_config;
mod loader;

pub use adapter::{ConfigOverrides, LayeredConfigAdapter};
pub use app_config::{ApiConfig, AppConfig, CredentialsConfig, DemoConfig, LogConfig};
pub(crate) use loader::load;
