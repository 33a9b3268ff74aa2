use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const LOCAL_CONFIG_FILE: &str = "config.toml";
const APP_CONFIG_DIR: &str = "green-console";

/// Loads defaults, then merges the first config file found.
///
/// An explicit path is the only candidate when given; otherwise
/// `./config.toml` wins over `<user config dir>/green-console/config.toml`.
/// No file at all is not an error.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::default();

    let Some(config_path) = resolve_path(path) else {
        return Ok(config);
    };

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => path.exists().then(|| path.to_path_buf()),
        None => candidate_paths().into_iter().find(|path| path.exists()),
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(APP_CONFIG_DIR).join(LOCAL_CONFIG_FILE));
    }
    candidates
}
