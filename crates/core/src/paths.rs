use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::constants::{cache, storage};

fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", storage::APP_DIR_NAME)
}

fn env_dir(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Location of the persisted settings file: env override, then the platform
/// config dir, then a dot-directory next to the working directory.
pub fn default_settings_path() -> PathBuf {
    let base = env_dir(storage::SETTINGS_DIR_ENV)
        .or_else(|| project_dirs().map(|dirs| dirs.config_dir().to_path_buf()))
        .unwrap_or_else(|| current_dir().join(format!(".{}", storage::APP_DIR_NAME)));
    base.join(storage::SETTINGS_FILE_NAME)
}

/// Location of the response cache: env override, then the platform cache
/// dir, then a dot-directory next to the working directory.
pub fn default_cache_dir() -> PathBuf {
    env_dir(cache::CACHE_DIR_ENV)
        .or_else(|| project_dirs().map(|dirs| dirs.cache_dir().to_path_buf()))
        .unwrap_or_else(|| current_dir().join(format!(".{}-cache", storage::APP_DIR_NAME)))
}
