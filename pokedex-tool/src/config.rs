use std::path::{Path, PathBuf};

use pokedex_api::{LocalePreference, DEFAULT_BASE_URL};
use serde::Deserialize;

use crate::error::PkdxError;

pub const BASE_URL_ENV: &str = "POKEDEX_BASE_URL";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    #[serde(default)]
    pub locale: LocalePreference,
    /// Render failures instead of leaving the loading indicator up.
    #[serde(default)]
    pub show_errors: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pokedex").join("config.toml"))
}

/// Loads the user config. A missing file yields the defaults.
pub fn load_config() -> Result<Config, PkdxError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, PkdxError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|source| PkdxError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Base URL precedence: CLI flag, environment, config file, built-in default.
pub fn resolve_base_url(cli_base_url: Option<String>, config: &Config) -> String {
    let from_env = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());
    pick_base_url(cli_base_url, from_env, config)
}

fn pick_base_url(cli: Option<String>, env: Option<String>, config: &Config) -> String {
    cli.or(env)
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pokedex")
        .join("pkdx.log")
}
