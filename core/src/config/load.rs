use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::error::ConfigError;

const LOCAL_CONFIG: &str = "slothtest.toml";

pub fn load_default() -> Result<AppConfig, ConfigError> {
    let local = PathBuf::from(LOCAL_CONFIG);
    let cfg = if local.exists() {
        load_from_path(&local)?
    } else if let Some(user) = user_config_path().filter(|p| p.exists()) {
        load_from_path(&user)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(cfg, |key| std::env::var(key).ok())
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(target: "slothtest.config", path = %path.display(), "config loaded");
    Ok(cfg)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("slothtest").join("config.toml"))
}

/// Overlays `SLOTHTEST_*` variables. `lookup` is injected so tests do not
/// touch the process environment.
pub fn apply_env_overrides<F>(mut cfg: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = env_bool(&lookup, "SLOTHTEST_EMOJIS")? {
        cfg.display.emojis = v;
    }
    if let Some(v) = env_bool(&lookup, "SLOTHTEST_DANCE")? {
        cfg.display.dance = v;
    }
    if let Some(v) = env_bool(&lookup, "SLOTHTEST_NOFUN")? {
        cfg.display.nofun = v;
    }
    if let Some(v) = env_bool(&lookup, "SLOTHTEST_EXIT_NONZERO")? {
        cfg.exit.nonzero_on_failure = v;
    }
    if let Some(v) = lookup("SLOTHTEST_DEBOUNCE_MS").filter(|v| !v.trim().is_empty()) {
        cfg.watch.debounce_ms = v.trim().parse().map_err(|_| ConfigError::EnvInvalid {
            key: "SLOTHTEST_DEBOUNCE_MS",
            value: v.clone(),
        })?;
    }
    Ok(cfg)
}

fn env_bool<F>(lookup: &F, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(v) = lookup(key) else {
        return Ok(None);
    };
    match v.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::EnvInvalid { key, value: v }),
    }
}
