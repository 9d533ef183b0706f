use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::AppConfig;

pub const CONFIG_ENV: &str = "PLOTCOMBINE_CONFIG";

/// Loads the configuration from `explicit`, then `$PLOTCOMBINE_CONFIG`, then
/// built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    match resolve_path(explicit, std::env::var_os(CONFIG_ENV)) {
        Some(path) => read_config(&path),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_path(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    env.filter(|v| !v.is_empty()).map(PathBuf::from)
}

pub fn read_config(path: &Path) -> Result<AppConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: AppConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

pub fn write_config(path: &Path, cfg: &AppConfig) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
    bytes.push(b'\n');
    fs::write(path, bytes).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
