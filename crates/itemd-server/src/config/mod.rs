//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use itemd_core::error::{ItemdError, Result};

pub use schema::{ItemdConfig, ServerSection};

/// Env var selecting the config file path.
pub const CONFIG_PATH_ENV: &str = "ITEMD_CONFIG";
/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "itemd.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ItemdConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        ItemdError::BadConfig(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ItemdConfig> {
    let cfg: ItemdConfig = serde_yaml::from_str(s)
        .map_err(|e| ItemdError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, falling back to defaults when the file does not exist.
/// A file that exists but cannot be read or parsed is still an error.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ItemdConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(ItemdConfig::default())
        }
        Err(e) => Err(ItemdError::BadConfig(format!(
            "read config failed ({}): {e}",
            path.display()
        ))),
    }
}

/// Resolve the config path from `ITEMD_CONFIG`, load it, then apply `PORT`.
pub fn load_from_env() -> Result<ItemdConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut cfg = load_or_default(&path)?;
    if let Ok(port) = std::env::var("PORT") {
        cfg.server.override_port(&port)?;
    }
    Ok(cfg)
}
