use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::HarborConfig;

/// Standard config file name.
const CONFIG_FILENAME: &str = "harbor.toml";

/// Env var that overrides the configured server base URL.
const BASE_URL_ENV: &str = "HARBOR_BASE_URL";

/// Load config from the given path.
pub fn load_config(path: &Path) -> anyhow::Result<HarborConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./harbor.toml` (project-local)
/// 2. `~/.config/harbor/harbor.toml` (user-global)
///
/// Falls back to `HarborConfig::default()` when no file is found or the file
/// does not parse; `HARBOR_BASE_URL` overrides the result either way.
#[must_use]
pub fn discover_and_load() -> HarborConfig {
    let mut config = match find_config_file() {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            match load_config(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                    HarborConfig::default()
                },
            }
        },
        None => {
            debug!("no config file found, using defaults");
            HarborConfig::default()
        },
    };
    apply_env_overrides(&mut config);
    config
}

/// Apply environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: &mut HarborConfig) {
    apply_base_url_override(config, std::env::var(BASE_URL_ENV).ok());
}

/// Apply the base-URL override value, if one was supplied. Blank values are
/// ignored.
pub fn apply_base_url_override(config: &mut HarborConfig, base_url: Option<String>) {
    if let Some(base_url) = base_url
        && !base_url.trim().is_empty()
    {
        config.server.base_url = base_url;
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "harbor") {
        let global = dirs.config_dir().join(CONFIG_FILENAME);
        if global.exists() {
            return Some(global);
        }
    }

    None
}
