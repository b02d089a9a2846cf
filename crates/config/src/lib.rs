//! Configuration loading for the Harbor client.
//!
//! Config file: `harbor.toml`, searched in `./` then `~/.config/harbor/`.
//! `HARBOR_BASE_URL` overrides the configured server address.

pub mod loader;
pub mod schema;

pub use {
    loader::{apply_base_url_override, apply_env_overrides, discover_and_load, load_config},
    schema::{HarborConfig, ServerConfig},
};
