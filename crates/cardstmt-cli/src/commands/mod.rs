//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod issuers;
pub mod parse;

use cardstmt_core::models::config::EngineConfig;

/// Load the engine configuration from an explicit path, or defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(p) => Ok(EngineConfig::from_file(std::path::Path::new(p))?),
        None => Ok(EngineConfig::default()),
    }
}
