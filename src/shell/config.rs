use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::modules::activities::core::activity::ActivityCatalog;
use crate::modules::activities::core::seed::{default_activities, parse_seed};

pub const BIND_ADDR_VAR: &str = "ACTIVITIES_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "ACTIVITIES_STATIC_DIR";
pub const SEED_FILE_VAR: &str = "ACTIVITIES_SEED_FILE";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_LOG_FILTER: &str = "activities=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {bind_addr}"))?;

        Ok(Self {
            bind_addr,
            static_dir: lookup(STATIC_DIR_VAR)
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            seed_file: lookup(SEED_FILE_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// The initial directory: the seed file when configured, the built-in set otherwise.
    pub fn load_catalog(&self) -> anyhow::Result<ActivityCatalog> {
        let Some(path) = &self.seed_file else {
            return Ok(default_activities());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        parse_seed(&json).with_context(|| format!("invalid seed file {}", path.display()))
    }
}
