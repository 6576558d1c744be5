//! Build metadata and environment introspection for `ado meta`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::resolve_config_path;
use crate::home::{ado_cache_dir, ado_home_dir};

pub const NAME: &str = "ado";

/// Environment variable supplying an explicit config path.
pub const CONFIG_ENV: &str = "ADO_CONFIG";

/// `ADO_*` variables reported by `ado meta env`.
pub const REPORTED_ENV_VARS: &[&str] = &[CONFIG_ENV, crate::logging::LOG_LEVEL_ENV];

/// Experimental features compiled into this binary.
pub const FEATURES: &[&str] = &[];

/// Payload of `ado meta features`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureList {
    pub features: Vec<String>,
}

impl FeatureList {
    pub fn current() -> Self {
        Self {
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Metadata baked in at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: String,
    pub version: String,
    pub commit: String,
    pub build_time: String,
    pub rustc_version: String,
    pub platform: String,
}

impl BuildInfo {
    /// Build info for this binary. `ADO_BUILD_COMMIT`, `ADO_BUILD_TIME` and
    /// `ADO_RUSTC_VERSION` are read at compile time when set.
    pub fn current() -> Self {
        Self {
            name: NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("ADO_BUILD_COMMIT").unwrap_or("none").to_string(),
            build_time: option_env!("ADO_BUILD_TIME")
                .unwrap_or("unknown")
                .to_string(),
            rustc_version: option_env!("ADO_RUSTC_VERSION")
                .unwrap_or("unknown")
                .to_string(),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}

/// Where ado looks for its config and which overrides are active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvInfo {
    pub config_path: String,
    pub config_sources: Vec<String>,
    pub home_dir: String,
    pub cache_dir: String,
    pub env: BTreeMap<String, String>,
}

impl EnvInfo {
    /// Collect from the process environment. `explicit_config` is the `--config` flag.
    pub fn collect(explicit_config: Option<&Path>) -> Self {
        let lookup = |key: &str| std::env::var(key).ok();
        let home = ado_home_dir();
        let env_config = lookup(CONFIG_ENV).filter(|v| !v.is_empty());
        let explicit = explicit_config
            .map(Path::to_path_buf)
            .or_else(|| env_config.map(Into::into));

        let resolved = resolve_config_path(explicit.as_deref(), home.as_deref());

        Self {
            config_path: resolved
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            config_sources: resolved
                .sources
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            home_dir: display_or_empty(home.as_deref()),
            cache_dir: display_or_empty(ado_cache_dir().as_deref()),
            env: collect_env(lookup),
        }
    }
}

fn display_or_empty(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

fn collect_env(lookup: impl Fn(&str) -> Option<String>) -> BTreeMap<String, String> {
    REPORTED_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key).map(|value| (key.to_string(), value)))
        .collect()
}
