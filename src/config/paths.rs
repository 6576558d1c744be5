//! Config file search order.
//!
//! Priority, highest first:
//! 1. An explicit path (`--file`, `--config`, `ADO_CONFIG`), taken as-is
//! 2. `$XDG_CONFIG_HOME/ado/config.yaml`, or `~/.config/ado/config.yaml` when unset
//! 3. `~/.ado/config.yaml`

use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable that overrides the config root.
pub const CONFIG_ROOT_ENV: &str = "XDG_CONFIG_HOME";

const APP_DIR: &str = "ado";
const LEGACY_APP_DIR: &str = ".ado";
const CONFIG_FILE: &str = "config.yaml";

/// Outcome of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedConfig {
    /// The chosen file, or `None` when nothing was given and nothing exists.
    pub path: Option<PathBuf>,
    /// Every location considered, most-preferred first.
    pub sources: Vec<PathBuf>,
}

impl ResolvedConfig {
    /// Sources joined for a "searched: ..." message.
    pub fn sources_display(&self) -> String {
        self.sources
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Computes candidate config locations from an override root and a home directory.
///
/// Empty paths are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathResolver {
    config_root: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(config_root: Option<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            config_root: non_empty(config_root),
            home_dir: non_empty(home_dir),
        }
    }

    /// Reads the config root override from `XDG_CONFIG_HOME`.
    pub fn from_env(home_dir: Option<&Path>) -> Self {
        let config_root = std::env::var_os(CONFIG_ROOT_ENV).map(PathBuf::from);
        Self::new(config_root, home_dir.map(Path::to_path_buf))
    }

    /// The default search list, excluding any explicit path.
    pub fn search_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(root) = &self.config_root {
            paths.push(root.join(APP_DIR).join(CONFIG_FILE));
        } else if let Some(home) = &self.home_dir {
            paths.push(home.join(".config").join(APP_DIR).join(CONFIG_FILE));
        }

        if let Some(home) = &self.home_dir {
            paths.push(home.join(LEGACY_APP_DIR).join(CONFIG_FILE));
        }

        paths
    }

    /// Pick the config file to use.
    ///
    /// An explicit path wins without an existence check; the validator reports a
    /// missing file. Otherwise the first existing default candidate is chosen.
    pub fn resolve(&self, explicit: Option<&Path>) -> ResolvedConfig {
        let defaults = self.search_paths();

        if let Some(explicit) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            debug!(path = %explicit.display(), "using explicit config path");
            let mut sources = Vec::with_capacity(defaults.len() + 1);
            sources.push(explicit.to_path_buf());
            sources.extend(defaults);
            return ResolvedConfig {
                path: Some(explicit.to_path_buf()),
                sources,
            };
        }

        let path = defaults
            .iter()
            .find(|candidate| {
                let exists = candidate.exists();
                debug!(candidate = %candidate.display(), exists, "probed config candidate");
                exists
            })
            .cloned();

        ResolvedConfig {
            path,
            sources: defaults,
        }
    }
}

/// Resolve the config path using the process environment for the override root.
pub fn resolve_config_path(explicit: Option<&Path>, home_dir: Option<&Path>) -> ResolvedConfig {
    PathResolver::from_env(home_dir).resolve(explicit)
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
