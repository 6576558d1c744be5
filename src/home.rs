//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on some platforms, so integration tests cannot
//! redirect it by environment alone. `ado_home_dir()` checks `ADO_TEST_HOME` first
//! and falls back to `dirs::home_dir()`.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const ADO_TEST_HOME_VAR: &str = "ADO_TEST_HOME";

/// Get the home directory used for config lookup.
///
/// # Example
///
/// ```
/// use ado::home::ado_home_dir;
///
/// if let Some(home) = ado_home_dir() {
///     let fallback = home.join(".ado/config.yaml");
///     assert!(fallback.ends_with("config.yaml"));
/// }
/// ```
pub fn ado_home_dir() -> Option<PathBuf> {
    std::env::var(ADO_TEST_HOME_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// User cache directory, reported by `ado meta env`.
pub fn ado_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir()
}
