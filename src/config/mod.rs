//! Config file resolution and validation
//!
//! Lookup order for the config file:
//! 1. Explicit path (`--file`, `--config`, `ADO_CONFIG`)
//! 2. `$XDG_CONFIG_HOME/ado/config.yaml` (or `~/.config/ado/config.yaml`)
//! 3. `~/.ado/config.yaml`
//!
//! Validation never mutates the file. Expected problems come back as issues in a
//! [`ValidationResult`]; only unexpected I/O failures are errors.

mod paths;
mod result;
mod schema;
mod suggest;
mod tree;
mod validate;

pub use paths::{resolve_config_path, PathResolver, ResolvedConfig, CONFIG_ROOT_ENV};
pub use result::{Severity, ValidationIssue, ValidationResult};
pub use schema::{is_known_key, ConfigSchema, KeyRule, KNOWN_KEYS, SUPPORTED_VERSION};
pub use suggest::suggest_key;
pub use tree::{find_key_line, parse_tree, Node, NodeKind, SyntaxError, SyntaxTree};
pub use validate::{validate, validate_content};
