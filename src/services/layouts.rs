//! Layout loading service.
//!
//! Decides which layout table a session runs with: an explicit path, the
//! path from configuration, or the built-in N'Ko layout.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{config::Config, models::LayoutTable, parser};

/// Where a resolved layout came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// Compiled-in N'Ko layout
    Builtin,
    /// Layout file given on the command line
    Argument(PathBuf),
    /// Layout file named in the configuration
    Config(PathBuf),
}

impl std::fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::Argument(path) | Self::Config(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Service for resolving and loading layout tables.
pub struct LayoutService;

impl LayoutService {
    /// Loads and validates a layout file.
    pub fn load(path: &Path) -> Result<LayoutTable> {
        parser::parse_layout_file(path)
            .with_context(|| format!("Failed to load layout from {}", path.display()))
    }

    /// Saves a layout table to a file.
    pub fn save(table: &LayoutTable, path: &Path) -> Result<()> {
        parser::save_layout_file(table, path)
            .with_context(|| format!("Failed to save layout to {}", path.display()))
    }

    /// Picks the layout source: explicit argument, then config, then built-in.
    #[must_use]
    pub fn source(explicit: Option<&Path>, config: &Config) -> LayoutSource {
        if let Some(path) = explicit {
            LayoutSource::Argument(path.to_path_buf())
        } else if let Some(path) = &config.paths.layout_file {
            LayoutSource::Config(path.clone())
        } else {
            LayoutSource::Builtin
        }
    }

    /// Resolves and loads the layout a session should use.
    ///
    /// A broken layout is a fatal configuration error; there is no fallback
    /// to the built-in layout once a file has been named.
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> Result<Arc<LayoutTable>> {
        let source = Self::source(explicit, config);
        let table = match &source {
            LayoutSource::Builtin => {
                LayoutTable::nko().context("Built-in N'Ko layout is inconsistent")?
            }
            LayoutSource::Argument(path) | LayoutSource::Config(path) => Self::load(path)?,
        };
        tracing::debug!(%source, name = table.name(), "using layout");
        Ok(Arc::new(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_precedence() {
        let mut config = Config::new();
        assert_eq!(LayoutService::source(None, &config), LayoutSource::Builtin);

        config.paths.layout_file = Some(PathBuf::from("from_config.toml"));
        assert_eq!(
            LayoutService::source(None, &config),
            LayoutSource::Config(PathBuf::from("from_config.toml"))
        );
        assert_eq!(
            LayoutService::source(Some(Path::new("arg.toml")), &config),
            LayoutSource::Argument(PathBuf::from("arg.toml"))
        );
    }

    #[test]
    fn test_resolve_builtin() {
        let table = LayoutService::resolve(None, &Config::new()).unwrap();
        assert_eq!(table.name(), crate::models::NKO_LAYOUT_NAME);
    }

    #[test]
    fn test_resolve_broken_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"x\"\nkeys = []\n").unwrap();

        assert!(LayoutService::resolve(Some(&path), &Config::new()).is_err());
    }
}
