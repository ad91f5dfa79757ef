//! Loader for script constant files.

use std::path::Path;

use crate::ScriptConstants;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loads script constants from TOML files.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Load constants from a TOML file, without defaults.
    pub fn load(path: &Path) -> LoadResult<ScriptConstants> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        let script = ScriptConstants::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script TOML {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), count = script.len(), "loaded script constants");
        Ok(script)
    }

    /// Built-in defaults, overlaid with `path` when given.
    pub fn load_with_defaults(path: Option<&Path>) -> LoadResult<ScriptConstants> {
        let mut script = ScriptConstants::defaults();
        if let Some(path) = path {
            script.merge(Self::load(path)?);
        }
        Ok(script)
    }
}
