use crate::error::{NbresetError, Result};
use crate::model::{FormatOptions, MAX_INDENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the current directory.
pub const PROJECT_CONFIG_FILENAME: &str = ".nbreset.json";
/// Looked up in the user's config directory.
pub const GLOBAL_CONFIG_FILENAME: &str = "config.json";

const DEFAULT_INDENT: usize = 4;

/// Configuration for nbreset, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NbresetConfig {
    /// Spaces per indentation level in rewritten notebooks
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Whether rewritten notebooks end with a newline
    #[serde(default)]
    pub trailing_newline: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for NbresetConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            trailing_newline: false,
        }
    }
}

impl NbresetConfig {
    /// Load config from a file, returning `None` if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| NbresetError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| NbresetError::Config(format!("{}: {}", path.display(), e)))?;
        if config.indent > MAX_INDENT {
            return Err(NbresetError::Config(format!(
                "{}: indent {} exceeds the maximum of {}",
                path.display(),
                config.indent,
                MAX_INDENT
            )));
        }
        Ok(Some(config))
    }

    /// Project config in `project_dir` wins over global config in `global_dir`;
    /// defaults apply when neither exists.
    pub fn discover(project_dir: &Path, global_dir: Option<&Path>) -> Result<Self> {
        let mut candidates = vec![project_dir.join(PROJECT_CONFIG_FILENAME)];
        if let Some(dir) = global_dir {
            candidates.push(dir.join(GLOBAL_CONFIG_FILENAME));
        }

        for path in candidates {
            if let Some(config) = Self::load_file(&path)? {
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    pub fn format(&self) -> FormatOptions {
        FormatOptions {
            indent: self.indent,
            trailing_newline: self.trailing_newline,
        }
    }
}

/// Where the global config file lives on this platform.
pub fn global_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "nbreset", "nbreset")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NbresetConfig::default();
        assert_eq!(config.indent, 4);
        assert!(!config.trailing_newline);
        assert_eq!(config.format(), FormatOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let loaded = NbresetConfig::load_file(dir.path().join("none.json")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&path, r#"{"trailing_newline": true}"#).unwrap();

        let loaded = NbresetConfig::load_file(&path).unwrap().unwrap();
        assert_eq!(loaded.indent, 4);
        assert!(loaded.trailing_newline);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&path, "{ indent: ").unwrap();

        let err = NbresetConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, NbresetError::Config(_)));
    }

    #[test]
    fn test_oversized_indent_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILENAME);

        fs::write(&path, r#"{"indent": 17}"#).unwrap();
        let err = NbresetConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, NbresetError::Config(ref msg) if msg.contains("exceeds")));

        fs::write(&path, r#"{"indent": 18446744073709551615}"#).unwrap();
        assert!(NbresetConfig::load_file(&path).is_err());

        fs::write(&path, r#"{"indent": 16}"#).unwrap();
        let loaded = NbresetConfig::load_file(&path).unwrap().unwrap();
        assert_eq!(loaded.indent, 16);
    }

    #[test]
    fn test_discover_prefers_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            global.path().join(GLOBAL_CONFIG_FILENAME),
            r#"{"indent": 8}"#,
        )
        .unwrap();

        let found = NbresetConfig::discover(project.path(), Some(global.path())).unwrap();
        assert_eq!(found.indent, 8);

        fs::write(
            project.path().join(PROJECT_CONFIG_FILENAME),
            r#"{"indent": 2, "trailing_newline": true}"#,
        )
        .unwrap();

        let found = NbresetConfig::discover(project.path(), Some(global.path())).unwrap();
        assert_eq!(found.indent, 2);
    }

    #[test]
    fn test_discover_without_any_file() {
        let project = TempDir::new().unwrap();
        let found = NbresetConfig::discover(project.path(), None).unwrap();
        assert_eq!(found, NbresetConfig::default());
    }
}
