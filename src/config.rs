//! Settings loaded from a TOML file.
//!
//! Everything is optional; a missing file means defaults. Example:
//!
//! ```toml
//! log_filter = "clic=debug"
//!
//! [limits]
//! max_commands = 16
//! max_options = 32
//! value_capacity = 1024
//! growable = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, MAX_COMMAND_COUNT, MAX_OPTION_COUNT, VALUE_CAPACITY};
use crate::core::arena::Growth;
use crate::error::{Error, Result};

/// Registry sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Commands one application may declare.
    pub max_commands: usize,
    /// Options one application may declare, global and scoped together.
    pub max_options: usize,
    /// Value buffer size in bytes, terminator slot included.
    pub value_capacity: usize,
    /// Grow the registries instead of refusing new declarations.
    pub growable: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_commands: MAX_COMMAND_COUNT,
            max_options: MAX_OPTION_COUNT,
            value_capacity: VALUE_CAPACITY,
            growable: false,
        }
    }
}

impl Limits {
    /// Longest accepted option value, in bytes.
    #[must_use]
    pub fn max_value_len(&self) -> usize {
        self.value_capacity.saturating_sub(1)
    }

    /// Arena growth policy these limits ask for.
    #[must_use]
    pub fn growth(&self) -> Growth {
        if self.growable {
            Growth::Doubling
        } else {
            Growth::Fixed
        }
    }

    /// Checks that every limit is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimits`] for a zero registry size on a fixed
    /// registry, or a value buffer too small to hold one byte.
    pub fn validate(&self) -> Result<()> {
        if !self.growable && self.max_commands == 0 {
            return Err(Error::InvalidLimits(
                "max_commands must be at least 1".to_string(),
            ));
        }
        if !self.growable && self.max_options == 0 {
            return Err(Error::InvalidLimits(
                "max_options must be at least 1".to_string(),
            ));
        }
        if self.value_capacity < 2 {
            return Err(Error::InvalidLimits(format!(
                "value_capacity must be at least 2, got {}",
                self.value_capacity
            )));
        }
        Ok(())
    }
}

/// Library and demo settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `tracing` filter directive used when no environment override is set.
    pub log_filter: Option<String>,
    /// Registry sizing.
    pub limits: Limits,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed TOML or unknown keys, and
    /// [`Error::InvalidLimits`] when the limits fail validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.limits.validate()?;
        Ok(settings)
    }

    /// Reads settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read, otherwise
    /// the errors of [`Settings::from_toml`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Default settings file for `app_name`: `<config dir>/<app_name>/config.toml`.
    #[must_use]
    pub fn default_path(app_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| Self::path_in(&dir, app_name))
    }

    /// Settings file for `app_name` under `config_dir`.
    #[must_use]
    pub fn path_in(config_dir: &Path, app_name: &str) -> PathBuf {
        config_dir.join(app_name).join(CONFIG_FILE_NAME)
    }

    /// Loads the default settings file for `app_name` if it exists.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`] when the file exists but is unusable.
    pub fn discover(app_name: &str) -> Result<Self> {
        match dirs::config_dir() {
            Some(dir) => Self::discover_in(&dir, app_name),
            None => Ok(Self::default()),
        }
    }

    /// [`Settings::discover`] rooted at `config_dir` instead of the user's
    /// config directory.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`] when the file exists but is unusable.
    pub fn discover_in(config_dir: &Path, app_name: &str) -> Result<Self> {
        let path = Self::path_in(config_dir, app_name);
        if !path.is_file() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading settings");
        Self::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_sizing() {
        let settings = Settings::default();
        assert_eq!(settings.limits.max_commands, 64);
        assert_eq!(settings.limits.max_options, 64);
        assert_eq!(settings.limits.value_capacity, 256);
        assert_eq!(settings.limits.max_value_len(), 255);
        assert_eq!(settings.limits.growth(), Growth::Fixed);
        assert!(settings.log_filter.is_none());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml(
            r#"
log_filter = "clic=debug"

[limits]
max_commands = 8
growable = true
"#,
        )
        .unwrap();

        assert_eq!(settings.log_filter.as_deref(), Some("clic=debug"));
        assert_eq!(settings.limits.max_commands, 8);
        assert_eq!(settings.limits.max_options, 64);
        assert_eq!(settings.limits.growth(), Growth::Doubling);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Settings::from_toml("[limits]\nmax_flags = 3\n");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let result = Settings::from_toml("[limits]\nvalue_capacity = 1\n");
        assert!(matches!(result, Err(Error::InvalidLimits(_))));

        let result = Settings::from_toml("[limits]\nmax_options = 0\n");
        assert!(matches!(result, Err(Error::InvalidLimits(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load(Path::new("/nonexistent/clic/config.toml"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[limits]\nmax_options = 3\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.limits.max_options, 3);
    }

    #[test]
    fn test_path_layout() {
        let path = Settings::path_in(Path::new("/etc/xdg"), "filetool");
        assert_eq!(path, Path::new("/etc/xdg/filetool/config.toml"));
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Some(path) = Settings::default_path("filetool") {
            assert!(path.ends_with("filetool/config.toml"));
        }
    }

    #[test]
    fn test_discover_without_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::discover_in(dir.path(), "filetool").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_discover_reads_app_file() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("filetool");
        std::fs::create_dir(&app_dir).unwrap();
        std::fs::write(app_dir.join(CONFIG_FILE_NAME), "log_filter = \"debug\"\n").unwrap();

        let settings = Settings::discover_in(dir.path(), "filetool").unwrap();
        assert_eq!(settings.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_discover_surfaces_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("filetool");
        std::fs::create_dir(&app_dir).unwrap();
        std::fs::write(app_dir.join(CONFIG_FILE_NAME), "limits = 3\n").unwrap();

        let result = Settings::discover_in(dir.path(), "filetool");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }
}
