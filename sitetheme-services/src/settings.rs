// SPDX-License-Identifier: MIT OR Apache-2.0
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming a TOML settings file.
pub const CONFIG_ENV: &str = "SITETHEME_CONFIG";
/// Environment variable overriding the themes directory.
pub const THEMES_DIR_ENV: &str = "SITETHEME_THEMES_DIR";

const DEFAULT_THEMES_DIR: &str = "static/themes";

/// Settings file layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorSection,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorSection {
    pub themes_dir: Option<PathBuf>,
    pub generate_utilities: Option<bool>,
}

/// Resolved settings for theme file generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Directory holding one subdirectory per site.
    pub themes_dir: PathBuf,
    /// Whether `utilities.css` is written alongside the other files.
    pub generate_utilities: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            generate_utilities: true,
        }
    }
}

impl GeneratorSettings {
    /// Settings using `themes_dir` and defaults for everything else.
    pub fn with_themes_dir(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            ..Self::default()
        }
    }

    /// Load settings in precedence order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. The TOML file named by `SITETHEME_CONFIG`
    /// 3. `SITETHEME_THEMES_DIR`
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();

        if let Ok(config_path) = std::env::var(CONFIG_ENV) {
            settings.load_file(Path::new(&config_path))?;
        }

        if let Ok(themes_dir) = std::env::var(THEMES_DIR_ENV) {
            settings.themes_dir = PathBuf::from(themes_dir);
        }

        log::debug!("Generator settings: {:?}", settings);
        Ok(settings)
    }

    /// Like [GeneratorSettings::from_env], but falls back to the defaults
    /// when the settings file cannot be read.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            log::warn!("Failed to load generator settings: {:#}", e);
            Self::default()
        })
    }

    /// Merge a TOML settings file into these settings.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading generator settings from: {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        self.load_toml(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))
    }

    /// Merge TOML settings content into these settings.
    pub fn load_toml(&mut self, content: &str) -> Result<()> {
        let config: Config = toml::from_str(content)?;
        self.merge(config);
        Ok(())
    }

    fn merge(&mut self, other: Config) {
        if let Some(themes_dir) = other.generator.themes_dir {
            self.themes_dir = themes_dir;
        }
        if let Some(generate_utilities) = other.generator.generate_utilities {
            self.generate_utilities = generate_utilities;
        }
        for section in other.other.keys() {
            log::debug!("Ignoring unknown settings section [{}]", section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.themes_dir, PathBuf::from("static/themes"));
        assert!(settings.generate_utilities);
    }

    #[test]
    fn merge_overrides_only_present_keys() {
        let mut settings = GeneratorSettings::with_themes_dir("/srv/themes");
        settings
            .load_toml(
                r#"
                [generator]
                generate_utilities = false

                [server]
                port = 8080
                "#,
            )
            .unwrap();

        assert_eq!(settings.themes_dir, PathBuf::from("/srv/themes"));
        assert!(!settings.generate_utilities);
    }

    #[test]
    fn load_file_reports_missing_file() {
        let mut settings = GeneratorSettings::default();
        let err = settings
            .load_file(Path::new("/nonexistent/sitetheme.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut settings = GeneratorSettings::default();
        assert!(settings.load_toml("[generator\nthemes_dir = 3").is_err());
        assert_eq!(settings, GeneratorSettings::default());
    }

    // The only test touching the process environment, so nothing races it.
    #[test]
    fn from_env_layers_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitetheme.toml");
        std::fs::write(
            &path,
            "[generator]\nthemes_dir = \"/from/file\"\ngenerate_utilities = false\n",
        )
        .unwrap();

        std::env::set_var(CONFIG_ENV, &path);
        std::env::remove_var(THEMES_DIR_ENV);
        let from_file = GeneratorSettings::from_env().unwrap();
        assert_eq!(from_file.themes_dir, PathBuf::from("/from/file"));
        assert!(!from_file.generate_utilities);

        std::env::set_var(THEMES_DIR_ENV, "/from/env");
        let from_env = GeneratorSettings::from_env().unwrap();
        assert_eq!(from_env.themes_dir, PathBuf::from("/from/env"));
        assert!(!from_env.generate_utilities);

        std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
        std::env::remove_var(THEMES_DIR_ENV);
        assert!(GeneratorSettings::from_env().is_err());
        assert_eq!(GeneratorSettings::from_env_or_default(), GeneratorSettings::default());

        std::env::remove_var(CONFIG_ENV);
        assert_eq!(GeneratorSettings::from_env().unwrap(), GeneratorSettings::default());
    }
}
