// SPDX-License-Identifier: MIT OR Apache-2.0
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use sitetheme_theme::config::ThemeConfig;
use sitetheme_theme::error::{ThemeError, ThemeResult};
use sitetheme_theme::render::ThemeFile;
use smol::fs;

use crate::settings::GeneratorSettings;

/// Paths of the files written for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFiles {
    /// The site's theme directory.
    pub dir: PathBuf,
    /// Every file written, in generation order.
    pub written: Vec<PathBuf>,
}

/// Writes, checks and deletes the theme files of each site.
///
/// Every site gets its own directory under the themes directory, named by
/// its subdomain.
#[derive(Debug, Clone)]
pub struct ThemeFileService {
    settings: GeneratorSettings,
}

impl ThemeFileService {
    /// Create a service using settings from the environment.
    pub fn new() -> Self {
        Self::with_settings(GeneratorSettings::from_env_or_default())
    }

    /// Create a service with explicit settings.
    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Create a service writing under `themes_dir`.
    pub fn with_themes_dir(themes_dir: impl Into<PathBuf>) -> Self {
        Self::with_settings(GeneratorSettings::with_themes_dir(themes_dir))
    }

    /// The settings in use.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// The theme directory of a site.
    pub fn theme_dir(&self, subdomain: &str) -> ThemeResult<PathBuf> {
        validate_subdomain(subdomain)?;
        Ok(self.settings.themes_dir.join(subdomain))
    }

    /// Generate the theme files of a site, stamped with the current local time.
    pub async fn generate_theme_files(
        &self,
        subdomain: &str,
        config: &ThemeConfig,
    ) -> ThemeResult<ThemeFiles> {
        self.generate_theme_files_at(subdomain, config, Local::now().naive_local())
            .await
    }

    /// Generate the theme files of a site with an explicit timestamp.
    pub async fn generate_theme_files_at(
        &self,
        subdomain: &str,
        config: &ThemeConfig,
        generated_at: NaiveDateTime,
    ) -> ThemeResult<ThemeFiles> {
        let dir = self.theme_dir(subdomain)?;

        match self.write_files(&dir, config, generated_at).await {
            Ok(written) => {
                log::info!("Theme files generated for subdomain: {}", subdomain);
                Ok(ThemeFiles { dir, written })
            },
            Err(e) => {
                log::error!("Error generating theme files for {}: {}", subdomain, e);
                Err(e)
            },
        }
    }

    async fn write_files(
        &self,
        dir: &Path,
        config: &ThemeConfig,
        generated_at: NaiveDateTime,
    ) -> ThemeResult<Vec<PathBuf>> {
        fs::create_dir_all(dir).await?;

        let mut written = Vec::with_capacity(ThemeFile::ALL.len());
        for file in ThemeFile::ALL {
            let path = dir.join(file.file_name());
            if !self.is_enabled(file) {
                // A file left over from an earlier generation no longer matches.
                if path.is_file() {
                    fs::remove_file(&path).await?;
                    log::debug!("Removed stale {:?}", path);
                }
                continue;
            }
            let content = file.render(config, generated_at)?;
            fs::write(&path, content).await?;
            log::debug!("Wrote {:?}", path);
            written.push(path);
        }
        Ok(written)
    }

    fn is_enabled(&self, file: ThemeFile) -> bool {
        file != ThemeFile::Utilities || self.settings.generate_utilities
    }

    /// Whether all three theme files of a site exist.
    pub fn theme_files_exist(&self, subdomain: &str) -> bool {
        match self.theme_dir(subdomain) {
            Ok(dir) => ThemeFile::ALL
                .iter()
                .all(|file| dir.join(file.file_name()).is_file()),
            Err(_) => false,
        }
    }

    /// Delete a site's theme directory. A missing directory is not an error.
    pub async fn delete_theme_files(&self, subdomain: &str) -> ThemeResult<()> {
        let dir = self.theme_dir(subdomain)?;
        if !dir.exists() {
            return Ok(());
        }

        match fs::remove_dir_all(&dir).await {
            Ok(()) => {
                log::info!("Theme files deleted for subdomain: {}", subdomain);
                Ok(())
            },
            Err(e) => {
                log::error!("Error deleting theme files for {}: {}", subdomain, e);
                Err(e.into())
            },
        }
    }
}

impl Default for ThemeFileService {
    fn default() -> Self {
        Self::new()
    }
}

/// A subdomain must be one non-empty path component of ASCII alphanumerics,
/// `-` and `_`.
fn validate_subdomain(subdomain: &str) -> ThemeResult<()> {
    let valid = !subdomain.is_empty()
        && subdomain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ThemeError::invalid_subdomain(subdomain))
    }
}
