use std::sync::{Arc, RwLock};

use crate::apply::StyleRoot;
use crate::config::ThemeConfig;
use crate::palette::{variable_name, FALLBACK_COLOR};

/// Holds the currently loaded theme config.
///
/// Loading replaces the previous config wholesale; nothing is merged. The
/// manager also remembers which variables it last applied so that switching
/// themes does not leave the previous theme's roles behind on the root.
#[derive(Debug, Default)]
pub struct ThemeManager {
    current: Option<Arc<ThemeConfig>>,
    applied: Vec<String>,
}

impl ThemeManager {
    /// Create a manager with no theme loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with `config` loaded.
    pub fn with_theme(config: ThemeConfig) -> Self {
        let mut manager = Self::new();
        manager.load(config);
        manager
    }

    /// Replace the current config, returning the previous one.
    pub fn load(&mut self, config: impl Into<Arc<ThemeConfig>>) -> Option<Arc<ThemeConfig>> {
        let config = config.into();
        log::info!(
            "Loading theme {:?}",
            config.template_id.as_deref().unwrap_or("<unnamed>")
        );
        self.current.replace(config)
    }

    /// Drop the current config.
    pub fn unload(&mut self) -> Option<Arc<ThemeConfig>> {
        self.current.take()
    }

    /// The current config, if any.
    pub fn current(&self) -> Option<Arc<ThemeConfig>> {
        self.current.clone()
    }

    /// Whether a config is loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Color lookup against the current config. With nothing loaded every
    /// role resolves to [FALLBACK_COLOR].
    pub fn get_color(&self, role: impl AsRef<str>) -> String {
        self.current
            .as_deref()
            .map_or(FALLBACK_COLOR, |config| config.get_color(role))
            .to_string()
    }

    /// Apply the current config to `root`, first removing variables from a
    /// previous application that the current config no longer defines.
    pub fn apply_theme<R: StyleRoot + ?Sized>(&mut self, root: &mut R) {
        let names: Vec<String> = self
            .current
            .iter()
            .flat_map(|config| config.colors())
            .map(|(role, _)| variable_name(role))
            .collect();

        for stale in self.applied.iter().filter(|name| !names.contains(name)) {
            log::debug!("Removing stale theme variable {}", stale);
            root.remove_property(stale);
        }

        if let Some(config) = &self.current {
            config.apply_theme(root);
        }
        self.applied = names;
    }
}

/// A thread-safe theme manager that can be shared across threads.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Create a new shared theme manager.
pub fn create_shared_theme_manager() -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::new()))
}

/// Create a shared theme manager with `config` loaded.
pub fn create_shared_theme_manager_with_theme(config: ThemeConfig) -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::with_theme(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::StyleMap;

    fn first() -> ThemeConfig {
        ThemeConfig::new()
            .with_template_id("first")
            .with_color("primary", "#000000")
            .with_color("accent", "#FFD700")
    }

    fn second() -> ThemeConfig {
        ThemeConfig::new()
            .with_template_id("second")
            .with_color("primary", "#3B82F6")
            .with_color("warning", "#f59e0b")
    }

    #[test]
    fn empty_manager_falls_back() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.get_color("primary"), "#000000");

        let mut root = StyleMap::new();
        manager.apply_theme(&mut root);
        assert!(root.is_empty());
    }

    #[test]
    fn last_loaded_wins_without_merging() {
        let mut manager = ThemeManager::with_theme(first());
        let previous = manager.load(second()).unwrap();
        assert_eq!(previous.template_id.as_deref(), Some("first"));

        assert_eq!(manager.get_color("primary"), "#3B82F6");
        assert_eq!(manager.get_color("warning"), "#f59e0b");
        assert_eq!(manager.get_color("accent"), "#000000");
    }

    #[test]
    fn switching_themes_clears_stale_variables() {
        let mut manager = ThemeManager::with_theme(first());
        let mut root = StyleMap::new();
        root.set_property("--page-gutter", "2rem");

        manager.apply_theme(&mut root);
        assert_eq!(root.get("--theme-accent"), Some("#FFD700"));

        manager.load(second());
        manager.apply_theme(&mut root);
        assert_eq!(root.get("--theme-primary"), Some("#3B82F6"));
        assert_eq!(root.get("--theme-warning"), Some("#f59e0b"));
        assert!(!root.contains("--theme-accent"));
        assert_eq!(root.get("--page-gutter"), Some("2rem"));
        assert_eq!(root.len(), 3);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut manager = ThemeManager::with_theme(first());
        let mut once = StyleMap::new();
        manager.apply_theme(&mut once);

        let mut twice = once.clone();
        manager.apply_theme(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn shared_manager_is_usable_across_threads() {
        let shared = create_shared_theme_manager();
        let writer = Arc::clone(&shared);
        std::thread::spawn(move || {
            writer.write().unwrap().load(first());
        })
        .join()
        .unwrap();

        assert_eq!(shared.read().unwrap().get_color("accent"), "#FFD700");
    }
}
