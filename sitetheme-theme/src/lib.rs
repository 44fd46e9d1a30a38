#![warn(missing_docs)]

//! # Sitetheme Theming
//!
//! The theme model for generated websites, the two operations sites use at
//! runtime, and the renderers that produce a site's theme files.
//!
//! ## Overview
//!
//! - **[ThemeConfig](config::ThemeConfig)**: colors, typography, design knobs, copy, layout and SEO
//! - **[get_color](config::ThemeConfig::get_color)**: role lookup with a `#000000` fallback
//! - **[apply_theme](config::ThemeConfig::apply_theme)**: one `--theme-<role>` variable per color
//! - **[StyleRoot](apply::StyleRoot)**: where variables are written; [StyleMap](apply::StyleMap) keeps them in memory
//! - **[ThemeManager](manager::ThemeManager)**: holds the current theme, last load wins
//! - **[render]**: `theme.css`, `config.js` and `utilities.css`
//!
//! ## Quick Start
//!
//! ```rust
//! use sitetheme_theme::apply::StyleMap;
//! use sitetheme_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::new()
//!     .with_color("primary", "#000000")
//!     .with_color("accent", "#FFD700");
//!
//! assert_eq!(config.get_color("accent"), "#FFD700");
//! assert_eq!(config.get_color("warning"), "#000000");
//!
//! let mut root = StyleMap::new();
//! config.apply_theme(&mut root);
//! assert_eq!(root.get("--theme-accent"), Some("#FFD700"));
//! ```
//!
//! ## Missing Values
//!
//! Nothing in a theme is required. Lookups never fail: an absent color role
//! resolves to [FALLBACK_COLOR](palette::FALLBACK_COLOR), and the renderers
//! substitute per-role and per-token defaults.

/// Contains the [apply::StyleRoot] trait and the in-memory [apply::StyleMap].
pub mod apply;
/// Contains the [config::ThemeConfig] data model and its loaders.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [manager::ThemeManager] holding the current theme.
pub mod manager;
/// Contains color defaults and presentation variable naming.
pub mod palette;
/// Contains [properties::ColorRole] and [properties::ThemeValue].
pub mod properties;
/// Contains the theme file renderers.
pub mod render;
/// Contains the [serde_color::HexColor] type.
pub mod serde_color;
/// Contains design token resolution.
pub mod tokens;
