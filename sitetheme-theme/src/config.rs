//! # Theme Configuration
//!
//! The [ThemeConfig] data model describes the visual and textual presentation
//! of a generated website: colors, typography, design knobs, copy text, layout
//! choices and SEO data.
//!
//! ## Overview
//!
//! - **[ThemeConfig]**: the config value, passed explicitly to whatever renders it
//! - **[Typography]**, **[Design]**, **[Seo]**: the sections with a known vocabulary
//! - **Loosely typed bags**: `content` and `layout` hold [ThemeValue]s
//!
//! No field is required and nothing is validated on load. Missing colors
//! resolve to [FALLBACK_COLOR]; [ThemeConfig::validate] lists malformed colors
//! for callers that want to be stricter.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sitetheme_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::from_json(r##"{
//!     "templateId": "modern-business",
//!     "colors": { "primary": "#000000", "accent": "#FFD700" }
//! }"##).unwrap();
//!
//! assert_eq!(config.get_color("accent"), "#FFD700");
//! assert_eq!(config.get_color("warning"), "#000000");
//! ```
//!
//! ## File Formats
//!
//! [ThemeConfig::from_file] reads `.json` and `.toml` documents with camelCase keys:
//!
//! ```toml
//! templateId = "modern-business"
//! title = "Acme"
//!
//! [colors]
//! primary = "#3B82F6"
//! accent = "#10B981"
//!
//! [layout.header]
//! sticky = true
//! style = "split"
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::apply::StyleRoot;
use crate::error::{ThemeError, ThemeResult};
use crate::palette::{variable_name, FALLBACK_COLOR};
use crate::properties::{drop_nulls, null_as_default, scalar_string, ThemeValue};
use crate::serde_color::HexColor;

/// A website theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Identifier of the template this theme was generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Role name to color value, in declaration order. Roles set to `null`
    /// are dropped on load.
    #[serde(default, deserialize_with = "drop_nulls", skip_serializing_if = "Option::is_none")]
    pub colors: Option<IndexMap<String, String>>,
    /// Font settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    /// Stylistic knobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<Design>,
    /// Free-form copy. Field names vary between templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, ThemeValue>>,
    /// Page region name to that region's options. Regions set to `null`
    /// are dropped on load.
    #[serde(default, deserialize_with = "drop_nulls", skip_serializing_if = "Option::is_none")]
    pub layout: Option<IndexMap<String, IndexMap<String, ThemeValue>>>,
    /// Search engine metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

/// Typography settings. Numeric weights are kept in their string form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font stack for body and headings.
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Heading font weight, e.g. `700`.
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub heading_weight: Option<String>,
    /// Body font weight.
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<String>,
    /// Body line height.
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    /// Keys outside the known vocabulary.
    #[serde(flatten)]
    pub other: IndexMap<String, ThemeValue>,
}

/// Design knobs. Values are open-ended keywords; see [crate::tokens].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Spacing scale: `compact`, `normal` or `spacious`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    /// Overall mood keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Corner radius keyword or a CSS length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    /// Shadow strength keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<String>,
    /// Visual style keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Keys outside the known vocabulary.
    #[serde(flatten)]
    pub other: IndexMap<String, ThemeValue>,
}

/// Search engine metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    /// Primary search keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,
    /// Additional search keywords.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Content language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Keys outside the known vocabulary.
    #[serde(flatten)]
    pub other: IndexMap<String, ThemeValue>,
}

impl ThemeConfig {
    /// Create an empty theme config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a theme config from JSON.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.log_issues();
        Ok(config)
    }

    /// Build a theme config from an already parsed JSON value, such as the
    /// theme object returned by a generation backend.
    pub fn from_value(value: serde_json::Value) -> ThemeResult<Self> {
        let config: Self = serde_json::from_value(value)?;
        config.log_issues();
        Ok(config)
    }

    /// Parse a theme config from TOML.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ThemeError::Serialization(e.to_string()))?;
        config.log_issues();
        Ok(config)
    }

    /// Load a theme config from a `.json` or `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        let parsed = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            },
        };

        let config = parsed.map_err(|e| match e {
            ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
            other => other,
        })?;
        log::info!("Loaded theme config from: {:?}", path);
        Ok(config)
    }

    /// Set a color role.
    pub fn with_color(mut self, role: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(IndexMap::new)
            .insert(role.into(), value.into());
        self
    }

    /// Set the template identifier.
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Set a layout option for a page region.
    pub fn with_layout_option(
        mut self,
        region: impl Into<String>,
        option: impl Into<String>,
        value: impl Into<ThemeValue>,
    ) -> Self {
        self.layout
            .get_or_insert_with(IndexMap::new)
            .entry(region.into())
            .or_default()
            .insert(option.into(), value.into());
        self
    }

    /// The configured color for `role`, or [FALLBACK_COLOR] when the role is absent.
    pub fn get_color(&self, role: impl AsRef<str>) -> &str {
        self.color_or(role, FALLBACK_COLOR)
    }

    /// The configured color for `role`, or `default` when the role is absent.
    pub fn color_or<'a>(&'a self, role: impl AsRef<str>, default: &'a str) -> &'a str {
        self.colors
            .as_ref()
            .and_then(|colors| colors.get(role.as_ref()))
            .map(String::as_str)
            .unwrap_or(default)
    }

    /// Iterate over the configured colors in declaration order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors
            .iter()
            .flat_map(|colors| colors.iter())
            .map(|(role, value)| (role.as_str(), value.as_str()))
    }

    /// Write one `--theme-<role>` variable per configured color onto `root`.
    pub fn apply_theme<R: StyleRoot + ?Sized>(&self, root: &mut R) {
        for (role, value) in self.colors() {
            root.set_property(&variable_name(role), value);
        }
    }

    /// The options of a layout region, if the theme defines it.
    pub fn layout_region(&self, region: &str) -> Option<&IndexMap<String, ThemeValue>> {
        self.layout.as_ref().and_then(|layout| layout.get(region))
    }

    /// Check every color for hex syntax. Nothing is rejected on load; this
    /// only reports.
    pub fn validate(&self) -> Vec<ThemeError> {
        self.colors()
            .filter(|(_, value)| HexColor::parse(value).is_err())
            .map(|(role, value)| ThemeError::invalid_color(role, value))
            .collect()
    }

    fn log_issues(&self) {
        for issue in self.validate() {
            log::warn!("Theme {:?}: {}", self.template_id.as_deref().unwrap_or("<unnamed>"), issue);
        }
    }
}
