#![warn(missing_docs)]

//! Theme configuration and theme file generation for generated websites.

pub use sitetheme_services as services;
pub use sitetheme_theme as theme;

/// A "prelude" for users of sitetheme.
///
/// Importing this module brings into scope the types needed to load a theme,
/// query and apply its colors, and write a site's theme files.
///
/// ```rust
/// use sitetheme::prelude::*;
/// ```
pub mod prelude {
    pub use crate::services::{GeneratorSettings, ThemeFileService, ThemeFiles};
    pub use crate::theme::apply::{StyleMap, StyleRoot};
    pub use crate::theme::config::{Design, Seo, ThemeConfig, Typography};
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::manager::{SharedThemeManager, ThemeManager};
    pub use crate::theme::palette::{variable_name, FALLBACK_COLOR};
    pub use crate::theme::properties::{ColorRole, ThemeValue};
    pub use crate::theme::render::ThemeFile;
}
