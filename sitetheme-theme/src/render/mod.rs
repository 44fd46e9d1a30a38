//! # Theme File Rendering
//!
//! Turns a [ThemeConfig] into the files a generated site loads at runtime:
//!
//! - **`theme.css`**: palette, typography and spacing variables plus the base,
//!   layout, component, utility and responsive rules ([render_theme_css])
//! - **`config.js`**: the theme as `window.THEME_CONFIG` with its helper
//!   functions ([render_config_js])
//! - **`utilities.css`**: animations, focus states and print rules
//!   ([render_utilities_css])
//!
//! Rendering is pure. The generation timestamp is passed in so output is
//! reproducible; writing to disk is left to the caller.

use chrono::NaiveDateTime;

use crate::config::ThemeConfig;
use crate::error::ThemeResult;

mod css;
mod script;
mod utilities;

pub use css::render_theme_css;
pub use script::{escape_js, render_config_js};
pub use utilities::render_utilities_css;

/// One of the files making up a site theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeFile {
    /// `theme.css`
    Stylesheet,
    /// `config.js`
    Config,
    /// `utilities.css`
    Utilities,
}

impl ThemeFile {
    /// Every theme file, in generation order.
    pub const ALL: [ThemeFile; 3] = [ThemeFile::Stylesheet, ThemeFile::Config, ThemeFile::Utilities];

    /// The file name inside a theme directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ThemeFile::Stylesheet => "theme.css",
            ThemeFile::Config => "config.js",
            ThemeFile::Utilities => "utilities.css",
        }
    }

    /// Render this file for `config`.
    pub fn render(&self, config: &ThemeConfig, generated_at: NaiveDateTime) -> ThemeResult<String> {
        Ok(match self {
            ThemeFile::Stylesheet => render_theme_css(config, generated_at),
            ThemeFile::Config => render_config_js(config, generated_at)?,
            ThemeFile::Utilities => render_utilities_css(),
        })
    }
}

pub(crate) fn timestamp(generated_at: NaiveDateTime) -> String {
    generated_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}
