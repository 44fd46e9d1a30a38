//! # Presentation Roots
//!
//! A [StyleRoot] is wherever presentation variables end up: a document's root
//! element, a template context, or the in-memory [StyleMap] shipped here.
//! [ThemeConfig::apply_theme](crate::config::ThemeConfig::apply_theme) writes
//! to it; it never reads back.

use std::fmt::{self, Write};

use indexmap::IndexMap;

/// A target for named style variables.
pub trait StyleRoot {
    /// Set a variable, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);

    /// Remove a variable. Removing an absent variable is a no-op.
    fn remove_property(&mut self, name: &str);
}

/// An ordered, in-memory set of style variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    properties: IndexMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a variable's value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Check whether a variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no variables are set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over variables in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the variables as a CSS rule for `selector`, e.g. `:root`.
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_css_rule(&mut css, selector);
        css
    }

    fn write_css_rule(&self, out: &mut impl Write, selector: &str) -> fmt::Result {
        writeln!(out, "{selector} {{")?;
        for (name, value) in self.iter() {
            writeln!(out, "  {name}: {value};")?;
        }
        writeln!(out, "}}")
    }
}

impl StyleRoot for StyleMap {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }
}
