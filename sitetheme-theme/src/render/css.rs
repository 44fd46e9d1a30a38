use std::fmt::{self, Write};

use chrono::NaiveDateTime;

use crate::config::ThemeConfig;
use crate::palette::{variable_name, DARK_MODE_OVERRIDES};
use crate::properties::ColorRole;
use crate::render::timestamp;
use crate::tokens;

const BANNER_RULE: &str = "===============================";

/// Render `theme.css`.
pub fn render_theme_css(config: &ThemeConfig, generated_at: NaiveDateTime) -> String {
    let mut css = String::with_capacity(12 * 1024);
    // Writing into a String cannot fail.
    let _ = write_theme_css(&mut css, config, generated_at);
    css
}

fn write_theme_css(
    out: &mut String,
    config: &ThemeConfig,
    generated_at: NaiveDateTime,
) -> fmt::Result {
    writeln!(out, "/* AI Generated Enhanced Theme CSS */")?;
    writeln!(out, "/* Generated at: {} */", timestamp(generated_at))?;
    writeln!(out)?;

    write_root_variables(out, config)?;
    write_dark_mode(out)?;
    out.push_str(BASE_STYLES);
    write_layout(out, config)?;
    out.push_str(COMPONENT_STYLES);
    out.push_str(UTILITY_CLASSES);
    out.push_str(RESPONSIVE_STYLES);
    Ok(())
}

fn write_banner(out: &mut String, indent: &str, title: &str) -> fmt::Result {
    writeln!(out, "{indent}/* {BANNER_RULE}")?;
    writeln!(out, "{indent}   {title}")?;
    writeln!(out, "{indent}   {BANNER_RULE} */")
}

fn write_var(out: &mut String, indent: &str, name: &str, value: &str) -> fmt::Result {
    writeln!(out, "{indent}{name}: {value};")
}

fn write_color(out: &mut String, config: &ThemeConfig, role: ColorRole) -> fmt::Result {
    let value = config.color_or(role, role.default_color());
    write_var(out, "  ", &variable_name(role.as_str()), value)
}

fn write_root_variables(out: &mut String, config: &ThemeConfig) -> fmt::Result {
    let typography = config.typography.as_ref();
    let design = config.design.as_ref();

    writeln!(out, ":root {{")?;
    write_banner(out, "  ", "COMPLETE COLOR PALETTE")?;
    for role in [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
    ] {
        write_color(out, config, role)?;
    }
    writeln!(out)?;

    let groups: [(&str, &[ColorRole]); 3] = [
        ("Text Colors", &[ColorRole::Text, ColorRole::TextSecondary]),
        ("Surface Colors", &[ColorRole::Surface, ColorRole::Border]),
        (
            "Status Colors",
            &[
                ColorRole::Success,
                ColorRole::Warning,
                ColorRole::Error,
                ColorRole::Info,
            ],
        ),
    ];
    for (heading, roles) in groups {
        writeln!(out, "  /* {heading} */")?;
        for role in roles {
            write_color(out, config, *role)?;
        }
        writeln!(out)?;
    }

    write_banner(out, "  ", "TYPOGRAPHY SYSTEM")?;
    write_var(out, "  ", "--theme-font-family", tokens::font_family(typography))?;
    write_var(out, "  ", "--theme-heading-weight", tokens::heading_weight(typography))?;
    write_var(out, "  ", "--theme-body-weight", tokens::body_weight(typography))?;
    write_var(out, "  ", "--theme-line-height", tokens::line_height(typography))?;
    writeln!(out)?;

    write_banner(out, "  ", "SPACING & LAYOUT")?;
    write_var(out, "  ", "--theme-spacing", tokens::spacing(design))?;
    write_var(out, "  ", "--theme-radius", tokens::radius(design))?;
    write_var(out, "  ", "--theme-shadow", tokens::shadow(design))?;
    writeln!(out)?;

    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_dark_mode(out: &mut String) -> fmt::Result {
    writeln!(out, "/* Dark Mode Variables */")?;
    writeln!(out, "@media (prefers-color-scheme: dark) {{")?;
    writeln!(out, "  :root {{")?;
    for (role, value) in DARK_MODE_OVERRIDES {
        write_var(out, "    ", &variable_name(role), value)?;
    }
    writeln!(out, "  }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_layout(out: &mut String, config: &ThemeConfig) -> fmt::Result {
    out.push_str(CONTAINER_STYLES);

    if let Some(header) = config.layout_region("header") {
        writeln!(out, ".header {{")?;
        writeln!(out, "  background-color: var(--theme-surface, #f8fafc);")?;
        writeln!(out, "  border-bottom: 1px solid var(--theme-border, #e2e8f0);")?;
        writeln!(out, "  padding: var(--theme-spacing, 1rem) 0;")?;
        if header.get("sticky").and_then(|v| v.as_bool()) == Some(true) {
            writeln!(out, "  position: sticky;")?;
            writeln!(out, "  top: 0;")?;
            writeln!(out, "  z-index: 100;")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        match header.get("style").and_then(|v| v.as_str()) {
            Some("centered") => out.push_str(HEADER_CENTERED),
            Some("split") => out.push_str(HEADER_SPLIT),
            _ => {},
        }
    }

    if let Some(hero) = config.layout_region("hero") {
        writeln!(out, ".hero {{")?;
        writeln!(
            out,
            "  background: linear-gradient(135deg, var(--theme-primary), var(--theme-accent));"
        )?;
        writeln!(out, "  color: white;")?;
        writeln!(out, "  padding: 4rem 0;")?;
        writeln!(out, "  text-align: center;")?;
        writeln!(out, "  position: relative;")?;
        writeln!(out, "  overflow: hidden;")?;
        match hero.get("height").and_then(|v| v.as_str()) {
            Some("viewport") => {
                writeln!(out, "  min-height: 100vh;")?;
                writeln!(out, "  display: flex;")?;
                writeln!(out, "  align-items: center;")?;
            },
            Some("large") => writeln!(out, "  padding: 6rem 0;")?,
            _ => {},
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        if hero.get("layout").and_then(|v| v.as_str()) == Some("split") {
            out.push_str(HERO_SPLIT);
        }
    }

    Ok(())
}

const BASE_STYLES: &str = "\
/* ===============================
   BASE STYLES
   =============================== */
* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--theme-font-family);
  font-weight: var(--theme-body-weight);
  line-height: var(--theme-line-height);
  background-color: var(--theme-background);
  color: var(--theme-text);
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

/* ===============================
   TYPOGRAPHY
   =============================== */
h1, h2, h3, h4, h5, h6 {
  font-weight: var(--theme-heading-weight);
  line-height: 1.2;
  margin-bottom: var(--theme-spacing);
  color: var(--theme-text);
}

h1 { font-size: 3rem; }
h2 { font-size: 2.25rem; }
h3 { font-size: 1.875rem; }
h4 { font-size: 1.5rem; }
h5 { font-size: 1.25rem; }
h6 { font-size: 1.125rem; }

p {
  margin-bottom: var(--theme-spacing);
  line-height: var(--theme-line-height);
}

/* Text Utility Classes */
.text-primary { color: var(--theme-primary); }
.text-secondary { color: var(--theme-textSecondary); }
.text-success { color: var(--theme-success); }
.text-warning { color: var(--theme-warning); }
.text-error { color: var(--theme-error); }
.text-info { color: var(--theme-info); }

";

const CONTAINER_STYLES: &str = "\
/* Layout Components */
.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 var(--theme-spacing, 1rem);
}

";

const HEADER_CENTERED: &str = "\
.header-content {
  text-align: center;
}

";

const HEADER_SPLIT: &str = "\
.header-content {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

";

const HERO_SPLIT: &str = "\
.hero-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

@media (max-width: 768px) {
  .hero-content {
    grid-template-columns: 1fr;
    text-align: center;
  }
}

";

const COMPONENT_STYLES: &str = "\
/* ===============================
   ENHANCED COMPONENT STYLES
   =============================== */
.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  font-weight: 500;
  text-decoration: none;
  border: none;
  border-radius: var(--theme-radius);
  cursor: pointer;
  transition: all 0.2s ease;
  text-align: center;
  font-size: 0.875rem;
  line-height: 1.25;
  font-family: var(--theme-font-family);
}

.btn:focus {
  outline: 2px solid var(--theme-primary);
  outline-offset: 2px;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

.btn-primary {
  background-color: var(--theme-primary);
  color: white;
  box-shadow: var(--theme-shadow);
}

.btn-primary:hover:not(:disabled) {
  transform: translateY(-1px);
  box-shadow: 0 4px 12px rgba(59, 130, 246, 0.25);
}

.btn-secondary {
  background-color: var(--theme-surface);
  color: var(--theme-text);
  border: 1px solid var(--theme-border);
}

.btn-secondary:hover:not(:disabled) {
  background-color: var(--theme-border);
}

.btn-accent {
  background-color: var(--theme-accent);
  color: white;
  box-shadow: var(--theme-shadow);
}

.btn-accent:hover:not(:disabled) {
  transform: translateY(-1px);
  box-shadow: 0 4px 12px rgba(16, 185, 129, 0.25);
}

.card {
  background-color: var(--theme-surface);
  border: 1px solid var(--theme-border);
  border-radius: var(--theme-radius);
  padding: var(--theme-spacing);
  box-shadow: var(--theme-shadow);
  transition: box-shadow 0.2s ease;
}

.card:hover {
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: calc(var(--theme-spacing) * 1.5);
  margin: 3rem 0;
}

.products-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: calc(var(--theme-spacing) * 2);
}

";

const UTILITY_CLASSES: &str = "\
/* ===============================
   ENHANCED UTILITY CLASSES
   =============================== */
/* Text Alignment */
.text-center { text-align: center; }
.text-left { text-align: left; }
.text-right { text-align: right; }

/* Margins */
.mb-1 { margin-bottom: 0.5rem; }
.mb-2 { margin-bottom: var(--theme-spacing); }
.mb-3 { margin-bottom: calc(var(--theme-spacing) * 1.5); }
.mb-4 { margin-bottom: calc(var(--theme-spacing) * 2); }
.mb-8 { margin-bottom: calc(var(--theme-spacing) * 4); }
.mb-12 { margin-bottom: calc(var(--theme-spacing) * 6); }

.mt-1 { margin-top: 0.5rem; }
.mt-2 { margin-top: var(--theme-spacing); }
.mt-3 { margin-top: calc(var(--theme-spacing) * 1.5); }
.mt-4 { margin-top: calc(var(--theme-spacing) * 2); }
.mt-8 { margin-top: calc(var(--theme-spacing) * 4); }

.ml-2 { margin-left: 0.5rem; }
.ml-4 { margin-left: var(--theme-spacing); }

/* Padding */
.py-8 { padding: calc(var(--theme-spacing) * 4) 0; }
.py-16 { padding: calc(var(--theme-spacing) * 8) 0; }
.py-24 { padding: calc(var(--theme-spacing) * 12) 0; }

.px-4 { padding: 0 var(--theme-spacing); }
.px-8 { padding: 0 calc(var(--theme-spacing) * 2); }

";

const RESPONSIVE_STYLES: &str = "\
/* ===============================
   RESPONSIVE DESIGN
   =============================== */
@media (max-width: 1024px) {
  .features-grid {
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: var(--theme-spacing);
  }
}

@media (max-width: 768px) {
  .container {
    padding: 0 var(--theme-spacing);
  }

  h1 { font-size: 2.25rem; }
  h2 { font-size: 1.875rem; }
  h3 { font-size: 1.5rem; }

  .hero {
    padding: calc(var(--theme-spacing) * 3) 0;
  }

  .features-grid {
    grid-template-columns: 1fr;
    gap: var(--theme-spacing);
  }
}

@media (max-width: 480px) {
  h1 { font-size: 1.875rem; }
  h2 { font-size: 1.5rem; }
  h3 { font-size: 1.25rem; }
}

/* ===============================
   ACCESSIBILITY
   =============================== */
@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

@keyframes spin {
  0% { transform: rotate(0deg); }
  100% { transform: rotate(360deg); }
}

.loading-spinner {
  width: 50px;
  height: 50px;
  border: 3px solid var(--theme-border);
  border-top: 3px solid var(--theme-primary);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}
";
