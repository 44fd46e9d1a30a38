use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::config::ThemeConfig;
use crate::error::ThemeResult;
use crate::palette::{FALLBACK_COLOR, VARIABLE_PREFIX};
use crate::render::timestamp;

/// Render `config.js`: the theme as a `window.THEME_CONFIG` object literal,
/// followed by the `getColor` and `applyTheme` helpers.
///
/// Sections appear in the order templateId, title, description, colors,
/// typography, design, content, layout, seo; absent ones are skipped.
pub fn render_config_js(config: &ThemeConfig, generated_at: NaiveDateTime) -> ThemeResult<String> {
    let sections = match serde_json::to_value(config)? {
        Value::Object(sections) => sections,
        _ => Map::new(),
    };

    let mut js = String::with_capacity(2048);
    js.push_str("// AI Generated Enhanced Theme Config\n");
    js.push_str(&format!("// Generated at: {}\n", timestamp(generated_at)));

    if sections.is_empty() {
        js.push_str("window.THEME_CONFIG = {};\n\n");
    } else {
        let body: Vec<String> = sections
            .iter()
            .map(|(key, value)| format!("  {}: {}", js_key(key), section_literal(value)))
            .collect();
        js.push_str("window.THEME_CONFIG = {\n");
        js.push_str(&body.join(",\n"));
        js.push_str("\n};\n\n");
    }

    js.push_str(&helpers());
    Ok(js)
}

fn helpers() -> String {
    format!(
        "// Helper functions
window.THEME_CONFIG.getColor = function(colorName) {{
  return (this.colors || {{}})[colorName] || '{FALLBACK_COLOR}';
}};

window.THEME_CONFIG.applyTheme = function() {{
  const root = document.documentElement;
  Object.entries(this.colors || {{}}).forEach(([key, value]) => {{
    root.style.setProperty(`{VARIABLE_PREFIX}${{key}}`, value);
  }});
}};
"
    )
}

/// Top-level sections spread their entries over lines; anything nested
/// deeper stays inline.
fn section_literal(value: &Value) -> String {
    match value {
        Value::Object(entries) if !entries.is_empty() => {
            let lines: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("    {}: {}", js_key(key), inline_literal(value)))
                .collect();
            format!("{{\n{}\n  }}", lines.join(",\n"))
        },
        other => inline_literal(other),
    }
}

fn inline_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => format!("'{}'", escape_js(text)),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(inline_literal).collect();
            format!("[{}]", items.join(", "))
        },
        Value::Object(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}: {}", js_key(key), inline_literal(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        },
    }
}

/// Object keys are written bare when they are identifiers, quoted otherwise.
fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        key.to_string()
    } else {
        format!("'{}'", escape_js(key))
    }
}

/// Escape a string for a single-quoted JavaScript literal.
pub fn escape_js(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
