use crate::properties::ColorRole;

/// The color returned for a role the theme does not define.
pub const FALLBACK_COLOR: &str = "#000000";

/// Prefix applied to a role name to form its presentation variable.
pub const VARIABLE_PREFIX: &str = "--theme-";

/// Name of the presentation variable for a color role: `primary` becomes
/// `--theme-primary`. The role name is used verbatim.
pub fn variable_name(role: &str) -> String {
    format!("{VARIABLE_PREFIX}{role}")
}

impl ColorRole {
    /// The value generated stylesheets use when a theme leaves this role unset.
    pub fn default_color(&self) -> &'static str {
        match self {
            ColorRole::Primary => "#3B82F6",
            ColorRole::Secondary => "#6B7280",
            ColorRole::Accent => "#10B981",
            ColorRole::Background => "#FFFFFF",
            ColorRole::Text => "#1e293b",
            ColorRole::TextSecondary => "#64748b",
            ColorRole::Surface => "#f8fafc",
            ColorRole::Border => "#e2e8f0",
            ColorRole::Success => "#22c55e",
            ColorRole::Warning => "#f59e0b",
            ColorRole::Error => "#ef4444",
            ColorRole::Info => "#3b82f6",
        }
    }
}

/// Overrides emitted inside the `prefers-color-scheme: dark` block.
///
/// Themes carry no dark palette of their own, so these are fixed.
pub const DARK_MODE_OVERRIDES: [(&str, &str); 6] = [
    ("background", "#0f172a"),
    ("text", "#f1f5f9"),
    ("textSecondary", "#94a3b8"),
    ("surface", "#1e293b"),
    ("border", "#334155"),
    ("shadow", "0 2px 8px rgba(0, 0, 0, 0.3)"),
];
