use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// The known vocabulary of color role names.
///
/// Theme configs are not limited to these roles, any string key is accepted in
/// the color map. The known roles are the ones `theme.css` always defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    // Core palette
    Primary,
    Secondary,
    Accent,
    Background,

    // Text
    Text,
    TextSecondary,

    // Surfaces
    Surface,
    Border,

    // Status
    Success,
    Warning,
    Error,
    Info,
}

impl ColorRole {
    /// Every known role, in the order they appear in generated stylesheets.
    pub const ALL: [ColorRole; 12] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::Surface,
        ColorRole::Border,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Info,
    ];

    /// The key this role uses in a theme config's color map.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "textSecondary",
            ColorRole::Surface => "surface",
            ColorRole::Border => "border",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
        }
    }

    /// Look a role up by its color map key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == key)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ColorRole {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A value stored in the loosely typed parts of a theme config
/// (`content`, `layout` and any unrecognised keys).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    /// An explicit `null`, kept so the key survives into `config.js`.
    Null,
    /// A boolean value, e.g. `sticky = true`.
    Flag(bool),
    /// A numeric value.
    Number(f64),
    /// A string value.
    Text(String),
    /// A sequence of values, e.g. feature highlights or SEO keywords.
    List(Vec<ThemeValue>),
    /// A nested mapping, preserving key order.
    Map(IndexMap<String, ThemeValue>),
}

impl ThemeValue {
    /// Whether this is an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ThemeValue::Null)
    }

    /// Get the string value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ThemeValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the items, if this is a list.
    pub fn as_list(&self) -> Option<&[ThemeValue]> {
        match self {
            ThemeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries, if this is a map.
    pub fn as_map(&self) -> Option<&IndexMap<String, ThemeValue>> {
        match self {
            ThemeValue::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Text(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::Text(value)
    }
}

impl From<bool> for ThemeValue {
    fn from(value: bool) -> Self {
        ThemeValue::Flag(value)
    }
}

impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        ThemeValue::Number(value)
    }
}

impl<T: Into<ThemeValue>> From<Vec<T>> for ThemeValue {
    fn from(items: Vec<T>) -> Self {
        ThemeValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Deserialize an optional scalar that may arrive as a string or a number
/// (`"700"` or `700`), keeping its string form.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Int(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Flag(value) => value.to_string(),
    }))
}

/// Deserialize an optional map, dropping entries whose value is `null` so
/// they resolve like absent keys.
pub(crate) fn drop_nulls<'de, D, T>(deserializer: D) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<IndexMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
    }))
}

/// Deserialize a value, treating `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_keys_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_key(role.as_str()), Some(role));
        }
        assert_eq!(ColorRole::from_key("textsecondary"), None);
        assert_eq!(ColorRole::TextSecondary.to_string(), "textSecondary");
    }

    #[test]
    fn theme_value_picks_closest_variant() {
        let value: ThemeValue = serde_json::from_str(
            r#"{"sticky": true, "style": "split", "items": ["a", "b"], "columns": 3}"#,
        )
        .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["sticky"].as_bool(), Some(true));
        assert_eq!(map["style"].as_str(), Some("split"));
        assert_eq!(map["items"].as_list().map(|items| items.len()), Some(2));
        assert_eq!(map["columns"].as_f64(), Some(3.0));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["sticky", "style", "items", "columns"]);
    }

    #[test]
    fn null_is_a_value() {
        let value: ThemeValue =
            serde_json::from_str(r#"{"tagline": null, "items": ["a", null]}"#).unwrap();
        let map = value.as_map().unwrap();
        assert!(map["tagline"].is_null());
        assert_eq!(map["items"].as_list().map(|items| items[1].is_null()), Some(true));
        assert_eq!(map["tagline"].as_str(), None);
        assert_eq!(serde_json::to_string(&map["tagline"]).unwrap(), "null");
    }
}
