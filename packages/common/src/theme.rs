//! Global theme variables shared by the editor and the exporters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRIMARY_COLOR: &str = "#007bff";
pub const DEFAULT_SECONDARY_COLOR: &str = "#6c757d";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_BASE_FONT_SIZE: &str = "16px";

/// One of the four global style variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlobalStyleKey {
    PrimaryColor,
    SecondaryColor,
    FontFamily,
    BaseFontSize,
}

impl GlobalStyleKey {
    pub const ALL: [GlobalStyleKey; 4] = [
        GlobalStyleKey::PrimaryColor,
        GlobalStyleKey::SecondaryColor,
        GlobalStyleKey::FontFamily,
        GlobalStyleKey::BaseFontSize,
    ];

    /// camelCase name used in serialized state
    pub fn name(&self) -> &'static str {
        match self {
            GlobalStyleKey::PrimaryColor => "primaryColor",
            GlobalStyleKey::SecondaryColor => "secondaryColor",
            GlobalStyleKey::FontFamily => "fontFamily",
            GlobalStyleKey::BaseFontSize => "baseFontSize",
        }
    }

    /// CSS custom property the variable is materialized as
    pub fn css_variable(&self) -> &'static str {
        match self {
            GlobalStyleKey::PrimaryColor => "--primary-color",
            GlobalStyleKey::SecondaryColor => "--secondary-color",
            GlobalStyleKey::FontFamily => "--font-family",
            GlobalStyleKey::BaseFontSize => "--base-font-size",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            GlobalStyleKey::PrimaryColor => DEFAULT_PRIMARY_COLOR,
            GlobalStyleKey::SecondaryColor => DEFAULT_SECONDARY_COLOR,
            GlobalStyleKey::FontFamily => DEFAULT_FONT_FAMILY,
            GlobalStyleKey::BaseFontSize => DEFAULT_BASE_FONT_SIZE,
        }
    }
}

impl fmt::Display for GlobalStyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlobalStyleKey {
    type Err = String;

    /// Accepts the camelCase name or the CSS variable name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlobalStyleKey::ALL
            .into_iter()
            .find(|key| key.name() == s || key.css_variable() == s)
            .ok_or_else(|| format!("Unknown global style: {}", s))
    }
}

/// Global style variables (primary/secondary color, font family, base size)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_base_font_size")]
    pub base_font_size: String,
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_secondary_color() -> String {
    DEFAULT_SECONDARY_COLOR.to_string()
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_base_font_size() -> String {
    DEFAULT_BASE_FONT_SIZE.to_string()
}

impl GlobalStyles {
    pub fn get(&self, key: GlobalStyleKey) -> &str {
        match key {
            GlobalStyleKey::PrimaryColor => &self.primary_color,
            GlobalStyleKey::SecondaryColor => &self.secondary_color,
            GlobalStyleKey::FontFamily => &self.font_family,
            GlobalStyleKey::BaseFontSize => &self.base_font_size,
        }
    }

    pub fn set(&mut self, key: GlobalStyleKey, value: impl Into<String>) {
        let slot = match key {
            GlobalStyleKey::PrimaryColor => &mut self.primary_color,
            GlobalStyleKey::SecondaryColor => &mut self.secondary_color,
            GlobalStyleKey::FontFamily => &mut self.font_family,
            GlobalStyleKey::BaseFontSize => &mut self.base_font_size,
        };
        *slot = value.into();
    }

    /// Effective value: blank or unsafe values fall back to the built-in default
    pub fn resolved(&self, key: GlobalStyleKey) -> &str {
        let value = self.get(key).trim();
        if value.is_empty() || !is_safe_css_value(value) {
            key.default_value()
        } else {
            value
        }
    }

    /// `(css variable, effective value)` pairs in declaration order
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        GlobalStyleKey::ALL
            .iter()
            .map(|key| (key.css_variable(), self.resolved(*key)))
            .collect()
    }
}

/// Whether a value can sit inside a declaration without ending it,
/// its rule or an enclosing `<style>` element
pub fn is_safe_css_value(value: &str) -> bool {
    !value.contains(['{', '}', ';', '<', '>'])
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
            base_font_size: default_base_font_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_deserialize_to_defaults() {
        let styles: GlobalStyles = serde_json::from_str(r##"{"primaryColor":"#ff0000"}"##).unwrap();
        assert_eq!(styles.primary_color, "#ff0000");
        assert_eq!(styles.secondary_color, DEFAULT_SECONDARY_COLOR);
        assert_eq!(styles.base_font_size, DEFAULT_BASE_FONT_SIZE);
    }

    #[test]
    fn test_blank_values_resolve_to_defaults() {
        let mut styles = GlobalStyles::default();
        styles.set(GlobalStyleKey::FontFamily, "  ");
        assert_eq!(styles.resolved(GlobalStyleKey::FontFamily), "Inter");
    }

    #[test]
    fn test_unsafe_values_resolve_to_defaults() {
        let mut styles = GlobalStyles::default();
        styles.set(GlobalStyleKey::FontFamily, "Inter}</style><script>");
        styles.set(GlobalStyleKey::PrimaryColor, "red; color: blue");
        styles.set(GlobalStyleKey::SecondaryColor, "rgb(1, 2, 3)");

        assert_eq!(styles.resolved(GlobalStyleKey::FontFamily), "Inter");
        assert_eq!(styles.resolved(GlobalStyleKey::PrimaryColor), "#007bff");
        assert_eq!(styles.resolved(GlobalStyleKey::SecondaryColor), "rgb(1, 2, 3)");
        assert!(is_safe_css_value("'Helvetica Neue', sans-serif"));
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("primaryColor".parse(), Ok(GlobalStyleKey::PrimaryColor));
        assert_eq!("--base-font-size".parse(), Ok(GlobalStyleKey::BaseFontSize));
        assert!("accentColor".parse::<GlobalStyleKey>().is_err());
    }
}
