//! # Style Manager
//!
//! Owns the global theme variables and the per-instance override maps.
//!
//! The manager is authoritative for overrides; the session mirrors each
//! instance's map into its [`ComponentInstance`](crate::ComponentInstance)
//! so snapshots and saved state carry them. After a restore the manager's
//! per-instance map is rebuilt from the document with [`StyleManager::sync_from`].

use crate::{ComponentInstance, EditorError};
use landkit_catalog::StyleKey;
use landkit_common::{is_safe_css_value, GlobalStyleKey, GlobalStyles};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

pub type InstanceStyles = BTreeMap<StyleKey, String>;

/// Serialized style state: `{ global, components }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleState {
    #[serde(default)]
    pub global: GlobalStyles,

    #[serde(rename = "components", default)]
    pub instances: BTreeMap<String, InstanceStyles>,
}

/// Built-in theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Modern,
    Classic,
    Minimal,
    Vibrant,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Modern, Preset::Classic, Preset::Minimal, Preset::Vibrant];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Modern => "modern",
            Preset::Classic => "classic",
            Preset::Minimal => "minimal",
            Preset::Vibrant => "vibrant",
        }
    }

    pub fn global_styles(&self) -> GlobalStyles {
        let (primary, secondary, font, size) = match self {
            Preset::Modern => ("#6366f1", "#8b5cf6", "Inter", "16px"),
            Preset::Classic => ("#dc2626", "#7c2d12", "Georgia", "18px"),
            Preset::Minimal => ("#000000", "#6b7280", "Arial", "15px"),
            Preset::Vibrant => ("#f59e0b", "#ea580c", "Inter", "16px"),
        };

        GlobalStyles {
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            font_family: font.to_string(),
            base_font_size: size.to_string(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| EditorError::UnknownPreset(s.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct StyleManager {
    global: GlobalStyles,
    instances: BTreeMap<String, InstanceStyles>,
}

impl StyleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global(&self) -> &GlobalStyles {
        &self.global
    }

    pub fn set_global(&mut self, key: GlobalStyleKey, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(key = %key, value = %value, "set global style");
        self.global.set(key, value);
    }

    pub fn set_globals(&mut self, global: GlobalStyles) {
        self.global = global;
    }

    /// Materialized `(--variable, value)` pairs
    pub fn css_variables(&self) -> Vec<(&'static str, &str)> {
        self.global.css_variables()
    }

    /// Set one override; returns the value it replaced
    ///
    /// For exclusive keys (background) the previous variant is removed
    /// before the new one is applied, so at most one is ever active.
    pub fn set_instance_style(
        &mut self,
        instance_id: &str,
        key: StyleKey,
        value: impl Into<String>,
    ) -> Option<String> {
        let styles = self.instances.entry(instance_id.to_string()).or_default();

        let previous = if key.is_exclusive_variant() {
            styles.remove(&key)
        } else {
            None
        };

        let value = value.into();
        tracing::debug!(instance_id, key = %key, value = %value, "set instance style");
        let replaced = styles.insert(key, value);
        previous.or(replaced)
    }

    pub fn instance_styles(&self, instance_id: &str) -> Option<&InstanceStyles> {
        self.instances.get(instance_id)
    }

    pub fn clear_instance_style(&mut self, instance_id: &str, key: &StyleKey) -> Option<String> {
        let styles = self.instances.get_mut(instance_id)?;
        let removed = styles.remove(key);
        if styles.is_empty() {
            self.instances.remove(instance_id);
        }
        removed
    }

    pub fn remove_instance(&mut self, instance_id: &str) {
        self.instances.remove(instance_id);
    }

    /// Rebuild the per-instance map from restored instances
    pub fn sync_from(&mut self, instances: &[ComponentInstance]) {
        self.instances = instances
            .iter()
            .filter(|i| !i.style_overrides.is_empty())
            .map(|i| (i.id.clone(), i.style_overrides.clone()))
            .collect();
    }

    pub fn export_state(&self) -> StyleState {
        StyleState {
            global: self.global.clone(),
            instances: self.instances.clone(),
        }
    }

    pub fn import_state(&mut self, state: StyleState) {
        self.global = state.global;
        self.instances = state.instances;
    }

    /// Drop every override and restore the default theme
    pub fn reset_to_defaults(&mut self) {
        self.global = GlobalStyles::default();
        self.instances.clear();
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        tracing::debug!(preset = %preset, "apply preset");
        self.global = preset.global_styles();
    }

    /// `:root` variables plus one rule per instance with CSS property overrides
    pub fn generate_stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for (variable, value) in self.css_variables() {
            let _ = writeln!(css, "  {}: {};", variable, value);
        }
        css.push_str("}\n\n");

        for (instance_id, styles) in &self.instances {
            let properties: Vec<_> = styles
                .iter()
                .filter(|(key, value)| {
                    !key.is_option() && is_safe_css_value(key.name()) && is_safe_css_value(value)
                })
                .collect();
            if properties.is_empty() {
                continue;
            }

            let _ = writeln!(css, "[data-component-id=\"{}\"] {{", instance_id);
            for (key, value) in properties {
                let _ = writeln!(css, "  {}: {};", key, value);
            }
            css.push_str("}\n\n");
        }

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults_and_variables() {
        let mut styles = StyleManager::new();
        assert_eq!(styles.global().primary_color, "#007bff");

        styles.set_global(GlobalStyleKey::PrimaryColor, "#ff0000");
        styles.set_global(GlobalStyleKey::FontFamily, "");

        let vars = styles.css_variables();
        assert_eq!(vars[0], ("--primary-color", "#ff0000"));
        assert_eq!(vars[2], ("--font-family", "Inter"));
    }

    #[test]
    fn test_background_variant_is_exclusive() {
        let mut styles = StyleManager::new();
        styles.set_instance_style("a", StyleKey::Background, "bg-light");
        let replaced = styles.set_instance_style("a", StyleKey::Background, "bg-dark");

        assert_eq!(replaced.as_deref(), Some("bg-light"));
        let map = styles.instance_styles("a").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&StyleKey::Background], "bg-dark");
    }

    #[test]
    fn test_clear_and_remove_instance() {
        let mut styles = StyleManager::new();
        styles.set_instance_style("a", StyleKey::from("margin"), "10px");
        styles.set_instance_style("b", StyleKey::TextAlign, "text-center");

        assert_eq!(
            styles.clear_instance_style("a", &StyleKey::from("margin")).as_deref(),
            Some("10px")
        );
        assert!(styles.instance_styles("a").is_none());

        styles.remove_instance("b");
        assert!(styles.instance_styles("b").is_none());
        assert!(styles.clear_instance_style("b", &StyleKey::TextAlign).is_none());
    }

    #[test]
    fn test_state_round_trip_uses_components_key() {
        let mut styles = StyleManager::new();
        styles.set_global(GlobalStyleKey::BaseFontSize, "18px");
        styles.set_instance_style("a", StyleKey::from("padding"), "20px");

        let json = serde_json::to_value(styles.export_state()).unwrap();
        assert_eq!(json["components"]["a"]["padding"], "20px");
        assert_eq!(json["global"]["baseFontSize"], "18px");

        let mut other = StyleManager::new();
        other.import_state(serde_json::from_value(json).unwrap());
        assert_eq!(other.export_state(), styles.export_state());
    }

    #[test]
    fn test_reset_and_presets() {
        let mut styles = StyleManager::new();
        styles.apply_preset("classic".parse().unwrap());
        styles.set_instance_style("a", StyleKey::Background, "bg-dark");
        assert_eq!(styles.global().font_family, "Georgia");
        assert_eq!(styles.global().base_font_size, "18px");

        styles.reset_to_defaults();
        assert_eq!(styles.global(), &GlobalStyles::default());
        assert!(styles.instance_styles("a").is_none());

        assert!(matches!(
            "neon".parse::<Preset>(),
            Err(EditorError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_generate_stylesheet() {
        let mut styles = StyleManager::new();
        styles.set_instance_style("a", StyleKey::from("margin"), "10px");
        styles.set_instance_style("a", StyleKey::Background, "bg-dark");
        styles.set_instance_style("b", StyleKey::Background, "bg-light");

        let css = styles.generate_stylesheet();
        assert!(css.starts_with(":root {\n  --primary-color: #007bff;\n"));
        assert!(css.contains("[data-component-id=\"a\"] {\n  margin: 10px;\n}\n"));
        assert!(!css.contains("bg-dark"));
        assert!(!css.contains("[data-component-id=\"b\"]"));
    }

    #[test]
    fn test_generate_stylesheet_skips_unsafe_values() {
        let mut styles = StyleManager::new();
        styles.set_global(GlobalStyleKey::FontFamily, "x} body { display: none");
        styles.set_instance_style("a", StyleKey::from("color"), "red} body { display: none");
        styles.set_instance_style("a", StyleKey::from("padding"), "4px");

        let css = styles.generate_stylesheet();
        assert!(css.contains("--font-family: Inter;"));
        assert!(css.contains("  padding: 4px;\n"));
        assert!(!css.contains("display: none"));
    }
}
