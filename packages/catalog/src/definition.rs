//! Component definition types

use landkit_common::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Image,
}

/// Declared editable field of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub kind: FieldKind,
    pub label: String,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            label: label.into(),
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, FieldKind::Text, label)
    }

    pub fn textarea(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, FieldKind::Textarea, label)
    }

    pub fn image(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, FieldKind::Image, label)
    }
}

/// Marks a raw CSS property whose name is also an option key (`css:background`)
pub const PROPERTY_PREFIX: &str = "css:";

/// Style key of a per-instance override
///
/// The named variants are enumerated options rendered as classes on the
/// component root. `Property` is an arbitrary CSS property rendered inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum StyleKey {
    Background,
    Position,
    TextAlign,
    Property(String),
}

impl StyleKey {
    pub fn name(&self) -> &str {
        match self {
            StyleKey::Background => "background",
            StyleKey::Position => "position",
            StyleKey::TextAlign => "textAlign",
            StyleKey::Property(property) => property,
        }
    }

    /// Whether values of this key are enumerated option classes
    pub fn is_option(&self) -> bool {
        !matches!(self, StyleKey::Property(_))
    }

    /// Only one variant of this key may be active on an instance at a time
    pub fn is_exclusive_variant(&self) -> bool {
        matches!(self, StyleKey::Background)
    }
}

impl From<String> for StyleKey {
    fn from(s: String) -> Self {
        if let Some(property) = s.strip_prefix(PROPERTY_PREFIX) {
            return StyleKey::Property(property.to_string());
        }
        match s.as_str() {
            "background" => StyleKey::Background,
            "position" => StyleKey::Position,
            "textAlign" => StyleKey::TextAlign,
            _ => StyleKey::Property(s),
        }
    }
}

impl From<&str> for StyleKey {
    fn from(s: &str) -> Self {
        StyleKey::from(s.to_string())
    }
}

impl From<StyleKey> for String {
    fn from(key: StyleKey) -> Self {
        match key {
            StyleKey::Property(property) if StyleKey::from(property.as_str()).is_option() => {
                format!("{}{}", PROPERTY_PREFIX, property)
            }
            StyleKey::Property(property) => property,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enumerated style option a component offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpec {
    pub key: StyleKey,
    pub label: String,
    pub options: Vec<String>,
}

impl StyleSpec {
    pub fn new(key: StyleKey, label: impl Into<String>, options: &[&str]) -> Self {
        Self {
            key,
            label: label.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Header,
    SocialProof,
    Content,
    Footer,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Header,
        Category::SocialProof,
        Category::Content,
        Category::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Header => "header",
            Category::SocialProof => "social-proof",
            Category::Content => "content",
            Category::Footer => "footer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Insertable block: structure, editable fields and style options
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    pub component_type: String,
    pub name: String,
    pub category: Category,
    /// Live-editor markup; field slots carry `data-field`
    pub template: Node,
    pub fields: Vec<FieldSpec>,
    pub styles: Vec<StyleSpec>,
}

impl ComponentDefinition {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    pub fn style(&self, key: &StyleKey) -> Option<&StyleSpec> {
        self.styles.iter().find(|s| &s.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_key_names_round_trip() {
        for name in ["background", "position", "textAlign", "margin"] {
            let key = StyleKey::from(name);
            assert_eq!(String::from(key), name);
        }
        assert_eq!(StyleKey::from("padding"), StyleKey::Property("padding".to_string()));
        assert!(StyleKey::Background.is_exclusive_variant());
        assert!(!StyleKey::TextAlign.is_exclusive_variant());
        assert!(!StyleKey::from("margin").is_option());
    }

    #[test]
    fn test_style_key_as_json_map_key() {
        let mut overrides = std::collections::BTreeMap::new();
        overrides.insert(StyleKey::Background, "bg-light".to_string());
        overrides.insert(StyleKey::from("margin"), "10px".to_string());

        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"background":"bg-light","margin":"10px"}"#);

        let back: std::collections::BTreeMap<StyleKey, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, overrides);
    }

    #[test]
    fn test_prefixed_property_keys() {
        let key = StyleKey::from("css:background");
        assert_eq!(key, StyleKey::Property("background".to_string()));
        assert!(!key.is_option());
        assert_eq!(key.name(), "background");
        assert_eq!(String::from(key.clone()), "css:background");
        assert_eq!(StyleKey::from(String::from(key)), StyleKey::Property("background".to_string()));

        assert_eq!(StyleKey::from("css:margin"), StyleKey::from("margin"));
        assert_eq!(String::from(StyleKey::from("css:margin")), "margin");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("social-proof".parse(), Ok(Category::SocialProof));
        assert!("sidebar".parse::<Category>().is_err());
    }
}
