//! Stylesheet synthesis for exported landing pages
//!
//! The exported stylesheet is the base rules, then the component library,
//! then a `:root` block carrying the global theme variables.

mod minifier;

pub use minifier::{calculate_compression_ratio, minify_css};

use landkit_common::{is_safe_css_value, GlobalStyleKey, GlobalStyles};
use std::fmt::Write;

/// Reset, typography, buttons and utility classes
pub const BASE_CSS: &str = include_str!("styles/base.css");

/// Rules for every built-in component and its style options
pub const COMPONENT_CSS: &str = include_str!("styles/components.css");

#[derive(Debug, Clone, Copy, Default)]
pub struct CssOptions {
    pub minify: bool,
}

/// Compile the full export stylesheet
pub fn compile_to_css(global: &GlobalStyles, options: &CssOptions) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + COMPONENT_CSS.len() + 256);
    css.push_str(BASE_CSS);
    css.push_str(COMPONENT_CSS);
    css.push_str(&global_variables_css(global));

    if options.minify {
        let minified = minify_css(&css);
        tracing::debug!(
            original = css.len(),
            minified = minified.len(),
            ratio = calculate_compression_ratio(css.len(), minified.len()),
            "minified stylesheet"
        );
        return minified;
    }

    css
}

/// `:root` block with the four theme variables, defaults for blank or unsafe values
pub fn global_variables_css(global: &GlobalStyles) -> String {
    let mut css = String::from("\n/* Global Variables */\n:root {\n");
    for key in GlobalStyleKey::ALL {
        if !is_safe_css_value(global.get(key)) {
            tracing::warn!(key = %key, "unsafe global style value, using default");
        }
        let _ = writeln!(css, "    {}: {};", key.css_variable(), global.resolved(key));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flatten a stylesheet into (enclosing selectors, declaration) pairs
    fn declarations(css: &str) -> Vec<(String, String)> {
        let normalize = |s: &str| {
            s.split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .replace(", ", ",")
        };

        let mut stripped = String::new();
        let mut rest = css;
        while let Some(start) = rest.find("/*") {
            stripped.push_str(&rest[..start]);
            rest = match rest[start..].find("*/") {
                Some(end) => &rest[start + end + 2..],
                None => "",
            };
        }
        stripped.push_str(rest);

        let mut scopes: Vec<String> = Vec::new();
        let mut out = Vec::new();
        let mut segment = String::new();
        for ch in stripped.chars() {
            match ch {
                '{' => {
                    scopes.push(normalize(&segment));
                    segment.clear();
                }
                ';' | '}' => {
                    if let Some((name, value)) = segment.split_once(':') {
                        out.push((
                            scopes.join(" / "),
                            format!("{}:{}", name.trim(), normalize(value)),
                        ));
                    }
                    segment.clear();
                    if ch == '}' {
                        scopes.pop();
                    }
                }
                _ => segment.push(ch),
            }
        }
        out
    }

    #[test]
    fn test_sections_in_order() {
        let css = compile_to_css(&GlobalStyles::default(), &CssOptions::default());

        let base = css.find("box-sizing: border-box").unwrap();
        let header = css.find(".header-section {").unwrap();
        let root = css.find(":root {").unwrap();
        assert!(base < header && header < root);
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_root_variables_fall_back_to_defaults() {
        let mut global = GlobalStyles::default();
        global.primary_color = "#ff0000".to_string();
        global.font_family = String::new();

        let css = global_variables_css(&global);
        assert!(css.contains("--primary-color: #ff0000;"));
        assert!(css.contains("--secondary-color: #6c757d;"));
        assert!(css.contains("--font-family: Inter;"));
        assert!(css.contains("--base-font-size: 16px;"));
    }

    #[test]
    fn test_root_variables_cannot_close_the_stylesheet() {
        let mut global = GlobalStyles::default();
        global.font_family = "Inter}</style><script>alert(1)</script>".to_string();

        let css = compile_to_css(&global, &CssOptions { minify: false });
        assert!(css.contains("--font-family: Inter;"));
        assert!(!css.contains("</style>"));
        assert!(!css.contains("alert(1)"));
    }

    #[test]
    fn test_minify_preserves_declarations() {
        let global = GlobalStyles::default();
        let plain = compile_to_css(&global, &CssOptions { minify: false });
        let minified = compile_to_css(&global, &CssOptions { minify: true });

        assert!(minified.len() < plain.len());
        assert!(!minified.contains("/*"));
        assert!(!minified.contains('\n'));

        let expected = declarations(&plain);
        assert!(expected.len() > 100);
        assert_eq!(declarations(&minified), expected);
    }

    #[test]
    fn test_component_library_covers_style_options() {
        for class in [
            ".header-section.bg-dark",
            ".hero-section.bg-gradient-blue",
            ".faq-question",
            ".image-placeholder",
            ".text-center",
        ] {
            assert!(
                BASE_CSS.contains(class) || COMPONENT_CSS.contains(class),
                "missing rule for {}",
                class
            );
        }
    }
}
