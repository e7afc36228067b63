//! CSS minification - compress the exported stylesheet for smaller payloads

use regex::Regex;
use std::sync::LazyLock;

static COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SEMICOLON_BEFORE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*\}").unwrap());
static AROUND_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\{\s*").unwrap());
static AFTER_SEMICOLON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*").unwrap());
static AFTER_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

/// Textual minification of a stylesheet
///
/// Steps, in order: strip comments, collapse whitespace runs to one space,
/// drop the `;` before `}`, remove whitespace around `{`, drop whitespace
/// after `;` and `,`, trim.
pub fn minify_css(css: &str) -> String {
    let css = COMMENTS.replace_all(css, "");
    let css = WHITESPACE.replace_all(&css, " ");
    let css = SEMICOLON_BEFORE_CLOSE.replace_all(&css, "}");
    let css = AROUND_OPEN.replace_all(&css, "{");
    let css = AFTER_SEMICOLON.replace_all(&css, ";");
    let css = AFTER_COMMA.replace_all(&css, ",");
    css.trim().to_string()
}

/// Calculate compression ratio
pub fn calculate_compression_ratio(original_size: usize, minified_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (original_size.saturating_sub(minified_size) as f64 / original_size as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_rule() {
        let css = "/* Buttons */\n.cta-button {\n    padding: 12px 24px;\n    color: white;\n}\n";
        assert_eq!(minify_css(css), ".cta-button{padding: 12px 24px;color: white}");
    }

    #[test]
    fn test_minify_selector_lists_and_values() {
        let css = "h1, h2 {\n  box-shadow: 0 4px 12px rgba(0, 123, 255, 0.3);\n}";
        assert_eq!(
            minify_css(css),
            "h1,h2{box-shadow: 0 4px 12px rgba(0,123,255,0.3)}"
        );
    }

    #[test]
    fn test_minify_strips_multiline_comments() {
        let css = "/* a\n * b\n */ p { margin: 0; } /* c */";
        assert_eq!(minify_css(css), "p{margin: 0}");
    }

    #[test]
    fn test_minify_nested_media() {
        let css = "@media (max-width: 768px) {\n    h1 { font-size: 2rem; }\n}\n";
        // Whitespace between closing braces survives
        assert_eq!(minify_css(css), "@media (max-width: 768px){h1{font-size: 2rem} }");
    }

    #[test]
    fn test_compression_ratio() {
        assert_eq!(calculate_compression_ratio(0, 0), 0.0);
        assert_eq!(calculate_compression_ratio(200, 50), 75.0);
    }
}
