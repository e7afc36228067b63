use crate::{
    compile_to_html, export_bundle, serialize_nodes, AssetMode, ExportOptions, PageMeta, CSS_FILE,
    HTML_FILE, JS_FILE,
};
use landkit_catalog::{Catalog, InstanceView, StyleKey};
use landkit_common::{GlobalStyles, Node};
use std::collections::BTreeMap;

fn render(component_type: &str, id: &str, fields: &[(&str, &str)], selected: bool) -> Node {
    let catalog = Catalog::builtin();
    let field_values: BTreeMap<String, String> = fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let mut style_overrides = BTreeMap::new();
    style_overrides.insert(StyleKey::from("padding"), "20px".to_string());

    catalog
        .get(component_type)
        .expect("component should exist")
        .render(&InstanceView {
            id,
            field_values: &field_values,
            style_overrides: &style_overrides,
            selected,
            editing_field: None,
        })
}

fn testimonial_page() -> Vec<Node> {
    vec![render(
        "testimonial",
        "comp_1700000000000_abcdefghi",
        &[("quote", "Great!")],
        true,
    )]
}

#[test]
fn test_export_testimonial_page() {
    let html = compile_to_html(
        &testimonial_page(),
        &GlobalStyles::default(),
        &PageMeta::default(),
        &ExportOptions::default(),
    );

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>My Landing Page</title>"));
    assert!(html.contains("content=\"A beautifully crafted landing page\""));
    assert!(html.contains("<div class=\"landing-page\">"));
    assert!(html.contains("Great!"));
    assert!(html.contains("style=\"padding: 20px;\""));

    assert!(!html.contains("component-controls"));
    assert!(!html.contains("drag-handle"));
    assert!(!html.contains("data-component"));
    assert!(!html.contains("data-field"));
    assert!(!html.contains("contenteditable"));
    assert!(!html.contains("editable"));
    assert!(!html.contains("selected"));

    assert!(html.contains("--primary-color: #007bff"));
    assert!(html.contains("<script>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_export_without_stripping_keeps_live_markup() {
    let page = testimonial_page();
    let options = ExportOptions {
        strip_editor_artifacts: false,
        ..Default::default()
    };
    let html = compile_to_html(&page, &GlobalStyles::default(), &PageMeta::default(), &options);

    assert!(html.contains("data-component-id=\"comp_1700000000000_abcdefghi\""));
    assert!(html.contains("component-controls"));

    let compact = serialize_nodes(&page);
    assert!(compact.contains("class=\"testimonial-section section component selected\""));
}

#[test]
fn test_export_is_deterministic() {
    let page = vec![
        render("header", "comp_1_aaaaaaaaa", &[], false),
        render("faq", "comp_2_bbbbbbbbb", &[("question1", "Why?")], false),
    ];
    let options = ExportOptions {
        include_faq_script: true,
        ..Default::default()
    };

    let a = compile_to_html(&page, &GlobalStyles::default(), &PageMeta::default(), &options);
    let b = compile_to_html(&page, &GlobalStyles::default(), &PageMeta::default(), &options);
    assert_eq!(a, b);
    assert!(a.contains("Why?"));
}

#[test]
fn test_faq_script_toggle() {
    let page = testimonial_page();
    let global = GlobalStyles::default();
    let meta = PageMeta::default();

    let without = compile_to_html(&page, &global, &meta, &ExportOptions::default());
    let with = compile_to_html(
        &page,
        &global,
        &meta,
        &ExportOptions {
            include_faq_script: true,
            ..Default::default()
        },
    );

    assert!(!without.contains("querySelectorAll('.faq-question')"));
    assert!(with.contains("querySelectorAll('.faq-question')"));
}

#[test]
fn test_page_meta_and_favicon() {
    let meta = PageMeta {
        title: "Acme <Launch>".to_string(),
        description: "Fast & simple".to_string(),
        favicon: Some("/favicon.ico".to_string()),
    };
    let html = compile_to_html(&[], &GlobalStyles::default(), &meta, &ExportOptions::default());

    assert!(html.contains("<title>Acme &lt;Launch&gt;</title>"));
    assert!(html.contains("content=\"Fast &amp; simple\""));
    assert!(html.contains("<link rel=\"icon\" href=\"/favicon.ico\">"));

    let html = compile_to_html(
        &[],
        &GlobalStyles::default(),
        &PageMeta::default(),
        &ExportOptions::default(),
    );
    assert!(!html.contains("rel=\"icon\""));
}

#[test]
fn test_global_styles_in_stylesheet() {
    let mut global = GlobalStyles::default();
    global.primary_color = "#6366f1".to_string();
    global.base_font_size = String::new();

    let html = compile_to_html(
        &[],
        &global,
        &PageMeta::default(),
        &ExportOptions {
            minify: false,
            ..Default::default()
        },
    );

    assert!(html.contains("--primary-color: #6366f1;"));
    assert!(html.contains("--base-font-size: 16px;"));
    assert!(html.contains("/* Global Variables */"));
}

#[test]
fn test_external_assets_bundle() {
    let page = testimonial_page();
    let options = ExportOptions {
        assets: AssetMode::External,
        ..Default::default()
    };
    let bundle = export_bundle(&page, &GlobalStyles::default(), &PageMeta::default(), &options);

    assert!(bundle.html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(bundle.html.contains("<script src=\"script.js\"></script>"));
    assert!(!bundle.html.contains("<style>"));

    let css = bundle.stylesheet.as_deref().unwrap();
    assert!(css.contains(":root{--primary-color: #007bff"));
    assert!(bundle.script.as_deref().unwrap().contains("scrollIntoView"));

    let names: Vec<&str> = bundle.files().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![HTML_FILE, CSS_FILE, JS_FILE]);
}

#[test]
fn test_inline_bundle_has_single_file() {
    let bundle = export_bundle(
        &[],
        &GlobalStyles::default(),
        &PageMeta::default(),
        &ExportOptions::default(),
    );
    assert_eq!(bundle.files().len(), 1);
    assert!(bundle.html.contains("<style>"));
}

#[test]
fn test_export_options_from_json() {
    let options: ExportOptions =
        serde_json::from_str(r#"{"minify": false, "assets": "external"}"#).unwrap();

    assert!(options.strip_editor_artifacts);
    assert!(!options.minify);
    assert!(!options.include_faq_script);
    assert_eq!(options.assets, AssetMode::External);
}

#[test]
fn test_export_keeps_quote_text_verbatim() {
    let page = vec![render(
        "testimonial",
        "comp_1700000000000_abcdefghi",
        &[("quote", "Don't \"wait\" & see")],
        false,
    )];
    let html = compile_to_html(
        &page,
        &GlobalStyles::default(),
        &PageMeta::default(),
        &ExportOptions::default(),
    );

    assert!(html.contains("Don't \"wait\" &amp; see"));
    assert!(!html.contains("&#39;"));
}
