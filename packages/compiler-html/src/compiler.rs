use crate::behavior::behavior_script;
use crate::sanitize::sanitized;
use crate::serializer::{compile_node, escape_html, escape_text, Context, SerializeOptions};
use landkit_common::{GlobalStyles, Node};
use landkit_compiler_css::{compile_to_css, CssOptions};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const HTML_FILE: &str = "landing-page.html";
pub const CSS_FILE: &str = "styles.css";
pub const JS_FILE: &str = "script.js";

const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap";
const ICONS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";

/// Document-level metadata of the exported page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub favicon: Option<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "My Landing Page".to_string(),
            description: "A beautifully crafted landing page".to_string(),
            favicon: None,
        }
    }
}

/// Where the stylesheet and script end up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetMode {
    /// `<style>` and `<script>` inside the HTML document
    #[default]
    Inline,
    /// Separate `styles.css` and `script.js` linked from the document
    External,
}

/// Options for page export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Remove editor controls, classes and data attributes
    pub strip_editor_artifacts: bool,
    /// Minify the stylesheet
    pub minify: bool,
    /// Bundle the FAQ accordion behavior
    pub include_faq_script: bool,
    pub assets: AssetMode,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            strip_editor_artifacts: true,
            minify: true,
            include_faq_script: false,
            assets: AssetMode::Inline,
        }
    }
}

/// Files produced by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub html: String,
    /// Present in external asset mode
    pub stylesheet: Option<String>,
    /// Present in external asset mode when there is any script
    pub script: Option<String>,
}

impl ExportBundle {
    /// `(file name, contents)` pairs
    pub fn files(&self) -> Vec<(&'static str, &str)> {
        let mut files = vec![(HTML_FILE, self.html.as_str())];
        if let Some(css) = &self.stylesheet {
            files.push((CSS_FILE, css.as_str()));
        }
        if let Some(js) = &self.script {
            files.push((JS_FILE, js.as_str()));
        }
        files
    }
}

/// Compile the live page into a standalone HTML document
///
/// In external asset mode the document links `styles.css` and `script.js`;
/// use [`export_bundle`] to get those files too.
pub fn compile_to_html(
    nodes: &[Node],
    global: &GlobalStyles,
    meta: &PageMeta,
    options: &ExportOptions,
) -> String {
    export_bundle(nodes, global, meta, options).html
}

/// Compile the live page into the HTML document plus any external assets
pub fn export_bundle(
    nodes: &[Node],
    global: &GlobalStyles,
    meta: &PageMeta,
    options: &ExportOptions,
) -> ExportBundle {
    let markup: Cow<[Node]> = if options.strip_editor_artifacts {
        Cow::Owned(sanitized(nodes))
    } else {
        Cow::Borrowed(nodes)
    };

    let css = compile_to_css(
        global,
        &CssOptions {
            minify: options.minify,
        },
    );
    let js = behavior_script(options.include_faq_script);

    let bundle = match options.assets {
        AssetMode::Inline => ExportBundle {
            html: assemble(&markup, meta, Assets::Inline { css: &css, js: &js }),
            stylesheet: None,
            script: None,
        },
        AssetMode::External => {
            let script = (!js.is_empty()).then_some(js);
            ExportBundle {
                html: assemble(
                    &markup,
                    meta,
                    Assets::Linked {
                        script: script.is_some(),
                    },
                ),
                stylesheet: Some(css),
                script,
            }
        }
    };

    tracing::info!(
        components = nodes.len(),
        bytes = bundle.html.len(),
        assets = ?options.assets,
        "compiled page"
    );
    bundle
}

enum Assets<'a> {
    Inline { css: &'a str, js: &'a str },
    Linked { script: bool },
}

fn assemble(markup: &[Node], meta: &PageMeta, assets: Assets<'_>) -> String {
    let mut ctx = Context::new(SerializeOptions::default());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(meta, &assets, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"landing-page\">");
    ctx.indent();
    for node in markup {
        compile_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");

    match assets {
        Assets::Inline { js, .. } if !js.is_empty() => {
            ctx.add_line("<script>");
            ctx.add(js.trim_end());
            ctx.add("\n");
            ctx.add_line("</script>");
        }
        Assets::Linked { script: true } => {
            ctx.add_line(&format!("<script src=\"{}\"></script>", JS_FILE));
        }
        _ => {}
    }

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(meta: &PageMeta, assets: &Assets<'_>, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_text(&meta.title)));
    ctx.add_line(&format!(
        "<meta name=\"description\" content=\"{}\">",
        escape_html(&meta.description)
    ));
    if let Some(favicon) = meta.favicon.as_deref().filter(|f| !f.trim().is_empty()) {
        ctx.add_line(&format!("<link rel=\"icon\" href=\"{}\">", escape_html(favicon)));
    }
    ctx.add_line(&format!(
        "<link href=\"{}\" rel=\"stylesheet\">",
        escape_html(FONTS_URL)
    ));
    ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", ICONS_URL));

    match assets {
        Assets::Inline { css, .. } => {
            ctx.add_line("<style>");
            ctx.add(css.trim_end());
            ctx.add("\n");
            ctx.add_line("</style>");
        }
        Assets::Linked { .. } => {
            ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", CSS_FILE));
        }
    }

    ctx.dedent();
    ctx.add_line("</head>");
}
