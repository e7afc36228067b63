//! Built-in component library
//!
//! Each template is the live-editor markup of one block: a root carrying the
//! `component` marker and `data-component`, the editor control strip and drag
//! handle, then the content with `data-field` slots.

use crate::definition::{Category, ComponentDefinition, FieldSpec, StyleKey, StyleSpec};
use landkit_common::Node;

pub fn builtin_definitions() -> Vec<ComponentDefinition> {
    vec![
        header(),
        hero(),
        trust_badges(),
        benefits(),
        process(),
        testimonial(),
        faq(),
        footer(),
    ]
}

fn icon(classes: &str) -> Node {
    Node::element("i").with_class(classes)
}

fn control_button(action: &str, title: &str, icon_class: &str) -> Node {
    Node::element("button")
        .with_class("control-btn")
        .with_attr("data-action", action)
        .with_attr("title", title)
        .with_child(icon(icon_class))
}

fn controls() -> Node {
    Node::element("div").with_class("component-controls").with_children(vec![
        control_button("edit", "Edit", "fas fa-edit"),
        control_button("duplicate", "Duplicate", "fas fa-copy"),
        control_button("delete", "Delete", "fas fa-trash"),
    ])
}

fn drag_handle() -> Node {
    Node::element("div")
        .with_class("drag-handle")
        .with_child(icon("fas fa-grip-vertical"))
}

/// Component root with editor affordances and a `.container` wrapper
fn shell(tag: &str, component_type: &str, classes: &str, anchor: Option<&str>, content: Vec<Node>) -> Node {
    let mut root = Node::element(tag)
        .with_class(classes)
        .with_class("component")
        .with_attr("data-component", component_type);
    if let Some(anchor) = anchor {
        root.set_attr("id", anchor);
    }
    root.with_child(controls())
        .with_child(drag_handle())
        .with_child(div("container").with_children(content))
}

fn div(classes: &str) -> Node {
    Node::element("div").with_class(classes)
}

fn editable(tag: &str, classes: &str, field: &str, text: &str) -> Node {
    Node::element(tag)
        .with_class(classes)
        .with_class("editable")
        .with_attr("data-field", field)
        .with_text(text)
}

fn image_slot(field: &str, classes: &str, label: &str) -> Node {
    div("image-placeholder")
        .with_class(classes)
        .with_attr("data-field", field)
        .with_child(icon("fas fa-image"))
        .with_child(Node::element("p").with_text(label))
}

fn header() -> ComponentDefinition {
    let nav = div("navbar-nav").with_children(vec![
        editable("a", "nav-link", "nav1", "Why Choose Us").with_attr("href", "#hero"),
        editable("a", "nav-link", "nav2", "How It Works").with_attr("href", "#benefits"),
        editable("a", "nav-link", "nav3", "FAQ").with_attr("href", "#faq"),
    ]);
    let cta = div("navbar-cta")
        .with_child(editable("a", "cta-button", "header_cta", "GET STARTED").with_attr("href", "#"));
    let toggle = div("mobile-menu-toggle").with_children(vec![
        Node::element("span"),
        Node::element("span"),
        Node::element("span"),
    ]);
    let navbar = Node::element("nav").with_class("navbar").with_children(vec![
        div("navbar-brand").with_child(image_slot("logo", "brand-logo", "Logo")),
        div("navbar-menu").with_child(nav).with_child(cta),
        toggle,
    ]);

    ComponentDefinition {
        component_type: "header".to_string(),
        name: "Header/Navigation".to_string(),
        category: Category::Header,
        template: shell("header", "header", "header-section", None, vec![navbar]),
        fields: vec![
            FieldSpec::image("logo", "Company Logo"),
            FieldSpec::text("nav1", "Navigation Link 1"),
            FieldSpec::text("nav2", "Navigation Link 2"),
            FieldSpec::text("nav3", "Navigation Link 3"),
            FieldSpec::text("header_cta", "Header CTA Button"),
        ],
        styles: vec![
            StyleSpec::new(
                StyleKey::Background,
                "Background",
                &["bg-white", "bg-light", "bg-dark", "bg-transparent"],
            ),
            StyleSpec::new(StyleKey::Position, "Position", &["static", "sticky"]),
        ],
    }
}

fn hero() -> ComponentDefinition {
    let content = div("hero-content").with_children(vec![
        editable("h1", "", "title", "Grow Your Business Faster"),
        editable("p", "", "subtitle", "Reach the right audience at a fraction of the usual cost."),
        editable("a", "cta-button", "cta", "GET STARTED").with_attr("href", "#"),
    ]);
    let image = div("hero-image").with_child(image_slot("hero_image", "hero-img", "Add Hero Image"));

    ComponentDefinition {
        component_type: "hero".to_string(),
        name: "Hero Section".to_string(),
        category: Category::Header,
        template: shell(
            "section",
            "hero",
            "hero-section section large",
            Some("hero"),
            vec![div("hero-grid").with_child(content).with_child(image)],
        ),
        fields: vec![
            FieldSpec::text("title", "Main Title"),
            FieldSpec::textarea("subtitle", "Subtitle"),
            FieldSpec::text("cta", "Call to Action"),
            FieldSpec::image("hero_image", "Hero Image"),
        ],
        styles: vec![
            StyleSpec::new(
                StyleKey::Background,
                "Background",
                &[
                    "bg-white",
                    "bg-light",
                    "bg-gradient-blue",
                    "bg-gradient-sunset",
                    "bg-gradient-ocean",
                    "bg-gradient-forest",
                ],
            ),
            StyleSpec::new(
                StyleKey::TextAlign,
                "Text Alignment",
                &["text-center", "text-left", "text-right"],
            ),
        ],
    }
}

fn trust_badges() -> ComponentDefinition {
    let mut fields = vec![FieldSpec::text("title", "Section Title")];
    let mut logos = Vec::new();
    for i in 1..=5 {
        let key = format!("logo{}", i);
        logos.push(div("logo-item").with_child(image_slot(&key, "", "Add Logo")));
        fields.push(FieldSpec::image(key, format!("Logo {}", i)));
    }

    ComponentDefinition {
        component_type: "trust-badges".to_string(),
        name: "Trust Badges".to_string(),
        category: Category::SocialProof,
        template: shell(
            "section",
            "trust-badges",
            "trust-badges section",
            None,
            vec![
                editable("h2", "", "title", "Trusted by Leading Brands"),
                div("logos-grid").with_children(logos),
            ],
        ),
        fields,
        styles: vec![],
    }
}

fn benefits() -> ComponentDefinition {
    let items = [
        ("Premium Quality", "Results that exceed expectations and drive measurable growth."),
        ("Cost Effective", "Better return on every dollar with efficient, transparent pricing."),
        ("Expert Support", "A dedicated team that keeps optimizing long after launch."),
    ];

    let mut fields = vec![FieldSpec::text("title", "Section Title")];
    let mut grid = Vec::new();
    for (i, (title, text)) in items.iter().enumerate() {
        let n = i + 1;
        grid.push(div("benefit-item").with_children(vec![
            image_slot(&format!("image{}", n), "benefit-image", "Add Image"),
            editable("h3", "", &format!("benefit{}_title", n), title),
            editable("p", "", &format!("benefit{}_text", n), text),
        ]));
        fields.push(FieldSpec::image(format!("image{}", n), format!("Benefit {} Image", n)));
        fields.push(FieldSpec::text(format!("benefit{}_title", n), format!("Benefit {} Title", n)));
        fields.push(FieldSpec::textarea(
            format!("benefit{}_text", n),
            format!("Benefit {} Description", n),
        ));
    }

    ComponentDefinition {
        component_type: "benefits".to_string(),
        name: "Benefits Grid".to_string(),
        category: Category::Content,
        template: shell(
            "section",
            "benefits",
            "benefits-section section",
            Some("benefits"),
            vec![
                editable("h2", "", "title", "Why Choose Our Services"),
                div("benefits-grid").with_children(grid),
            ],
        ),
        fields,
        styles: vec![],
    }
}

fn process() -> ComponentDefinition {
    let steps = [
        ("fas fa-lightbulb", "Strategy & Planning", "We study your goals and design a plan built for impact."),
        ("fas fa-rocket", "Implementation", "Our team executes with precision and delivers on time."),
        ("fas fa-chart-line", "Optimization", "We monitor, measure and refine to maximize your return."),
    ];

    let mut fields = vec![FieldSpec::text("title", "Section Title")];
    let mut grid = Vec::new();
    for (i, (icon_class, title, text)) in steps.iter().enumerate() {
        let n = i + 1;
        grid.push(div("process-step").with_children(vec![
            div("step-icon").with_child(icon(icon_class)),
            editable("h3", "", &format!("step{}_title", n), title),
            editable("p", "", &format!("step{}_text", n), text),
        ]));
        fields.push(FieldSpec::text(format!("step{}_title", n), format!("Step {} Title", n)));
        fields.push(FieldSpec::textarea(
            format!("step{}_text", n),
            format!("Step {} Description", n),
        ));
    }

    ComponentDefinition {
        component_type: "process".to_string(),
        name: "Process Steps".to_string(),
        category: Category::Content,
        template: shell(
            "section",
            "process",
            "process-section section",
            None,
            vec![
                editable("h2", "", "title", "Our Simple Process"),
                div("process-grid").with_children(grid),
            ],
        ),
        fields,
        styles: vec![],
    }
}

fn testimonial() -> ComponentDefinition {
    let content = div("testimonial-content").with_children(vec![
        editable(
            "div",
            "testimonial-quote",
            "quote",
            "The team delivered exceptional results that exceeded our expectations.",
        ),
        editable("div", "testimonial-author", "author", "– Jane Doe, CEO"),
        editable("div", "testimonial-company", "company", "Leading Tech Company"),
    ]);

    ComponentDefinition {
        component_type: "testimonial".to_string(),
        name: "Testimonial".to_string(),
        category: Category::SocialProof,
        template: shell(
            "section",
            "testimonial",
            "testimonial-section section",
            None,
            vec![content],
        ),
        fields: vec![
            FieldSpec::textarea("quote", "Testimonial Quote"),
            FieldSpec::text("author", "Author Name & Title"),
            FieldSpec::text("company", "Company Name"),
        ],
        styles: vec![],
    }
}

fn faq() -> ComponentDefinition {
    let entries = [
        ("What makes your service different?", "Premium quality at competitive prices, with expert support throughout."),
        ("How quickly can you deliver results?", "Most projects are completed within two to four weeks."),
        ("Do you offer ongoing support?", "Yes, we monitor and optimize continuously after launch."),
    ];

    let mut fields = vec![FieldSpec::text("title", "Section Title")];
    let mut items = Vec::new();
    for (i, (question, answer)) in entries.iter().enumerate() {
        let n = i + 1;
        items.push(div("faq-item").with_children(vec![
            Node::element("button")
                .with_class("faq-question")
                .with_child(editable("span", "", &format!("question{}", n), question)),
            div("faq-answer").with_child(editable("p", "", &format!("answer{}", n), answer)),
        ]));
        fields.push(FieldSpec::text(format!("question{}", n), format!("Question {}", n)));
        fields.push(FieldSpec::textarea(format!("answer{}", n), format!("Answer {}", n)));
    }

    ComponentDefinition {
        component_type: "faq".to_string(),
        name: "FAQ Section".to_string(),
        category: Category::Content,
        template: shell(
            "section",
            "faq",
            "faq-section section",
            Some("faq"),
            vec![
                editable("h2", "", "title", "Frequently Asked Questions"),
                div("faq-container").with_children(items),
            ],
        ),
        fields,
        styles: vec![],
    }
}

fn footer() -> ComponentDefinition {
    let content = div("footer-content").with_child(Node::element("div").with_children(vec![
        image_slot("logo", "footer-logo", "Company Logo"),
        editable(
            "p",
            "footer-text",
            "description",
            "Building exceptional solutions for forward-thinking businesses.",
        ),
    ]));
    let bottom = div("footer-bottom").with_child(editable(
        "p",
        "",
        "copyright",
        "© Your Company Name. All rights reserved.",
    ));

    ComponentDefinition {
        component_type: "footer".to_string(),
        name: "Footer".to_string(),
        category: Category::Footer,
        template: shell("footer", "footer", "footer-section section", None, vec![content, bottom]),
        fields: vec![
            FieldSpec::image("logo", "Company Logo"),
            FieldSpec::textarea("description", "Company Description"),
            FieldSpec::text("copyright", "Copyright Text"),
        ],
        styles: vec![],
    }
}
