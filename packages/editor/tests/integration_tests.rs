//! Integration tests for editor crate

use landkit_editor::{
    Catalog, EditSession, EditorError, ExportOptions, GlobalStyleKey, Mutation, PageMeta,
    Preset, Snapshot, StyleKey,
};
use std::sync::Arc;

fn session() -> EditSession {
    EditSession::new(Arc::new(Catalog::builtin())).unwrap()
}

/// Current state in the same form history entries hold
fn state(session: &EditSession) -> Snapshot {
    Snapshot {
        instances: session.document().instances().to_vec(),
        global_styles: session.styles().global().clone(),
    }
}

fn title(session: &EditSession, id: &str) -> Option<String> {
    session
        .document()
        .get(id)
        .and_then(|i| i.field_values.get("title").cloned())
}

#[test]
fn test_hero_title_undo_redo() {
    let mut session = session();
    let hero = session.add_component("hero", None).unwrap();

    session.set_field(&hero, "title", "Test").unwrap();
    session.set_field(&hero, "title", "Changed").unwrap();

    session.undo().unwrap();
    assert_eq!(title(&session, &hero).as_deref(), Some("Test"));

    session.redo().unwrap();
    assert_eq!(title(&session, &hero).as_deref(), Some("Changed"));
}

#[test]
fn test_undo_all_then_redo_all_round_trips() {
    let mut session = session();
    let initial = state(&session);

    let header = session.add_component("header", None).unwrap();
    let hero = session.add_component("hero", None).unwrap();
    session.set_field(&hero, "title", "One").unwrap();
    session
        .set_instance_style(&header, StyleKey::Position, "sticky")
        .unwrap();
    let copy = session.duplicate_component(&hero).unwrap();
    session.move_component(&copy, 0).unwrap();
    session
        .set_global_style(GlobalStyleKey::BaseFontSize, "18px")
        .unwrap();
    session.remove_component(&header).unwrap();
    let final_state = state(&session);

    let mut undone = 0;
    while session.undo().unwrap() {
        undone += 1;
    }
    assert_eq!(undone, 8);
    assert_eq!(state(&session), initial);

    while session.redo().unwrap() {}
    assert_eq!(state(&session), final_state);
}

#[test]
fn test_new_mutation_prunes_redo_branch() {
    let mut session = session();
    let hero = session.add_component("hero", None).unwrap();
    session.set_field(&hero, "title", "A").unwrap();
    session.set_field(&hero, "title", "B").unwrap();

    session.undo().unwrap();
    session.undo().unwrap();
    assert!(session.can_redo());

    session.set_field(&hero, "title", "C").unwrap();
    assert!(!session.can_redo());
    assert_eq!(session.history().cursor(), session.history().len() - 1);
    assert!(!session.redo().unwrap());
    assert_eq!(title(&session, &hero).as_deref(), Some("C"));
}

#[test]
fn test_history_is_capped() {
    let mut session = session();
    let hero = session.add_component("hero", None).unwrap();
    for i in 0..60 {
        session.set_field(&hero, "title", &format!("T{}", i)).unwrap();
    }

    assert_eq!(session.history().len(), 50);
    assert_eq!(session.history().cursor(), 49);

    let mut steps = 0;
    while session.undo().unwrap() {
        steps += 1;
    }
    assert_eq!(steps, 49);
    assert_eq!(title(&session, &hero).as_deref(), Some("T10"));
}

#[test]
fn test_duplicate_is_independent_copy() {
    let mut session = session();
    let hero = session.add_component("hero", None).unwrap();
    session.add_component("footer", None).unwrap();
    session.set_field(&hero, "title", "Original").unwrap();
    session
        .set_instance_style(&hero, StyleKey::Background, "bg-gradient-ocean")
        .unwrap();

    let copy = session.duplicate_component(&hero).unwrap();
    assert_eq!(session.document().position(&copy), Some(1));

    let source = session.document().get(&hero).unwrap().clone();
    let duplicate = session.document().get(&copy).unwrap().clone();
    assert_eq!(duplicate.field_values, source.field_values);
    assert_eq!(duplicate.style_overrides, source.style_overrides);
    assert_eq!(
        session.styles().instance_styles(&copy),
        session.styles().instance_styles(&hero)
    );

    session.set_field(&copy, "title", "Copy").unwrap();
    session
        .set_instance_style(&copy, StyleKey::Background, "bg-white")
        .unwrap();
    assert_eq!(title(&session, &hero).as_deref(), Some("Original"));
    assert_eq!(
        session.document().get(&hero).unwrap().style_overrides[&StyleKey::Background],
        "bg-gradient-ocean"
    );
}

#[test]
fn test_remove_middle_keeps_order_dense() {
    let mut session = session();
    let a = session.add_component("header", None).unwrap();
    let b = session.add_component("benefits", None).unwrap();
    let c = session.add_component("footer", None).unwrap();

    session.remove_component(&b).unwrap();

    let instances = session.document().instances();
    assert_eq!(instances.len(), 2);
    assert_eq!((instances[0].id.as_str(), instances[0].order), (a.as_str(), 0));
    assert_eq!((instances[1].id.as_str(), instances[1].order), (c.as_str(), 1));
}

#[test]
fn test_failed_operations_change_nothing() {
    let mut session = session();
    let hero = session.add_component("hero", None).unwrap();
    let before = state(&session);
    let history_len = session.history().len();
    let version = session.version();

    let failures = vec![
        Mutation::AddComponent {
            component_type: "carousel".into(),
            after: None,
        },
        Mutation::AddComponent {
            component_type: "faq".into(),
            after: Some("comp_0_missing".into()),
        },
        Mutation::RemoveComponent {
            id: "comp_0_missing".into(),
        },
        Mutation::DuplicateComponent {
            id: "comp_0_missing".into(),
        },
        Mutation::MoveComponent {
            id: hero.clone(),
            index: 5,
        },
        Mutation::SetField {
            id: hero.clone(),
            field: "price".into(),
            value: "9".into(),
        },
        Mutation::SetInstanceStyle {
            id: hero.clone(),
            key: StyleKey::Position,
            value: "sticky".into(),
        },
        Mutation::ClearInstanceStyle {
            id: "comp_0_missing".into(),
            key: StyleKey::Background,
        },
    ];

    for mutation in failures {
        assert!(session.apply(mutation).is_err());
    }

    assert_eq!(state(&session), before);
    assert_eq!(session.history().len(), history_len);
    assert_eq!(session.version(), version);
}

#[test]
fn test_error_kinds() {
    let mut session = session();
    let hero = session.add_component("hero", None).unwrap();

    assert!(matches!(
        session.add_component("carousel", None),
        Err(EditorError::UnknownComponentType(_))
    ));
    assert!(matches!(
        session.move_component(&hero, 1),
        Err(EditorError::OutOfRange { index: 1, len: 1 })
    ));
    assert!(matches!(
        session.remove_component("nope"),
        Err(EditorError::NotFound(_))
    ));
}

#[test]
fn test_add_after_anchor() {
    let mut session = session();
    let header = session.add_component("header", None).unwrap();
    session.add_component("footer", None).unwrap();

    let hero = session.add_component("hero", Some(&header)).unwrap();
    assert_eq!(session.document().position(&hero), Some(1));
}

#[test]
fn test_preset_undo() {
    let mut session = session();
    session.apply_preset(Preset::Minimal).unwrap();
    assert_eq!(session.styles().global().font_family, "Arial");

    session.undo().unwrap();
    assert_eq!(session.styles().global().font_family, "Inter");
}

#[test]
fn test_export_reflects_current_state() {
    let mut session = session();
    let testimonial = session.add_component("testimonial", None).unwrap();
    session.set_field(&testimonial, "quote", "Great!").unwrap();
    session.select(&testimonial).unwrap();

    let html = session.export(&PageMeta::default(), &ExportOptions::default());
    assert!(html.contains("Great!"));
    assert!(!html.contains("data-component-id"));
    assert!(!html.contains("selected"));

    session.undo().unwrap();
    let html = session.export(&PageMeta::default(), &ExportOptions::default());
    assert!(!html.contains("Great!"));
}
