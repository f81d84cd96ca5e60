use notas_core::{Nota, UNSAVED_ID};

#[test]
fn default_nota_is_blank_and_unsaved() {
    let nota = Nota::default();

    assert_eq!(nota.id, UNSAVED_ID);
    assert!(nota.title.is_empty());
    assert!(nota.content.is_empty());
    assert!(!nota.is_persisted());
}

#[test]
fn with_id_marks_value_as_persisted() {
    let nota = Nota::with_id(3, "title", "content");

    assert!(nota.is_persisted());
    assert_eq!(nota.id, 3);
}

#[test]
fn equality_is_structural() {
    let a = Nota::with_id(1, "same", "fields");
    let b = Nota::with_id(1, "same", "fields");
    let c = Nota::with_id(2, "same", "fields");

    // Two values with equal fields are interchangeable, e.g. for selection
    // comparisons; a differing id breaks equality.
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, a.clone());
}

#[test]
fn serde_uses_persisted_schema_field_names() {
    let nota = Nota::with_id(7, "lista", "pão e café");

    let json = serde_json::to_value(&nota).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["titulo"], "lista");
    assert_eq!(json["conteudo"], "pão e café");

    let back: Nota = serde_json::from_value(json).unwrap();
    assert_eq!(back, nota);
}
