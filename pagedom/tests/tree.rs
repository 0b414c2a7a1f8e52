use pagedom::table::{cell_text, column_texts, first_body, header_cells};
use pagedom::{
    ClassList, Content, Element, Tag, closest_path, element_at_path, find_all, find_element,
    find_element_mut, find_path, path_to, remove_all, remove_at_path,
};

fn page() -> Element {
    Element::body().id("root").child(
        Element::div()
            .id("group")
            .class("form-group")
            .child(Element::div().id("fields").class("dynamic-fields"))
            .child(
                Element::div()
                    .id("field")
                    .class("dynamic-field")
                    .child(Element::button("Remove").id("remove")),
            ),
    )
}

// ============================================================================
// Class lists
// ============================================================================

#[test]
fn test_class_list_add_remove_toggle() {
    let mut list = ClassList::parse("btn  btn-primary btn");
    assert_eq!(list.to_string(), "btn btn-primary");

    assert!(list.add("active"));
    assert!(!list.add("active"));
    assert!(list.remove("btn"));
    assert!(!list.remove("btn"));

    assert!(list.toggle("sorted"));
    assert!(list.contains("sorted"));
    assert!(!list.toggle("sorted"));
    assert!(!list.contains("sorted"));
}

#[test]
fn test_class_list_set_replaces_everything() {
    let mut list = ClassList::parse("text-danger bold");
    list.set("text-success");
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["text-success"]);
}

#[test]
fn test_builder_class_splits_words() {
    let el = Element::div().class("alert alert-info");
    assert!(el.has_class("alert"));
    assert!(el.has_class("alert-info"));
    assert_eq!(el.classes.len(), 2);
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = page();
    assert_eq!(find_element(&root, "remove").map(|e| e.tag.clone()), Some(Tag::Button));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = page();
    find_element_mut(&mut root, "remove").unwrap().set_text("Delete");
    assert_eq!(find_element(&root, "remove").unwrap().text_content(), "Delete");
}

#[test]
fn test_find_all_document_order() {
    let root = page();
    let ids: Vec<&str> = find_all(&root, &|el| el.tag == Tag::Div)
        .into_iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(ids, vec!["group", "fields", "field"]);
}

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::div()
        .child(Element::span("Hello, "))
        .child(Element::span("world"));
    assert_eq!(el.text_content(), "Hello, world");
}

#[test]
fn test_template_content_is_inert() {
    let root = Element::body()
        .child(Element::template().id("tpl").child(Element::div().id("inside").class("row")))
        .child(Element::div().id("outside").class("row"));

    assert!(find_element(&root, "tpl").is_some());
    assert!(find_element(&root, "inside").is_none());
    assert!(path_to(&root, "inside").is_none());
    assert_eq!(find_all(&root, &|el| el.has_class("row")).len(), 1);
    assert_eq!(find_element(&root, "tpl").unwrap().child_elements().len(), 1);
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_path_to_and_back() {
    let root = page();
    let path = path_to(&root, "remove").unwrap();
    assert_eq!(path, vec![0, 1, 0]);
    assert_eq!(element_at_path(&root, &path).unwrap().id, "remove");
    assert_eq!(path_to(&root, "root"), Some(vec![]));
}

#[test]
fn test_closest_includes_self_and_ancestors() {
    let root = page();
    let field = closest_path(&root, "remove", |el| el.has_class("dynamic-field")).unwrap();
    assert_eq!(element_at_path(&root, &field).unwrap().id, "field");

    let group = closest_path(&root, "remove", |el| el.has_class("form-group")).unwrap();
    assert_eq!(element_at_path(&root, &group).unwrap().id, "group");

    let own = closest_path(&root, "field", |el| el.has_class("dynamic-field")).unwrap();
    assert_eq!(own, field);

    assert!(closest_path(&root, "remove", |el| el.has_class("nope")).is_none());
}

#[test]
fn test_remove_at_path() {
    let mut root = page();
    let path = find_path(&root, |el| el.id == "field").unwrap();
    let removed = remove_at_path(&mut root, &path).unwrap();
    assert_eq!(removed.id, "field");
    assert!(find_element(&root, "remove").is_none());

    assert!(remove_at_path(&mut root, &[]).is_none(), "root stays");
    assert!(remove_at_path(&mut root, &[0, 9]).is_none());
}

#[test]
fn test_remove_all_takes_subtrees() {
    let mut root = Element::body()
        .child(Element::div().class("alert").child(Element::div().class("alert")))
        .child(Element::div().class("keep"))
        .child(Element::div().class("alert"));
    let removed = remove_all(&mut root, &|el| el.has_class("alert"));
    assert_eq!(removed.len(), 2);
    assert_eq!(root.child_elements().len(), 1);
    assert!(root.child_elements()[0].has_class("keep"));
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_table_accessors() {
    let table = Element::table()
        .id("scores")
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("Team"))
                    .child(Element::th("Points")),
            ),
        )
        .child(
            Element::tbody()
                .child(Element::tr().child(Element::td(" Lions ")).child(Element::td("3")))
                .child(Element::tr().child(Element::td("Bears"))),
        );

    assert_eq!(header_cells(&table).len(), 2);
    let body = first_body(&table).unwrap();
    assert!(matches!(body.content, Content::Children(ref rows) if rows.len() == 2));
    assert_eq!(cell_text(&body.child_elements()[0], 0).as_deref(), Some("Lions"));
    assert_eq!(
        column_texts(&table, 1),
        vec![Some("3".to_string()), None]
    );
}
