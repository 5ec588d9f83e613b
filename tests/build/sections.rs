//! Tests for sectionizing page trees.

use crate::common::{heading, paragraph, root, text};
use sectra::testing::{emphasis, node};
use sectra::tree::prune;
use sectra::{to_sectioned_parts, Error, HeadingLevel};

#[test]
fn test_k_headings_give_k_plus_one_sections() {
    let tree = root(vec![
        heading(2, "One", None),
        paragraph(vec![text("a")]),
        heading(3, "Two", None),
        heading(2, "Three", None),
        paragraph(vec![text("b")]),
    ]);
    let sections = to_sectioned_parts(&tree).unwrap();
    assert_eq!(sections.len(), 4);
    assert!(sections[0].heading.is_none());
    assert!(sections[0].parts.is_empty());
    let depths: Vec<_> = sections[1..]
        .iter()
        .map(|s| s.heading.as_ref().unwrap().depth)
        .collect();
    assert_eq!(
        depths,
        vec![HeadingLevel::Lvl2, HeadingLevel::Lvl3, HeadingLevel::Lvl2]
    );
}

#[test]
fn test_inline_markup_is_flattened_in_order() {
    let tree = root(vec![paragraph(vec![
        text("Fire "),
        emphasis(vec![text("both")]),
        text(" engines."),
    ])]);
    let sections = to_sectioned_parts(&tree).unwrap();
    assert_eq!(sections[0].parts, vec!["Fire ", "both", " engines.", "\n"]);
    assert_eq!(sections[0].content(), "Fire both engines.\n");
}

#[test]
fn test_heading_text_includes_nested_markup() {
    let mut h = heading(2, "Delta-V ", Some("dv"));
    h.children.push(emphasis(vec![text("Budget")]));
    let sections = to_sectioned_parts(&root(vec![h])).unwrap();
    let info = sections[1].heading.as_ref().unwrap();
    assert_eq!(info.text, "Delta-V Budget");
    assert!(sections[1].parts.is_empty());
}

#[test]
fn test_pruned_nodes_leave_no_text() {
    let mut tree = root(vec![
        paragraph(vec![text("Keep.")]),
        node("code", vec![text("drop()")]),
        paragraph(vec![node("inlineCode", vec![text("x")]), text("tail")]),
    ]);
    prune(&mut tree, &["code", "inlineCode"]);
    let sections = to_sectioned_parts(&tree).unwrap();
    assert_eq!(sections[0].content(), "Keep.\ntail\n");
}

#[test]
fn test_missing_depth_is_rejected() {
    let mut h = heading(2, "Nowhere", None);
    h.depth = None;
    let err = to_sectioned_parts(&root(vec![h])).unwrap_err();
    assert!(
        matches!(err, Error::InvalidHeadingDepth { depth: 0 }),
        "unexpected error: {}",
        err
    );
}
