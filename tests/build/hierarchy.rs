//! Tests for breadcrumb trails.

use crate::common::{heading, paragraph, root, text};
use sectra::{build_hierarchies, build_hierarchy, to_sectioned_parts, Error, HeadingLevel};

fn outline() -> Vec<sectra::Section> {
    // 0: lead, 1: h2 A, 2: h3 A.1, 3: h4 A.1.a, 4: h2 B, 5: h4 B.x
    let tree = root(vec![
        paragraph(vec![text("lead")]),
        heading(2, "A", None),
        heading(3, "A.1", None),
        heading(4, "A.1.a", None),
        heading(2, "B", None),
        heading(4, "B.x", None),
    ]);
    to_sectioned_parts(&tree).unwrap()
}

#[test]
fn test_lead_section_has_only_title() {
    let sections = outline();
    let h = build_hierarchy(Some("Guide"), &sections, 0).unwrap();
    let trail: Vec<_> = h.trail().collect();
    assert_eq!(trail, vec![(HeadingLevel::Lvl1, "Guide")]);
}

#[test]
fn test_nearest_enclosing_heading_per_level() {
    let sections = outline();
    let h = build_hierarchy(Some("Guide"), &sections, 3).unwrap();
    assert_eq!(h.lvl2.as_deref(), Some("A"));
    assert_eq!(h.lvl3.as_deref(), Some("A.1"));
    assert_eq!(h.lvl4.as_deref(), Some("A.1.a"));
}

#[test]
fn test_sibling_resets_deeper_levels() {
    let sections = outline();
    let h = build_hierarchy(Some("Guide"), &sections, 5).unwrap();
    assert_eq!(h.lvl2.as_deref(), Some("B"));
    // A.1 sits above B and must not leak into B's trail
    assert_eq!(h.lvl3, None);
    assert_eq!(h.lvl4.as_deref(), Some("B.x"));
}

#[test]
fn test_body_h1_replaces_title_for_enclosed_sections() {
    let tree = root(vec![
        heading(2, "Before", None),
        heading(1, "Part Two", None),
        heading(3, "Inside", None),
    ]);
    let sections = to_sectioned_parts(&tree).unwrap();
    let h = build_hierarchy(Some("Guide"), &sections, 3).unwrap();
    assert_eq!(h.lvl1.as_deref(), Some("Part Two"));
    assert_eq!(h.lvl2, None);
    assert_eq!(h.lvl3.as_deref(), Some("Inside"));

    let h = build_hierarchy(Some("Guide"), &sections, 2).unwrap();
    assert_eq!(h.lvl1.as_deref(), Some("Part Two"));
    let h = build_hierarchy(Some("Guide"), &sections, 1).unwrap();
    assert_eq!(h.lvl1.as_deref(), Some("Guide"));
}

#[test]
fn test_untitled_page_has_no_lvl1() {
    let sections = outline();
    let all = build_hierarchies(None, &sections).unwrap();
    assert_eq!(all.len(), sections.len());
    assert!(all.iter().all(|h| h.lvl1.is_none()));
}

#[test]
fn test_index_past_end_is_an_error() {
    let sections = outline();
    assert!(matches!(
        build_hierarchy(None, &sections, 6),
        Err(Error::SectionOutOfRange { index: 6, len: 6 })
    ));
}
