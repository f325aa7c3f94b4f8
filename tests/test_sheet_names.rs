use recipe_sheet_import::{sanitize_sheet_name, SheetNameRegistry};
use std::collections::HashSet;

#[test]
fn test_repeated_titles_get_distinct_names() {
    let mut used = HashSet::new();
    let names: Vec<String> = (0..20)
        .map(|_| sanitize_sheet_name("Braised Short Ribs", &mut used))
        .collect();

    let distinct: HashSet<&String> = names.iter().collect();
    assert_eq!(distinct.len(), 20);
    for name in &names {
        assert!(name.chars().count() <= 31);
        // The base survives as a prefix, up to truncation for the suffix.
        assert!(name.starts_with("Braised Short Ribs"));
    }
    assert_eq!(names[0], "Braised Short Ribs");
    assert_eq!(names[1], "Braised Short Ribs_1");
}

#[test]
fn test_long_titles_truncate_base_not_suffix() {
    let mut used = HashSet::new();
    let long_title = "An Extraordinarily Long Recipe Title That Overruns";
    let first = sanitize_sheet_name(long_title, &mut used);
    let second = sanitize_sheet_name(long_title, &mut used);
    let eleventh = {
        for _ in 0..8 {
            sanitize_sheet_name(long_title, &mut used);
        }
        sanitize_sheet_name(long_title, &mut used)
    };

    assert_eq!(first.chars().count(), 31);
    assert_eq!(second.chars().count(), 31);
    assert!(second.ends_with("_1"));
    // Two-digit suffixes shave one more character off the base.
    assert!(eleventh.ends_with("_10"));
    assert_eq!(eleventh.chars().count(), 31);
}

#[test]
fn test_forbidden_characters_and_fallback() {
    let mut used = HashSet::new();
    assert_eq!(
        sanitize_sheet_name("Soup: Chicken/Noodle [v2]?", &mut used),
        "Soup ChickenNoodle v2"
    );
    assert_eq!(sanitize_sheet_name("*?:", &mut used), "Sheet");
}

#[test]
fn test_registry_respects_reserved_names() {
    let mut registry = SheetNameRegistry::with_reserved(["Sheet1", "Summary"]);
    assert_eq!(registry.claim("Sheet1"), "Sheet1_1");
    assert_eq!(registry.claim("Summary"), "Summary_1");
    assert_eq!(registry.claim("Fresh"), "Fresh");
    assert_eq!(registry.len(), 5);
}
