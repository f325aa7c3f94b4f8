use std::fs;
use std::path::Path;

use recipe_sheet_import::{
    import_directory, plan_workbook, ImportError, Layout, SheetNameRegistry,
};

fn write_doc(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_directory_becomes_one_sheet_per_document() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "a_toast.txt",
        "Recipe Name: Toast\nYield: 1 slice\nProcedure:\n- Toast the bread\n",
    );
    write_doc(
        dir.path(),
        "b_soup.txt",
        "Recipe Name: Soup\nProcedure:\n1. Simmer everything\n",
    );
    // Non-txt files are ignored.
    write_doc(dir.path(), "notes.md", "Recipe Name: Should Not Appear\n");

    let plan = import_directory(dir.path(), &Layout::default()).unwrap();

    assert_eq!(plan.sheets.len(), 2);
    // Sorted path order keeps naming deterministic.
    assert_eq!(plan.sheets[0].sheet_name, "Toast");
    assert_eq!(plan.sheets[1].sheet_name, "Soup");
}

#[test]
fn test_duplicate_titles_across_documents_stay_unique() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..3 {
        write_doc(
            dir.path(),
            &format!("doc{i}.txt"),
            "Recipe Name: House Salad\nProcedure:\n- Toss\n",
        );
    }

    let plan = import_directory(dir.path(), &Layout::default()).unwrap();
    let names: Vec<&str> = plan
        .sheets
        .iter()
        .map(|s| s.sheet_name.as_str())
        .collect();
    assert_eq!(names, vec!["House Salad", "House Salad_1", "House Salad_2"]);
}

#[test]
fn test_reserved_names_are_threaded_through_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "doc.txt", "Recipe Name: Summary\n");

    let mut registry = SheetNameRegistry::with_reserved(["Summary"]);
    let plan = plan_workbook(dir.path(), &Layout::default(), &mut registry).unwrap();
    assert_eq!(plan.sheets[0].sheet_name, "Summary_1");
}

#[test]
fn test_binary_content_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("garbage.txt"), [0xFFu8, 0xFE, 0x00, 0x9C]).unwrap();

    let plan = import_directory(dir.path(), &Layout::default()).unwrap();
    assert_eq!(plan.sheets.len(), 1);
    assert_eq!(plan.sheets[0].sheet_name, "Untitled");
}

#[test]
fn test_missing_directory_is_an_invalid_call() {
    let result = import_directory(Path::new("/definitely/not/here"), &Layout::default());
    assert!(matches!(result, Err(ImportError::InvalidInput(_))));
}

#[test]
fn test_plan_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "toast.txt",
        "Recipe Name: Toast\nYield: 1 slice\nProcedure:\n- Toast the bread\n",
    );

    let plan = import_directory(dir.path(), &Layout::default()).unwrap();
    let json = serde_json::to_string_pretty(&plan).unwrap();
    assert!(json.contains("\"sheet_name\": \"Toast\""));
    assert!(json.contains("\"E3:N3\""));
    assert!(json.contains("Toast the bread"));
}
