//! Extracts structured recipe records from loosely-formatted free-text
//! documents and plans their layout for an external spreadsheet writer.
//!
//! The interesting part is the parser: a tolerant, header-driven
//! section-capture state machine that recovers clean fields from
//! human-authored text whose headers vary in wording, casing, and
//! punctuation. Around it sit a sheet-name sanitizer (unique, 31-character,
//! forbidden-character-free names) and a batch driver that turns a directory
//! of `.txt` documents into a serializable [`plan::WorkbookPlan`].

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod plan;
pub mod sheet_name;

use std::fs;
use std::path::Path;

use log::{debug, info};

pub use crate::config::{ImportConfig, Layout};
pub use crate::error::ImportError;
pub use crate::model::RecipeRecord;
pub use crate::parser::{parse_recipe, parse_recipe_text};
pub use crate::plan::{CellWrite, SheetPlan, WorkbookPlan};
pub use crate::sheet_name::{sanitize_sheet_name, SheetNameRegistry};

/// Read and parse one document.
///
/// Content is decoded lossily, so binary or mis-encoded files degrade to an
/// all-defaults record rather than failing; only the read itself can error.
pub fn import_document(path: &Path) -> Result<RecipeRecord, ImportError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_recipe(text.lines()))
}

/// Parse every `.txt` document under `dir` and plan one sheet per document.
///
/// Files are visited in sorted path order so the registry resolves name
/// collisions deterministically across runs. The caller-supplied `registry`
/// carries any names already taken in the destination workbook and
/// accumulates the names claimed here.
pub fn plan_workbook(
    dir: &Path,
    layout: &Layout,
    registry: &mut SheetNameRegistry,
) -> Result<WorkbookPlan, ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::InvalidInput(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    paths.sort();

    let mut workbook = WorkbookPlan::default();
    for path in paths {
        info!("Processing file: {}", path.display());
        let record = import_document(&path)?;
        debug!("{:#?}", record);
        let sheet_name = registry.claim(&record.title);
        info!("Creating sheet for: {}", sheet_name);
        workbook
            .sheets
            .push(SheetPlan::build(sheet_name, &record, layout));
    }
    Ok(workbook)
}

/// [`plan_workbook`] with a fresh registry, for callers without reserved
/// names to carry over.
pub fn import_directory(dir: &Path, layout: &Layout) -> Result<WorkbookPlan, ImportError> {
    plan_workbook(dir, layout, &mut SheetNameRegistry::new())
}
