//! Cell-layout planning for the external spreadsheet writer.
//!
//! The crate never drives a spreadsheet application itself. Instead it plans,
//! as plain serializable data, every range the external writer must fill:
//! one [`SheetPlan`] per document, collected into a [`WorkbookPlan`]. The
//! coordinates all come from [`Layout`]; nothing here is hard-coded.

use log::warn;
use serde::Serialize;

use crate::config::Layout;
use crate::model::RecipeRecord;

/// One rectangular write: an A1-style range and its row-major values.
#[derive(Debug, Clone, Serialize)]
pub struct CellWrite {
    pub range: String,
    pub values: Vec<Vec<String>>,
}

impl CellWrite {
    fn single(range: &str, value: &str) -> CellWrite {
        CellWrite {
            range: range.to_string(),
            values: vec![vec![value.to_string()]],
        }
    }
}

/// Everything the writer must place on one destination sheet.
#[derive(Debug, Clone, Serialize)]
pub struct SheetPlan {
    /// Sanitized, collision-free destination sheet name.
    pub sheet_name: String,
    pub writes: Vec<CellWrite>,
}

/// The full batch: one sheet per input document, in processing order.
#[derive(Debug, Default, Serialize)]
pub struct WorkbookPlan {
    pub sheets: Vec<SheetPlan>,
}

impl SheetPlan {
    /// Lay a record out under `sheet_name` according to `layout`.
    ///
    /// The visible procedure block is always written at full height, with
    /// short recipes padded by empty rows and each step duplicated across
    /// the block's columns. Steps beyond the visible rows go into a single
    /// overflow column below the block when the layout allows it.
    pub fn build(sheet_name: String, record: &RecipeRecord, layout: &Layout) -> SheetPlan {
        let mut writes = Vec::new();

        writes.push(CellWrite::single(&layout.title_range, &record.title));
        for range in &layout.chef_ranges {
            writes.push(CellWrite::single(range, &record.chef));
        }

        let steps = record.emitted_steps();
        let rows = layout.max_visible_steps as usize;
        let width = layout.procedure_columns.len().max(1);
        let block: Vec<Vec<String>> = (0..rows)
            .map(|i| {
                let step = steps.get(i).cloned().unwrap_or_default();
                vec![step; width]
            })
            .collect();
        writes.push(CellWrite {
            range: layout.procedure_block_range(),
            values: block,
        });

        if steps.len() > rows {
            warn!(
                "{}: procedure has {} steps; wrote first {} to {}",
                sheet_name,
                steps.len(),
                rows,
                layout.procedure_block_range()
            );
            if layout.expand_procedure {
                let rest = &steps[rows..];
                writes.push(CellWrite {
                    range: layout.overflow_range(rest.len()),
                    values: rest.iter().map(|step| vec![step.clone()]).collect(),
                });
            }
        }

        writes.push(CellWrite::single(&layout.yield_cell, &record.recipe_yield));

        SheetPlan { sheet_name, writes }
    }
}
