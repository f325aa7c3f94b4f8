//! Tolerant, header-driven recipe parser.
//!
//! Input documents are uncontrolled free text, so the parser is total: every
//! malformed shape degrades to sentinel defaults and unrecognized lines are
//! dropped. Parsing runs two cooperating passes over the lines:
//!
//! 1. an inline-value harvest, for authors who put the value on the same
//!    line as the header (`Yield: 4 servings`);
//! 2. a block-capture state machine, for authors who put the value on the
//!    lines below the header, with explicit `== Start/End Capture` markers
//!    acting as hard section boundaries.

mod clean;
mod section;

pub use clean::strip_bullet;
pub use section::{classify_header, is_capture_boundary, SectionKind};

use std::collections::HashSet;

use crate::model::{RecipeRecord, DEFAULT_CHEF, DEFAULT_TITLE, DEFAULT_YIELD};

/// Per-document accumulator threaded through both passes.
///
/// Title and yield are first-wins, which `Option` makes explicit; chefs
/// accumulate across every author-family section in the document.
#[derive(Debug, Default)]
struct RecordBuilder {
    title: Option<String>,
    recipe_yield: Option<String>,
    chefs: Vec<String>,
    steps: Vec<String>,
}

impl RecordBuilder {
    fn set_title_if_unset(&mut self, value: &str) {
        if self.title.is_none() && !value.is_empty() {
            self.title = Some(value.to_string());
        }
    }

    fn set_yield_if_unset(&mut self, value: &str) {
        if self.recipe_yield.is_none() && !value.is_empty() {
            self.recipe_yield = Some(value.to_string());
        }
    }

    fn push_chef(&mut self, raw: &str) {
        let name = strip_bullet(raw);
        if !name.is_empty() {
            self.chefs.push(name);
        }
    }

    /// Apply a closing section's buffered lines to the record.
    fn flush(&mut self, kind: SectionKind, buffer: &[String]) {
        let content: Vec<&str> = buffer
            .iter()
            .map(|line| line.trim_end())
            .filter(|line| !line.trim().is_empty())
            .collect();
        if content.is_empty() {
            return;
        }
        match kind {
            SectionKind::RecipeName => self.set_title_if_unset(content[0]),
            SectionKind::Yield => self.set_yield_if_unset(&content.join(" ")),
            SectionKind::Procedure => {
                // First procedure block wins; later ones are ignored.
                if self.steps.is_empty() {
                    for line in &content {
                        let step = strip_bullet(line);
                        if !step.is_empty() {
                            self.steps.push(step);
                        }
                    }
                }
            }
            SectionKind::Author => {
                for line in &content {
                    self.push_chef(line);
                }
            }
            // Owned so their body cannot leak into a neighbor, then dropped.
            SectionKind::Ingredients | SectionKind::ChefNotes => {}
        }
    }

    fn finish(self) -> RecipeRecord {
        // De-dupe chefs case-insensitively, first-seen order and casing kept.
        let mut seen = HashSet::new();
        let chefs: Vec<String> = self
            .chefs
            .into_iter()
            .filter(|name| seen.insert(name.to_lowercase()))
            .collect();
        let chef = if chefs.is_empty() {
            DEFAULT_CHEF.to_string()
        } else {
            chefs.join("; ")
        };
        RecipeRecord {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            recipe_yield: self
                .recipe_yield
                .unwrap_or_else(|| DEFAULT_YIELD.to_string()),
            chef,
            steps: self.steps,
        }
    }
}

/// Parse one document's lines into a [`RecipeRecord`].
///
/// Never fails: documents with no recognizable headers (or no content at
/// all) produce a record made entirely of sentinel defaults.
pub fn parse_recipe<I, S>(lines: I) -> RecipeRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = lines
        .into_iter()
        .map(|line| line.as_ref().trim_end_matches(&['\r', '\n'][..]).to_string())
        .collect();

    let mut builder = RecordBuilder::default();

    // Pass 1: same-line values next to their header.
    for line in &lines {
        if let Some((kind, rest)) = classify_header(line) {
            match kind {
                SectionKind::RecipeName => builder.set_title_if_unset(rest),
                SectionKind::Yield => builder.set_yield_if_unset(rest),
                SectionKind::Author if !rest.is_empty() => builder.push_chef(rest),
                _ => {}
            }
        }
    }

    // Pass 2: block capture with explicit boundaries.
    let mut current: Option<SectionKind> = None;
    let mut buffer: Vec<String> = Vec::new();

    for line in &lines {
        if is_capture_boundary(line) {
            if let Some(kind) = current.take() {
                builder.flush(kind, &buffer);
                buffer.clear();
            }
            continue;
        }
        if let Some((kind, rest)) = classify_header(line) {
            if let Some(open) = current.take() {
                builder.flush(open, &buffer);
            }
            buffer.clear();
            if !rest.is_empty() {
                buffer.push(rest.to_string());
            }
            current = Some(kind);
            continue;
        }
        if current.is_some() {
            buffer.push(line.clone());
        }
        // Lines outside any open section are dropped.
    }
    if let Some(kind) = current {
        builder.flush(kind, &buffer);
    }

    builder.finish()
}

/// Convenience wrapper for callers holding the whole document as one string.
pub fn parse_recipe_text(text: &str) -> RecipeRecord {
    parse_recipe(text.lines())
}
