//! Sheet-name sanitization for the destination workbook namespace.

use std::collections::HashSet;

/// Characters a sheet name may not contain.
const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '[', ']'];
/// Hard cap on sheet-name length.
const MAX_LEN: usize = 31;
/// Substituted when sanitization leaves nothing behind.
const FALLBACK: &str = "Sheet";

/// Normalize `name` into a valid, unique sheet name and register it in
/// `existing`.
///
/// Forbidden characters are removed, the result is truncated to 31
/// characters, and collisions against `existing` are resolved with `_1`,
/// `_2`, … suffixes (the base is re-truncated so the suffix always fits).
/// Always succeeds; the returned name is registered before return, so the
/// same set must be threaded across every call within a run.
pub fn sanitize_sheet_name(name: &str, existing: &mut HashSet<String>) -> String {
    let cleaned: String = name.chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    let mut base: String = cleaned.chars().take(MAX_LEN).collect();
    if base.is_empty() {
        base = FALLBACK.to_string();
    }

    let mut candidate = base.clone();
    let mut counter = 1u32;
    while existing.contains(&candidate) {
        let suffix = format!("_{counter}");
        candidate = base
            .chars()
            .take(MAX_LEN.saturating_sub(suffix.len()))
            .collect::<String>()
            + &suffix;
        counter += 1;
    }
    existing.insert(candidate.clone());
    candidate
}

/// Process-lifetime record of the sheet names already claimed in this run.
///
/// Grows monotonically as documents are processed; never persisted.
#[derive(Debug, Default)]
pub struct SheetNameRegistry {
    used: HashSet<String>,
}

impl SheetNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with names already taken in the destination
    /// workbook (e.g. template sheets).
    pub fn with_reserved<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SheetNameRegistry {
            used: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Sanitize `title` and claim the resulting name.
    pub fn claim(&mut self, title: &str) -> String {
        sanitize_sheet_name(title, &mut self.used)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
