//! Header classification for the section-capture state machine.
//!
//! A header line declares the start of a named section, e.g. `Procedure:` or
//! `Chef Created By: A. Smith`. Matching is deliberately loose: any casing,
//! flexible whitespace inside multi-word keywords, an optional trailing
//! colon, and an optional same-line value after the keyword.

/// The closed set of recognized sections. The five chef-family synonyms all
/// map to [`SectionKind::Author`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    RecipeName,
    Yield,
    Procedure,
    /// Captured so its body cannot leak into a neighboring section, but its
    /// content is discarded at flush.
    Ingredients,
    /// Same boundary-only role as [`SectionKind::Ingredients`].
    ChefNotes,
    Author,
}

/// Header keyword synonyms, most specific first so "chef notes" and
/// "chef created by" win over the bare "chef" prefix.
const SYNONYMS: &[(&str, SectionKind)] = &[
    ("chef created by", SectionKind::Author),
    ("chef notes", SectionKind::ChefNotes),
    ("recipe name", SectionKind::RecipeName),
    ("created by", SectionKind::Author),
    ("ingredients", SectionKind::Ingredients),
    ("chef name", SectionKind::Author),
    ("ingredient", SectionKind::Ingredients),
    ("procedure", SectionKind::Procedure),
    ("yield", SectionKind::Yield),
    ("chef", SectionKind::Author),
];

/// Classify a line as a section header.
///
/// Returns the section kind and the same-line remainder (trimmed, possibly
/// empty), or `None` when the line is not a header.
pub fn classify_header(line: &str) -> Option<(SectionKind, &str)> {
    let trimmed = line.trim_start();
    for &(keyword, kind) in SYNONYMS {
        if let Some(rest) = match_keyword(trimmed, keyword) {
            return Some((kind, rest));
        }
    }
    None
}

/// Recognize an explicit capture-boundary marker such as `== Start Capture`
/// or `=== end capture`: two or more `=`, then start/end, then "capture".
pub fn is_capture_boundary(line: &str) -> bool {
    let trimmed = line.trim_start();
    let eq_count = trimmed.bytes().take_while(|&b| b == b'=').count();
    if eq_count < 2 {
        return false;
    }
    let rest = trimmed[eq_count..].trim_start();
    let rest = match strip_prefix_ignore_case(rest, "start")
        .or_else(|| strip_prefix_ignore_case(rest, "end"))
    {
        Some(r) => r.trim_start(),
        None => return false,
    };
    strip_prefix_ignore_case(rest, "capture").is_some()
}

/// Match a multi-word keyword at the start of `input`, tolerating any amount
/// of whitespace (including none) between the keyword's words. On success,
/// returns everything after the keyword with whitespace and one optional
/// colon consumed.
fn match_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let mut rest = input;
    for word in keyword.split(' ') {
        rest = strip_prefix_ignore_case(rest.trim_start(), word)?;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    Some(rest.trim())
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}
