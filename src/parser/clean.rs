//! Cleanup applied to captured step and chef lines.

/// Strip one leading bullet marker (`-` or `•`) and one numbering prefix
/// (`1.`, `Step 2:`, `3)`, any casing) from a line, then trim it.
///
/// A numbering prefix is only removed when digits and a terminating `:` `.`
/// or `)` are both present; a bare "Step" or "3 eggs" is left alone.
pub fn strip_bullet(line: &str) -> String {
    let mut rest = line.trim_start();
    if let Some(after) = rest.strip_prefix('-').or_else(|| rest.strip_prefix('•')) {
        rest = after.trim_start();
    }
    strip_numbering(rest).trim().to_string()
}

fn strip_numbering(s: &str) -> &str {
    let mut rest = s.trim_start();
    if let Some(head) = rest.get(..4) {
        if head.eq_ignore_ascii_case("step") {
            rest = rest[4..].trim_start();
        }
    }
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 {
        return s;
    }
    let after = &rest[digits..];
    match after.as_bytes().first() {
        Some(b':') | Some(b'.') | Some(b')') => &after[1..],
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::strip_bullet;

    #[test]
    fn strips_bullets() {
        assert_eq!(strip_bullet("- Butter the bread"), "Butter the bread");
        assert_eq!(strip_bullet("• Grill until golden"), "Grill until golden");
        assert_eq!(strip_bullet("  -  Flip once  "), "Flip once");
    }

    #[test]
    fn strips_numbering() {
        assert_eq!(strip_bullet("1. Butter the bread"), "Butter the bread");
        assert_eq!(strip_bullet("2) Grill until golden"), "Grill until golden");
        assert_eq!(strip_bullet("Step 3: Flip once"), "Flip once");
        assert_eq!(strip_bullet("STEP 10. Serve"), "Serve");
    }

    #[test]
    fn strips_bullet_then_numbering() {
        assert_eq!(strip_bullet("- 1. Butter the bread"), "Butter the bread");
    }

    #[test]
    fn leaves_quantities_alone() {
        // Digits without a terminator are content, not numbering.
        assert_eq!(strip_bullet("3 eggs"), "3 eggs");
        assert_eq!(strip_bullet("Step over the line"), "Step over the line");
        assert_eq!(strip_bullet("step: preheat"), "step: preheat");
    }

    #[test]
    fn empty_after_strip() {
        assert_eq!(strip_bullet("- "), "");
        assert_eq!(strip_bullet("   "), "");
    }
}
