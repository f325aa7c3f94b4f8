use serde::Serialize;

/// Sentinel used when no recipe-name header carried a value.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Sentinel used when no yield header carried a value.
pub const DEFAULT_YIELD: &str = "No yield found.";
/// Sentinel used when no chef-family header carried a value.
pub const DEFAULT_CHEF: &str = "Chef blas/ Commissary ATL";
/// Sentinel emitted in place of an empty procedure.
pub const DEFAULT_PROCEDURE: &str = "No procedure found.";

/// A structured recipe extracted from one free-text document.
///
/// Every field is always populated; a field the document never provided
/// holds its sentinel default rather than being absent.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRecord {
    pub title: String,
    pub recipe_yield: String,
    /// Semicolon-joined, deduplicated chef names.
    pub chef: String,
    /// Cleaned procedure steps, bullet and numbering markers stripped.
    pub steps: Vec<String>,
}

impl RecipeRecord {
    /// The procedure as emitted to a consumer: the cleaned steps, or the
    /// sentinel placeholder when the document had no usable procedure.
    pub fn emitted_steps(&self) -> Vec<String> {
        if self.steps.is_empty() {
            vec![DEFAULT_PROCEDURE.to_string()]
        } else {
            self.steps.clone()
        }
    }

    /// The procedure rendered as one newline-joined string.
    pub fn procedure_text(&self) -> String {
        if self.steps.is_empty() {
            DEFAULT_PROCEDURE.to_string()
        } else {
            self.steps.join("\n")
        }
    }
}

impl Default for RecipeRecord {
    fn default() -> Self {
        RecipeRecord {
            title: DEFAULT_TITLE.to_string(),
            recipe_yield: DEFAULT_YIELD.to_string(),
            chef: DEFAULT_CHEF.to_string(),
            steps: Vec::new(),
        }
    }
}
