use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Run configuration: where documents come from, where the plan goes, and
/// how records map onto the destination sheet.
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Directory scanned for `.txt` documents.
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    /// Destination for the workbook-plan JSON; `-` writes to stdout.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Sheet names already taken in the destination workbook.
    #[serde(default)]
    pub reserved_sheet_names: Vec<String>,
    #[serde(default)]
    pub layout: Layout,
}

/// Cell layout of one destination sheet.
///
/// Presentation-layer configuration consumed by [`crate::plan`]; the parser
/// knows nothing about coordinates. Defaults mirror the master recipe
/// template.
#[derive(Debug, Deserialize, Clone)]
pub struct Layout {
    /// Merged range receiving the title.
    #[serde(default = "default_title_range")]
    pub title_range: String,
    /// Ranges receiving the chef string (the template shows it twice).
    #[serde(default = "default_chef_ranges")]
    pub chef_ranges: Vec<String>,
    /// Columns of the dual-column procedure block.
    #[serde(default = "default_procedure_columns")]
    pub procedure_columns: Vec<String>,
    /// First row of the procedure block.
    #[serde(default = "default_procedure_start_row")]
    pub procedure_start_row: u32,
    /// Visible rows in the procedure block.
    #[serde(default = "default_max_visible_steps")]
    pub max_visible_steps: u32,
    /// Whether steps beyond the visible block spill below it.
    #[serde(default = "default_expand_procedure")]
    pub expand_procedure: bool,
    /// Single column receiving spilled steps.
    #[serde(default = "default_overflow_column")]
    pub overflow_column: String,
    /// Cell receiving the yield.
    #[serde(default = "default_yield_cell")]
    pub yield_cell: String,
}

impl Layout {
    /// A1-style range of the visible procedure block, e.g. `M6:N17`.
    pub fn procedure_block_range(&self) -> String {
        let (first, last) = self.block_columns();
        let end = self.procedure_start_row + self.max_visible_steps - 1;
        format!("{}{}:{}{}", first, self.procedure_start_row, last, end)
    }

    /// A1-style single-column range for `len` overflow rows below the block.
    pub fn overflow_range(&self, len: usize) -> String {
        let start = self.procedure_start_row + self.max_visible_steps;
        let end = start + len.saturating_sub(1) as u32;
        format!(
            "{col}{start}:{col}{end}",
            col = self.overflow_column,
            start = start,
            end = end
        )
    }

    pub(crate) fn block_columns(&self) -> (&str, &str) {
        let first = self.procedure_columns.first().map(String::as_str).unwrap_or("M");
        let last = self.procedure_columns.last().map(String::as_str).unwrap_or("N");
        (first, last)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            title_range: default_title_range(),
            chef_ranges: default_chef_ranges(),
            procedure_columns: default_procedure_columns(),
            procedure_start_row: default_procedure_start_row(),
            max_visible_steps: default_max_visible_steps(),
            expand_procedure: default_expand_procedure(),
            overflow_column: default_overflow_column(),
            yield_cell: default_yield_cell(),
        }
    }
}

// Default value functions
fn default_input_dir() -> String {
    ".".to_string()
}

fn default_output_path() -> String {
    "workbook_plan.json".to_string()
}

fn default_title_range() -> String {
    "E3:N3".to_string()
}

fn default_chef_ranges() -> Vec<String> {
    vec!["E1:J1".to_string(), "E2:J2".to_string()]
}

fn default_procedure_columns() -> Vec<String> {
    vec!["M".to_string(), "N".to_string()]
}

fn default_procedure_start_row() -> u32 {
    6
}

fn default_max_visible_steps() -> u32 {
    12
}

fn default_expand_procedure() -> bool {
    true
}

fn default_overflow_column() -> String {
    "M".to_string()
}

fn default_yield_cell() -> String {
    "N34".to_string()
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
            reserved_sheet_names: Vec::new(),
            layout: Layout::default(),
        }
    }
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SHEETS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SHEETS__LAYOUT__YIELD_CELL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE_SHEETS__LAYOUT__YIELD_CELL
            .add_source(
                Environment::with_prefix("RECIPE_SHEETS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
