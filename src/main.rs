use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::error;

use recipe_sheet_import::{plan_workbook, ImportConfig, SheetNameRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ImportConfig::load().unwrap_or_else(|e| {
        error!("Falling back to default configuration: {e}");
        ImportConfig::default()
    });

    // Positional argument overrides the configured input directory
    let args: Vec<String> = env::args().collect();
    let input_dir = args.get(1).cloned().unwrap_or_else(|| config.input_dir.clone());

    let mut registry = SheetNameRegistry::with_reserved(config.reserved_sheet_names.clone());
    let plan = plan_workbook(Path::new(&input_dir), &config.layout, &mut registry)?;
    let sheet_count = plan.sheets.len();

    if config.output_path == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &plan)?;
        handle.write_all(b"\n")?;
    } else {
        fs::write(&config.output_path, serde_json::to_string_pretty(&plan)?)?;
        println!(
            "Workbook plan written to '{}' with {} sheets.",
            config.output_path, sheet_count
        );
    }

    Ok(())
}
