use miette::{IntoDiagnostic, Result};
use std::path::Path;

/// Run the entries command: print the bundle entry map only.
pub fn run(cwd: &Path, mode_flag: Option<&str>, json: bool) -> Result<()> {
    let paths = super::snapshot(cwd, mode_flag)?;

    if json {
        let json = serde_json::to_string_pretty(&paths.app_entries).into_diagnostic()?;
        println!("{json}");
        return Ok(());
    }

    for (name, modules) in &paths.app_entries {
        println!("{name}:");
        for module in modules {
            println!("  {}", module.display());
        }
    }

    Ok(())
}
