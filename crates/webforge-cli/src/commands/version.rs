use miette::{IntoDiagnostic, Result};
use webforge_core::version::{version_string, VERSION};

/// Run the version command.
pub fn run(json: bool) -> Result<()> {
    if json {
        let payload = serde_json::json!({ "version": VERSION });
        println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
    } else {
        println!("{}", version_string());
    }
    Ok(())
}
