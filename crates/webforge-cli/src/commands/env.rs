use miette::{IntoDiagnostic, Result};
use std::path::Path;
use webforge_core::env::{client_env, load_env_files};
use webforge_core::ProjectPaths;

/// Run the env command: print the environment exposed to client code for
/// the given mode.
pub fn run(cwd: &Path, mode_flag: Option<&str>, json: bool) -> Result<()> {
    let env = super::build_env(mode_flag);
    let root = super::find_root(cwd)?;
    let paths = ProjectPaths::collect(&root, &env).into_diagnostic()?;

    let file_env = load_env_files(&root, env.mode);
    let client = client_env(&file_env, env.mode, &paths.public_url_or_path);

    if json {
        let json = serde_json::to_string_pretty(&client).into_diagnostic()?;
        println!("{json}");
        return Ok(());
    }

    for (key, value) in &client {
        println!("{key}={value}");
    }

    Ok(())
}
