use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::path::Path;
use webforge_core::ProjectPaths;

/// Run the paths command.
///
/// When `json` is true, outputs a single JSON object to stdout.
/// Otherwise, outputs human-readable formatted text.
pub fn run(cwd: &Path, mode_flag: Option<&str>, json: bool) -> Result<()> {
    let paths = super::snapshot(cwd, mode_flag)?;

    if json {
        print_json(&paths)?;
    } else {
        print_human(&paths)?;
    }

    Ok(())
}

fn print_json(paths: &ProjectPaths) -> Result<()> {
    let json = serde_json::to_string_pretty(paths).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn print_human(paths: &ProjectPaths) -> Result<()> {
    let mut out = io::stdout().lock();

    w(&mut out, "\x1b[1m## Project\x1b[0m\n")?;
    w(
        &mut out,
        &format!("  Root:           {}\n", paths.app_path.display()),
    )?;
    w(
        &mut out,
        &format!("  Source:         {}\n", paths.app_src.display()),
    )?;
    w(
        &mut out,
        &format!("  Build:          {}\n", paths.app_build.display()),
    )?;
    w(
        &mut out,
        &format!("  Public:         {}\n", paths.app_public.display()),
    )?;
    w(
        &mut out,
        &format!("  Index HTML:     {}\n", paths.app_html.display()),
    )?;
    w(
        &mut out,
        &format!("  Public URL:     {}\n", paths.public_url_or_path),
    )?;
    w(&mut out, "\n")?;

    w(&mut out, "\x1b[1m## Modules\x1b[0m\n")?;
    w(
        &mut out,
        &format!("  Index:          {}\n", paths.app_index.display()),
    )?;
    w(
        &mut out,
        &format!("  Tests setup:    {}\n", paths.tests_setup.display()),
    )?;
    w(
        &mut out,
        &format!("  Proxy setup:    {}\n", paths.proxy_setup.display()),
    )?;
    w(&mut out, "\n")?;

    w(&mut out, "\x1b[1m## Config files\x1b[0m\n")?;
    w(
        &mut out,
        &format!("  Manifest:       {}\n", paths.app_package_json.display()),
    )?;
    w(
        &mut out,
        &format!("  Dotenv:         {}\n", paths.dotenv.display()),
    )?;
    w(
        &mut out,
        &format!("  TS config:      {}\n", paths.app_ts_config.display()),
    )?;
    w(
        &mut out,
        &format!("  JS config:      {}\n", paths.app_js_config.display()),
    )?;
    w(
        &mut out,
        &format!("  Lockfile:       {}\n", paths.yarn_lock_file.display()),
    )?;
    w(
        &mut out,
        &format!("  node_modules:   {}\n", paths.app_node_modules.display()),
    )?;
    w(&mut out, "\n")?;

    w(&mut out, "\x1b[1m## Entries\x1b[0m\n")?;
    for (name, modules) in &paths.app_entries {
        w(&mut out, &format!("  {name}:\n"))?;
        for module in modules {
            w(&mut out, &format!("    {}\n", module.display()))?;
        }
    }

    Ok(())
}

fn w(out: &mut impl Write, s: &str) -> Result<()> {
    out.write_all(s.as_bytes()).into_diagnostic()
}
