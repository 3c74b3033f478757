pub mod entries;
pub mod env;
pub mod paths;
pub mod version;

use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use webforge_core::{project_root, BuildEnv, Error, Mode, ProjectPaths};

/// Environment snapshot for the invocation; `--mode` overrides the
/// `NODE_ENV`-derived mode.
pub fn build_env(mode_flag: Option<&str>) -> BuildEnv {
    let mut env = BuildEnv::from_process_env();
    if let Some(mode) = mode_flag {
        env.mode = Mode::from_node_env(Some(mode));
    }
    env
}

/// Locate the project root from `cwd`.
pub fn find_root(cwd: &Path) -> Result<PathBuf> {
    project_root(cwd)
        .ok_or_else(|| Error::ProjectNotFound {
            start: cwd.to_path_buf(),
        })
        .into_diagnostic()
}

/// Locate the project root from `cwd` and assemble the paths snapshot.
pub fn snapshot(cwd: &Path, mode_flag: Option<&str>) -> Result<ProjectPaths> {
    let env = build_env(mode_flag);
    let root = find_root(cwd)?;
    ProjectPaths::collect(&root, &env).into_diagnostic()
}
