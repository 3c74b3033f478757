//! Resolved project paths.
//!
//! One immutable snapshot of every filesystem location the build pipeline
//! consumes, assembled once per invocation and never mutated afterwards.

use crate::config::BuildEnv;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::plugins::{self, EntryMap, MAIN_ENTRY};
use crate::public_url::public_url_or_path;
use crate::resolve::resolve_module;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Module injected into every dev-mode entry for hot reloading, relative to
/// `node_modules`.
const HOT_CLIENT: &str = "webforge/hotDevClient.js";

/// The assembled configuration snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPaths {
    pub dotenv: PathBuf,
    pub app_path: PathBuf,
    pub app_build: PathBuf,
    pub app_public: PathBuf,
    pub app_html: PathBuf,
    pub app_index: PathBuf,
    pub app_entries: EntryMap,
    pub app_package_json: PathBuf,
    pub app_src: PathBuf,
    pub app_ts_config: PathBuf,
    pub app_js_config: PathBuf,
    pub yarn_lock_file: PathBuf,
    pub tests_setup: PathBuf,
    pub proxy_setup: PathBuf,
    pub app_node_modules: PathBuf,
    pub public_url_or_path: String,
}

impl ProjectPaths {
    /// Assemble the snapshot for the project at `root`.
    ///
    /// Symlinks in `root` are resolved first so every derived path is real.
    /// Reads the manifest (required), resolves the ambiguous entry modules,
    /// and discovers plugin entries alongside the always-present `main`
    /// entry.
    pub fn collect(root: &Path, env: &BuildEnv) -> Result<Self, Error> {
        let root = dunce::canonicalize(root)?;

        let manifest = Manifest::read(&root.join("package.json"))?;
        let public_url = public_url_or_path(
            env.mode.is_development(),
            manifest.homepage.as_deref(),
            env.public_url_override.as_deref(),
        );

        let app_node_modules = root.join("node_modules");
        let hot_client = app_node_modules.join(HOT_CLIENT);

        let app_index = resolve_module(&root, "src/index");

        let mut app_entries = plugins::discover(&root.join("src/plugins"), env.mode, &hot_client)?;
        let mut main_modules = vec![app_index.clone()];
        if env.mode.is_development() {
            main_modules.push(hot_client);
        }
        app_entries.insert(MAIN_ENTRY.to_owned(), main_modules);

        tracing::debug!(
            root = %root.display(),
            mode = env.mode.as_str(),
            entries = app_entries.len(),
            public_url = %public_url,
            "assembled project paths"
        );

        Ok(Self {
            dotenv: root.join(".env"),
            app_build: root.join("build"),
            app_public: root.join("public"),
            app_html: root.join("public/index.html"),
            app_index,
            app_entries,
            app_package_json: root.join("package.json"),
            app_src: root.join("src"),
            app_ts_config: root.join("tsconfig.json"),
            app_js_config: root.join("jsconfig.json"),
            yarn_lock_file: root.join("yarn.lock"),
            tests_setup: resolve_module(&root, "src/setupTests"),
            proxy_setup: root.join("src/setupProxy.js"),
            app_node_modules,
            public_url_or_path: public_url,
            app_path: root,
        })
    }
}

/// Find the project root by walking up from `cwd` looking for `package.json`
/// or `.git`.
///
/// Returns the first directory containing either marker, or `None` if
/// neither is found.
#[must_use]
pub fn project_root(cwd: &Path) -> Option<PathBuf> {
    let mut current = cwd.to_path_buf();

    loop {
        if current.join("package.json").exists() || current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use std::fs;
    use tempfile::tempdir;

    fn scaffold(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("package.json"), r#"{"name": "fixture"}"#).unwrap();
    }

    #[test]
    fn test_collect_static_joins() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());

        let paths = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Production)).unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();

        assert_eq!(paths.app_path, root);
        assert_eq!(paths.dotenv, root.join(".env"));
        assert_eq!(paths.app_build, root.join("build"));
        assert_eq!(paths.app_public, root.join("public"));
        assert_eq!(paths.app_html, root.join("public/index.html"));
        assert_eq!(paths.app_package_json, root.join("package.json"));
        assert_eq!(paths.app_src, root.join("src"));
        assert_eq!(paths.app_ts_config, root.join("tsconfig.json"));
        assert_eq!(paths.app_js_config, root.join("jsconfig.json"));
        assert_eq!(paths.yarn_lock_file, root.join("yarn.lock"));
        assert_eq!(paths.proxy_setup, root.join("src/setupProxy.js"));
        assert_eq!(paths.app_node_modules, root.join("node_modules"));
        assert_eq!(paths.public_url_or_path, "/");
    }

    #[test]
    fn test_collect_resolves_ambiguous_modules() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        fs::write(dir.path().join("src/index.tsx"), "").unwrap();
        fs::write(dir.path().join("src/setupTests.js"), "").unwrap();

        let paths = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Production)).unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();

        assert_eq!(paths.app_index, root.join("src/index.tsx"));
        assert_eq!(paths.tests_setup, root.join("src/setupTests.js"));
    }

    #[test]
    fn test_collect_main_entry_always_present() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());

        let paths = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Production)).unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();

        assert_eq!(paths.app_entries.len(), 1);
        // No index file on disk: entry carries the .js fallback
        assert_eq!(paths.app_entries["main"], vec![root.join("src/index.js")]);
    }

    #[test]
    fn test_collect_dev_mode_injects_hot_client() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        fs::write(dir.path().join("src/index.tsx"), "").unwrap();

        let paths = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Development)).unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();

        assert_eq!(
            paths.app_entries["main"],
            vec![
                root.join("src/index.tsx"),
                root.join("node_modules").join(HOT_CLIENT),
            ]
        );
    }

    #[test]
    fn test_collect_merges_plugin_entries() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        fs::create_dir_all(dir.path().join("src/plugins/chart")).unwrap();
        fs::write(dir.path().join("src/plugins/chart/Chart.tsx"), "").unwrap();

        let paths = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Production)).unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();

        assert_eq!(paths.app_entries.len(), 2);
        assert_eq!(
            paths.app_entries["chart"],
            vec![root.join("src/plugins/chart/Chart.tsx")]
        );
        assert!(paths.app_entries.contains_key("main"));
    }

    #[test]
    fn test_collect_missing_manifest_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();

        let err = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Production)).unwrap_err();
        assert!(matches!(err, Error::ManifestRead { .. }));
    }

    #[test]
    fn test_collect_homepage_drives_public_url() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "fixture", "homepage": "https://example.com/widgets"}"#,
        )
        .unwrap();

        let paths = ProjectPaths::collect(dir.path(), &BuildEnv::new(Mode::Production)).unwrap();
        assert_eq!(paths.public_url_or_path, "/widgets/");
    }

    #[test]
    fn test_collect_env_override_beats_homepage() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "fixture", "homepage": "https://example.com/widgets"}"#,
        )
        .unwrap();

        let env = BuildEnv::new(Mode::Production).with_public_url("https://cdn.example.com/x");
        let paths = ProjectPaths::collect(dir.path(), &env).unwrap();
        assert_eq!(paths.public_url_or_path, "https://cdn.example.com/x/");
    }

    #[test]
    fn test_project_root_with_package_json() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src").join("components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        let root = project_root(&nested);
        assert_eq!(root, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_project_root_with_git() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let root = project_root(&nested);
        assert_eq!(root, Some(dir.path().to_path_buf()));
    }
}
