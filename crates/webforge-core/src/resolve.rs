//! Module-extension resolution.
//!
//! Source code refers to modules by base name (`src/index`); the concrete
//! file on disk may be `src/index.tsx`, `src/index.js`, etc. Resolution
//! probes a fixed extension list in priority order.

use std::path::{Path, PathBuf};

/// Extensions probed for an ambiguous module reference, in priority order.
/// The first extension whose file exists wins, regardless of any later match.
pub const MODULE_FILE_EXTENSIONS: &[&str] = &[
    "web.mjs", "mjs", "web.js", "js", "web.ts", "ts", "web.tsx", "tsx", "json", "web.jsx", "jsx",
];

/// Resolve `relative` under `root` by probing [`MODULE_FILE_EXTENSIONS`].
///
/// When no candidate exists, the `.js` candidate is returned unchecked: a
/// missing entry file surfaces as a build error downstream, never as a
/// configuration error here.
#[must_use]
pub fn resolve_module(root: &Path, relative: &str) -> PathBuf {
    for ext in MODULE_FILE_EXTENSIONS {
        let candidate = root.join(format!("{relative}.{ext}"));
        if candidate.is_file() {
            return candidate;
        }
    }

    root.join(format!("{relative}.js"))
}
