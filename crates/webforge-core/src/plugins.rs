//! Plugin entry discovery.
//!
//! Plugins live under `src/plugins/<name>/`, one subdirectory per plugin,
//! each holding a single typed-component entry file. Every discovered plugin
//! becomes an independently bundled entry point keyed by its directory name.

use crate::config::Mode;
use crate::error::Error;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Extension a plugin entry file must carry.
pub const PLUGIN_ENTRY_EXTENSION: &str = "tsx";

/// Entry name reserved for the application itself.
pub const MAIN_ENTRY: &str = "main";

/// Map of entry name to the ordered module list loaded for that entry.
pub type EntryMap = BTreeMap<String, Vec<PathBuf>>;

/// Discover plugin entries under `plugin_root`.
///
/// A missing root yields an empty map. A subdirectory with no matching file
/// is skipped; one with more than one matching file is an error, as is a
/// plugin named [`MAIN_ENTRY`]. In development mode each entry additionally
/// loads the hot-reload client after its own module.
///
/// The directory listing is sorted before use — raw `read_dir` order is
/// platform-dependent.
pub fn discover(plugin_root: &Path, mode: Mode, hot_client: &Path) -> Result<EntryMap, Error> {
    let mut entries = EntryMap::new();

    let read_dir = match std::fs::read_dir(plugin_root) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
        Err(e) => return Err(Error::Io(e)),
    };

    let mut dirs: Vec<PathBuf> = read_dir
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
            continue;
        };

        let Some(entry_file) = plugin_entry_file(&dir, &name)? else {
            tracing::debug!(plugin = %name, "no entry file, skipping");
            continue;
        };

        if name == MAIN_ENTRY {
            return Err(Error::ReservedEntryName(name));
        }

        let mut modules = vec![entry_file];
        if mode.is_development() {
            modules.push(hot_client.to_path_buf());
        }

        tracing::debug!(plugin = %name, modules = modules.len(), "discovered plugin entry");
        entries.insert(name, modules);
    }

    Ok(entries)
}

/// Find the single file in `dir` matching [`PLUGIN_ENTRY_EXTENSION`].
fn plugin_entry_file(dir: &Path, plugin: &str) -> Result<Option<PathBuf>, Error> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(PLUGIN_ENTRY_EXTENSION)
        })
        .collect();
    matches.sort();

    let mut iter = matches.into_iter();
    match (iter.next(), iter.next()) {
        (None, _) => Ok(None),
        (Some(first), None) => Ok(Some(first)),
        (Some(first), Some(second)) => Err(Error::DuplicatePluginEntry {
            plugin: plugin.to_owned(),
            first,
            second,
        }),
    }
}
