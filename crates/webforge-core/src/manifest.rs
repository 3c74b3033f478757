//! `package.json` view.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The subset of `package.json` the configuration layer reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Deployment URL; the public path is derived from it when `PUBLIC_URL`
    /// is unset.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Target-browser queries, passed through untouched.
    #[serde(default)]
    pub browserslist: Option<serde_json::Value>,
}

impl Manifest {
    /// Read and parse the manifest. A missing or malformed manifest is a
    /// hard error — configuration cannot be assembled without it.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "app", "version": "1.2.3", "homepage": "https://example.com/app"}"#,
        )
        .unwrap();

        let manifest = Manifest::read(&path).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("app"));
        assert_eq!(manifest.version.as_deref(), Some("1.2.3"));
        assert_eq!(manifest.homepage.as_deref(), Some("https://example.com/app"));
    }

    #[test]
    fn test_read_manifest_ignores_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name": "app", "dependencies": {"react": "^18"}}"#).unwrap();

        let manifest = Manifest::read(&path).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("app"));
        assert!(manifest.homepage.is_none());
    }

    #[test]
    fn test_missing_manifest_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");

        let err = Manifest::read(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestRead { path: p, .. } if p == path));
    }

    #[test]
    fn test_malformed_manifest_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Manifest::read(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
    }
}
