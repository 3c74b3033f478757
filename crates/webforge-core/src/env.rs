//! `.env` file loading.
//!
//! Files are consulted in priority order: `.env.<mode>.local`, `.env.local`,
//! `.env.<mode>`, `.env`. The first file defining a key wins. `.env.local`
//! is skipped in test mode so test runs behave the same on every machine.
//! Variables already set in the process environment always win.

use crate::config::Mode;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Prefixes of variables exposed to client code.
pub const CLIENT_ENV_PREFIXES: &[&str] = &["WEBFORGE_", "REACT_APP_"];

/// Parse a `.env` file's contents into key-value pairs.
///
/// Supports `KEY=value`, double-quoted values with escape sequences,
/// single-quoted literal values, an optional `export ` prefix, comments
/// (`#`), and inline comments after unquoted values.
#[must_use]
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, raw_value) = line.split_once('=')?;
    let key = key.trim();
    let key = key.strip_prefix("export ").unwrap_or(key).trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_owned(), unquote(raw_value.trim())))
}

fn unquote(raw: &str) -> String {
    match raw.chars().next() {
        Some('"') => unescape_double_quoted(&raw[1..]),
        Some('\'') => {
            // Single quotes: literal value, no escapes
            let inner = &raw[1..];
            inner.find('\'').map_or(inner, |end| &inner[..end]).to_owned()
        }
        _ => {
            // Unquoted: strip inline comments (` #` with preceding space)
            raw.find(" #").map_or(raw, |pos| raw[..pos].trim_end()).to_owned()
        }
    }
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut value = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some('r') => value.push('\r'),
                Some('t') => value.push('\t'),
                Some('\\') => value.push('\\'),
                Some('"') => value.push('"'),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => break,
            },
            _ => value.push(c),
        }
    }
    value
}

/// Load `.env` files from the project root for the given mode.
///
/// The first file defining a key wins, and keys already present in the
/// process environment are dropped from the result entirely.
#[must_use]
pub fn load_env_files(root: &Path, mode: Mode) -> HashMap<String, String> {
    let mode_name = mode.as_str();

    let mut files = vec![root.join(format!(".env.{mode_name}.local"))];
    if mode != Mode::Test {
        files.push(root.join(".env.local"));
    }
    files.push(root.join(format!(".env.{mode_name}")));
    files.push(root.join(".env"));

    let mut env = HashMap::new();
    for file in files {
        if let Ok(content) = std::fs::read_to_string(&file) {
            tracing::debug!(file = %file.display(), "loaded env file");
            for (key, value) in parse_env_file(&content) {
                env.entry(key).or_insert(value);
            }
        }
    }

    env.retain(|key, _| std::env::var(key).is_err());
    env
}

/// The environment exposed to client code: variables with an allowed prefix,
/// plus `NODE_ENV` and `PUBLIC_URL`.
///
/// `PUBLIC_URL` has its trailing slash stripped so it can be prepended to
/// absolute asset paths (`%PUBLIC_URL%/favicon.ico`).
#[must_use]
pub fn client_env(
    env: &HashMap<String, String>,
    mode: Mode,
    public_url: &str,
) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = env
        .iter()
        .filter(|(key, _)| CLIENT_ENV_PREFIXES.iter().any(|p| key.starts_with(p)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    out.insert("NODE_ENV".to_owned(), mode.as_str().to_owned());
    out.insert(
        "PUBLIC_URL".to_owned(),
        public_url.strip_suffix('/').unwrap_or(public_url).to_owned(),
    );
    out
}
