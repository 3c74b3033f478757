//! Public URL/path derivation.
//!
//! The base prefix under which built assets are served. Precedence: the
//! `PUBLIC_URL` environment override, then the manifest `homepage` field,
//! then `/`. Development servers always serve from a path, so dev mode keeps
//! only the path component of a full URL.

use url::Url;

/// Stub origin used to parse values that may be bare paths or full URLs.
const STUB_ORIGIN: &str = "https://webforge.invalid";

/// Compute the public URL or path from the three inputs.
///
/// The returned value always ends with `/`. In development, relative
/// (`.`-prefixed) values collapse to `/`; in production a relative homepage
/// is kept verbatim so assets resolve against wherever the page is hosted.
#[must_use]
pub fn public_url_or_path(
    is_dev: bool,
    homepage: Option<&str>,
    env_override: Option<&str>,
) -> String {
    if let Some(raw) = env_override.filter(|v| !v.is_empty()) {
        let value = ensure_trailing_slash(raw);
        return if is_dev { dev_path(&value) } else { value };
    }

    if let Some(raw) = homepage.filter(|v| !v.is_empty()) {
        let value = ensure_trailing_slash(raw);
        if is_dev {
            return dev_path(&value);
        }
        return if value.starts_with('.') {
            value
        } else {
            path_component(&value)
        };
    }

    "/".to_owned()
}

fn ensure_trailing_slash(value: &str) -> String {
    if value.ends_with('/') {
        value.to_owned()
    } else {
        format!("{value}/")
    }
}

fn dev_path(value: &str) -> String {
    if value.starts_with('.') {
        "/".to_owned()
    } else {
        path_component(value)
    }
}

/// Path component of `value`, parsed against a stub origin so bare paths
/// (`/app/`) and full URLs (`https://cdn.example.com/app/`) both work.
fn path_component(value: &str) -> String {
    match Url::parse(STUB_ORIGIN).and_then(|base| base.join(value)) {
        Ok(url) => url.path().to_owned(),
        Err(_) => "/".to_owned(),
    }
}
