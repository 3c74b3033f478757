use serde::{Deserialize, Serialize};

/// Snapshot of the environment inputs configuration assembly depends on.
///
/// Process-global reads happen once, here; everything downstream takes this
/// struct as a parameter so tests can supply fixture values.
#[derive(Debug, Clone, Default)]
pub struct BuildEnv {
    /// Build mode, from `NODE_ENV`.
    pub mode: Mode,

    /// Public URL override, from `PUBLIC_URL`.
    pub public_url_override: Option<String>,
}

/// Build mode (dev builds get hot-reload entries injected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
    Test,
}

impl Mode {
    /// Parse a `NODE_ENV` value. Anything other than `development` or `test`
    /// is treated as production.
    #[must_use]
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("development") => Self::Development,
            Some("test") => Self::Test,
            _ => Self::Production,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl BuildEnv {
    /// Read `NODE_ENV` and `PUBLIC_URL` from the process environment.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self {
            mode: Mode::from_node_env(std::env::var("NODE_ENV").ok().as_deref()),
            public_url_override: std::env::var("PUBLIC_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Create an env snapshot with the given mode and no overrides.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            public_url_override: None,
        }
    }

    /// Set the public URL override.
    #[must_use]
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url_override = Some(url.into());
        self
    }
}
