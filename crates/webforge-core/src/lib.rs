#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod env;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod plugins;
pub mod public_url;
pub mod resolve;
pub mod version;

pub use config::{BuildEnv, Mode};
pub use error::Error;
pub use manifest::Manifest;
pub use paths::{project_root, ProjectPaths};
pub use plugins::{EntryMap, MAIN_ENTRY, PLUGIN_ENTRY_EXTENSION};
pub use public_url::public_url_or_path;
pub use resolve::{resolve_module, MODULE_FILE_EXTENSIONS};
pub use version::VERSION;
