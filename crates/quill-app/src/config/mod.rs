//! Configuration file parsing for Quill
//!
//! Settings live in `<config dir>/quill/config.toml` unless a path is given on
//! the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
