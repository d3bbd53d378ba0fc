//! Settings parser for config.toml

use super::types::Settings;
use quill_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const QUILL_DIR: &str = "quill";

const DEFAULT_CONFIG: &str = r#"# Quill Configuration
#
# Key chords use Emacs notation: "C-x" is Ctrl+x, "M-x" is Alt+x,
# keys in a chord are separated by spaces. Named keys: RET, ESC, TAB,
# SPC, DEL, <up>, <down>, <left>, <right>, <home>, <end>, <f1>..<f12>.

[keys]
# Inside the capture buffer
save = "C-c C-c"
cancel = "C-c C-k"

# Anywhere
open = "C-x c"
open_note = "C-x n"
other_window = "C-x o"
write_file = "C-x C-s"
quit = "C-x C-c"

[capture]
surface_name = "*quill-capture*"

[ui]
# Show the key help line at the top of the capture buffer
show_help = true
"#;

/// `<config dir>/quill/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(QUILL_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file, creating parent directories.
///
/// An existing file is left alone. Returns true if a file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
