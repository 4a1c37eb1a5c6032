pub mod merge;
pub mod plan;
pub mod presets;

use crate::Result;
use std::env;
use std::path::PathBuf;

/// Resolve `--dir`, falling back to the current directory
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(env::current_dir()?),
    }
}
