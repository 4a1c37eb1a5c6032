// levelmerge - Interview question level merger
// Combines numbered topic files into five level files and archives the originals

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Group, GroupSpec, MergeError, MergeEvent, MergeReport, Preset, TitleLabels};
pub use services::{Merger, ARCHIVE_DIR_NAME};
