//! Service layer for levelmerge
//!
//! Business logic shared by the CLI commands and the integration tests.
//! Services never print; they report through return values and events.

pub mod merge_service;

pub use merge_service::{run, GroupPlan, Merger, SourcePlan, ARCHIVE_DIR_NAME};
