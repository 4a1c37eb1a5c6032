//! Outcome model - what a merge run did to each group and source

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that abort a whole run
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Working directory not found: {}", .0.display())]
    WorkingDirNotFound(PathBuf),

    #[error("Failed to create archive directory {}: {source}", .path.display())]
    ArchiveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to one configured source name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    /// Content merged and file moved into the archive
    Merged,
    /// No file with this name in the working directory
    Missing,
    /// File exists but reading it failed with an I/O error; left in place
    ReadFailed { error: String },
    /// Content merged but the file could not be moved; left in place
    RelocationFailed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: SourceStatus,
}

impl SourceOutcome {
    pub fn new(name: impl Into<String>, status: SourceStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupStatus {
    Written,
    WriteFailed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOutcome {
    pub output: String,
    pub path: PathBuf,
    pub title: Option<String>,
    pub sources: Vec<SourceOutcome>,
    #[serde(flatten)]
    pub status: GroupStatus,
}

impl GroupOutcome {
    pub fn is_written(&self) -> bool {
        self.status == GroupStatus::Written
    }

    /// Names of sources with the given status kind
    pub fn sources_where(&self, pred: impl Fn(&SourceStatus) -> bool) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|s| pred(&s.status))
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Counts across a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    pub outputs_written: usize,
    pub outputs_failed: usize,
    pub merged: usize,
    pub missing: usize,
    pub read_failed: usize,
    pub relocation_failed: usize,
}

impl MergeSummary {
    pub fn has_failures(&self) -> bool {
        self.outputs_failed + self.read_failed + self.relocation_failed > 0
    }
}

/// Typed result of a merge run, one entry per group in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub working_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub groups: Vec<GroupOutcome>,
}

impl MergeReport {
    pub fn group(&self, output: &str) -> Option<&GroupOutcome> {
        self.groups.iter().find(|g| g.output == output)
    }

    pub fn summary(&self) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for group in &self.groups {
            match group.status {
                GroupStatus::Written => summary.outputs_written += 1,
                GroupStatus::WriteFailed { .. } => summary.outputs_failed += 1,
            }
            for source in &group.sources {
                match source.status {
                    SourceStatus::Merged => summary.merged += 1,
                    SourceStatus::Missing => summary.missing += 1,
                    SourceStatus::ReadFailed { .. } => summary.read_failed += 1,
                    SourceStatus::RelocationFailed { .. } => summary.relocation_failed += 1,
                }
            }
        }
        summary
    }
}

/// Progress notifications emitted while a run is in flight
#[derive(Debug)]
pub enum MergeEvent<'a> {
    GroupStarted {
        output: &'a str,
    },
    SourceMerged {
        output: &'a str,
        source: &'a str,
    },
    SourceMissing {
        output: &'a str,
        source: &'a str,
    },
    SourceUnreadable {
        output: &'a str,
        source: &'a str,
        error: &'a io::Error,
    },
    RelocationFailed {
        output: &'a str,
        source: &'a str,
        error: &'a io::Error,
    },
    OutputWritten {
        output: &'a str,
        path: &'a Path,
    },
    OutputWriteFailed {
        output: &'a str,
        path: &'a Path,
        error: &'a io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(output: &str, status: GroupStatus, sources: Vec<SourceOutcome>) -> GroupOutcome {
        GroupOutcome {
            output: output.to_string(),
            path: PathBuf::from(output),
            title: None,
            sources,
            status,
        }
    }

    #[test]
    fn test_summary_counts() {
        let report = MergeReport {
            working_dir: PathBuf::from("."),
            archive_dir: PathBuf::from("old_format"),
            groups: vec![
                group(
                    "one.md",
                    GroupStatus::Written,
                    vec![
                        SourceOutcome::new("a.md", SourceStatus::Merged),
                        SourceOutcome::new("b.md", SourceStatus::Missing),
                    ],
                ),
                group(
                    "two.md",
                    GroupStatus::WriteFailed {
                        error: "denied".to_string(),
                    },
                    vec![SourceOutcome::new(
                        "c.md",
                        SourceStatus::RelocationFailed {
                            error: "exists".to_string(),
                        },
                    )],
                ),
            ],
        };

        let summary = report.summary();
        assert_eq!(summary.outputs_written, 1);
        assert_eq!(summary.outputs_failed, 1);
        assert_eq!(summary.merged, 1);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.relocation_failed, 1);
        assert!(summary.has_failures());
        assert_eq!(report.group("one.md").unwrap().sources.len(), 2);
        assert!(report.group("three.md").is_none());
    }

    #[test]
    fn test_report_serializes_status_tags() {
        let outcome = SourceOutcome::new(
            "a.md",
            SourceStatus::ReadFailed {
                error: "permission denied".to_string(),
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["name"], "a.md");
        assert_eq!(json["status"], "read_failed");
        assert_eq!(json["error"], "permission denied");
    }
}
