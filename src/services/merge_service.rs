//! Merge service - combines grouped source documents into level files
//!
//! For every group, in declaration order, the present sources are read,
//! appended under a derived heading and moved into the archive directory;
//! then the assembled document is written to the working directory.
//! Failures local to one source or one group are recorded in the report and
//! processing carries on. Only failing to set up the archive directory aborts
//! the run.

use crate::models::{
    Group, GroupOutcome, GroupSpec, GroupStatus, MergeError, MergeEvent, MergeReport,
    SourceOutcome, SourceStatus, TitleLabels,
};
use crate::parser::MergedDocument;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the directory consumed sources are moved into
pub const ARCHIVE_DIR_NAME: &str = "old_format";

/// Merges and archives documents inside one working directory
#[derive(Debug, Clone)]
pub struct Merger {
    working_dir: PathBuf,
    archive_dir: PathBuf,
}

impl Merger {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let archive_dir = working_dir.join(ARCHIVE_DIR_NAME);
        Self {
            working_dir,
            archive_dir,
        }
    }

    /// Run the merge without progress notifications
    pub fn run(&self, spec: &GroupSpec, titles: &TitleLabels) -> Result<MergeReport, MergeError> {
        self.run_with(spec, titles, |_| {})
    }

    /// Run the merge, calling `on_event` as each step happens
    pub fn run_with<F>(
        &self,
        spec: &GroupSpec,
        titles: &TitleLabels,
        mut on_event: F,
    ) -> Result<MergeReport, MergeError>
    where
        F: FnMut(&MergeEvent<'_>),
    {
        if !self.working_dir.is_dir() {
            return Err(MergeError::WorkingDirNotFound(self.working_dir.clone()));
        }

        let mut groups = Vec::with_capacity(spec.len());
        for group in spec.groups() {
            self.ensure_archive_dir()?;
            groups.push(self.merge_group(group, titles.get(&group.output), &mut on_event));
        }

        Ok(MergeReport {
            working_dir: self.working_dir.clone(),
            archive_dir: self.archive_dir.clone(),
            groups,
        })
    }

    /// Report what a run would do, without touching the filesystem
    pub fn plan(&self, spec: &GroupSpec) -> Vec<GroupPlan> {
        spec.groups()
            .iter()
            .map(|group| GroupPlan {
                output: group.output.clone(),
                output_exists: self.working_dir.join(&group.output).exists(),
                sources: group
                    .sources
                    .iter()
                    .map(|name| SourcePlan {
                        name: name.clone(),
                        present: self.working_dir.join(name).is_file(),
                        archived: self.archive_dir.join(name).exists(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn ensure_archive_dir(&self) -> Result<(), MergeError> {
        if self.archive_dir.is_dir() {
            return Ok(());
        }
        match fs::create_dir(&self.archive_dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.archive_dir.is_dir() => {
                Ok(())
            }
            Err(source) => Err(MergeError::ArchiveDir {
                path: self.archive_dir.clone(),
                source,
            }),
        }
    }

    fn merge_group<F>(&self, group: &Group, title: Option<&str>, on_event: &mut F) -> GroupOutcome
    where
        F: FnMut(&MergeEvent<'_>),
    {
        let output = group.output.as_str();
        on_event(&MergeEvent::GroupStarted { output });

        let mut doc = MergedDocument::new(title);
        let mut sources = Vec::with_capacity(group.sources.len());

        for name in &group.sources {
            let status = self.merge_source(output, name, &mut doc, on_event);
            sources.push(SourceOutcome::new(name.clone(), status));
        }

        let path = self.working_dir.join(output);
        let status = match fs::write(&path, doc.render()) {
            Ok(()) => {
                on_event(&MergeEvent::OutputWritten {
                    output,
                    path: &path,
                });
                GroupStatus::Written
            }
            Err(error) => {
                on_event(&MergeEvent::OutputWriteFailed {
                    output,
                    path: &path,
                    error: &error,
                });
                GroupStatus::WriteFailed {
                    error: error.to_string(),
                }
            }
        };

        GroupOutcome {
            output: group.output.clone(),
            path,
            title: title.map(str::to_string),
            sources,
            status,
        }
    }

    /// Read one source into `doc` and move it into the archive
    fn merge_source<F>(
        &self,
        output: &str,
        source: &str,
        doc: &mut MergedDocument,
        on_event: &mut F,
    ) -> SourceStatus
    where
        F: FnMut(&MergeEvent<'_>),
    {
        let path = self.working_dir.join(source);
        if !path.is_file() {
            on_event(&MergeEvent::SourceMissing { output, source });
            return SourceStatus::Missing;
        }

        // Invalid UTF-8 is decoded lossily; only real I/O errors skip the file
        let content = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(error) => {
                on_event(&MergeEvent::SourceUnreadable {
                    output,
                    source,
                    error: &error,
                });
                return SourceStatus::ReadFailed {
                    error: error.to_string(),
                };
            }
        };
        doc.push_section(source, content);

        match self.relocate(&path, source) {
            Ok(()) => {
                on_event(&MergeEvent::SourceMerged { output, source });
                SourceStatus::Merged
            }
            Err(error) => {
                on_event(&MergeEvent::RelocationFailed {
                    output,
                    source,
                    error: &error,
                });
                SourceStatus::RelocationFailed {
                    error: error.to_string(),
                }
            }
        }
    }

    /// Move a source into the archive, never replacing an archived file.
    ///
    /// `hard_link` fails with `AlreadyExists` when the target is taken, so the
    /// collision check and the move cannot race. If the original cannot be
    /// unlinked afterwards the new link is removed again and the source stays
    /// where it was. Filesystems without hard links fall back to a checked
    /// rename.
    fn relocate(&self, path: &Path, source: &str) -> io::Result<()> {
        let target = self.archive_dir.join(source);
        match fs::hard_link(path, &target) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => return Err(error),
            Err(_) => return rename_unless_exists(path, &target),
        }
        if let Err(error) = fs::remove_file(path) {
            let _ = fs::remove_file(&target);
            return Err(error);
        }
        Ok(())
    }
}

fn rename_unless_exists(path: &Path, target: &Path) -> io::Result<()> {
    if target.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", target.display()),
        ));
    }
    fs::rename(path, target)
}

/// Dry-run view of one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePlan {
    pub name: String,
    /// File exists in the working directory
    pub present: bool,
    /// A file of the same name is already in the archive
    pub archived: bool,
}

impl SourcePlan {
    /// Present, but moving it would hit an existing archived file
    pub fn collides(&self) -> bool {
        self.present && self.archived
    }
}

/// Dry-run view of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPlan {
    pub output: String,
    pub output_exists: bool,
    pub sources: Vec<SourcePlan>,
}

impl GroupPlan {
    pub fn present_count(&self) -> usize {
        self.sources.iter().filter(|s| s.present).count()
    }
}

/// Merge `spec` inside `working_dir` using the archive directory `old_format`
pub fn run(
    working_dir: &Path,
    spec: &GroupSpec,
    titles: &TitleLabels,
) -> Result<MergeReport, MergeError> {
    Merger::new(working_dir).run(spec, titles)
}
