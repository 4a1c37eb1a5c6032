use crate::models::{MergeEvent, MergeReport, Preset, SourceStatus};
use crate::services::Merger;
use crate::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn run(dir: &Path, preset: Preset, json: bool) -> Result<()> {
    let spec = preset.group_spec()?;
    let titles = preset.titles();
    let merger = Merger::new(dir);

    if json {
        let report = merger.run(&spec, &titles)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("🔀 Merging {} questions in {}", preset.language(), dir.display()).cyan()
    );

    let report = merger
        .run_with(&spec, &titles, |event| match event_line(event) {
            Line::Out(line) => println!("{}", line),
            Line::Err(line) => eprintln!("{}", line),
        })
        .with_context(|| format!("Merge aborted in {}", dir.display()))?;

    print_summary(&report);
    Ok(())
}

enum Line {
    Out(String),
    Err(String),
}

fn event_line(event: &MergeEvent<'_>) -> Line {
    match event {
        MergeEvent::GroupStarted { output } => {
            Line::Out(format!("\n📄 {}", output).bold().to_string())
        }
        MergeEvent::SourceMerged { source, .. } => Line::Out(format!("   • {}", source)),
        MergeEvent::SourceMissing { source, .. } => {
            Line::Err(format!("   ⚠ File not found: {}", source).yellow().to_string())
        }
        MergeEvent::SourceUnreadable { source, error, .. } => Line::Err(
            format!("   ⚠ Could not read {}: {}", source, error)
                .yellow()
                .to_string(),
        ),
        MergeEvent::RelocationFailed { source, error, .. } => Line::Err(
            format!("   ⚠ Merged {} but could not archive it: {}", source, error)
                .yellow()
                .to_string(),
        ),
        MergeEvent::OutputWritten { output, .. } => {
            Line::Out(format!("✅ Created {}", output).green().to_string())
        }
        MergeEvent::OutputWriteFailed { path, error, .. } => Line::Err(
            format!("❌ Failed to write {}: {}", path.display(), error)
                .red()
                .to_string(),
        ),
    }
}

fn print_summary(report: &MergeReport) {
    let summary = report.summary();

    println!("\n{}", "Done organizing files.".green().bold());
    println!("   Outputs:  {}", summary.outputs_written);
    println!("   Merged:   {}", summary.merged);
    println!("   Archive:  {}", report.archive_dir.display());

    if summary.missing > 0 {
        println!("   {}", format!("Missing:  {}", summary.missing).yellow());
    }
    if summary.has_failures() {
        for group in &report.groups {
            let left = group.sources_where(|s| {
                matches!(
                    s,
                    SourceStatus::ReadFailed { .. } | SourceStatus::RelocationFailed { .. }
                )
            });
            if !left.is_empty() {
                println!(
                    "   {}",
                    format!("Left in place ({}): {}", group.output, left.join(", ")).yellow()
                );
            }
        }
        println!(
            "   {}",
            format!(
                "Failed:   {} output(s), {} unreadable, {} not archived",
                summary.outputs_failed, summary.read_failed, summary.relocation_failed
            )
            .red()
        );
    }
}
