use crate::models::Preset;
use crate::services::{GroupPlan, Merger};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Dry run: show what `merge` would do without touching any file
pub fn run(dir: &Path, preset: Preset, json: bool) -> Result<()> {
    let spec = preset.group_spec()?;
    let plan = Merger::new(dir).plan(&spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("🔍 Plan for {} questions in {}", preset.language(), dir.display()).cyan()
    );

    for group in &plan {
        print_group(group);
    }

    let present: usize = plan.iter().map(GroupPlan::present_count).sum();
    let total: usize = plan.iter().map(|g| g.sources.len()).sum();
    println!("\n   {} of {} source file(s) present", present, total);

    Ok(())
}

fn print_group(group: &GroupPlan) {
    let header = format!(
        "\n📄 {} ({}/{} present)",
        group.output,
        group.present_count(),
        group.sources.len()
    );
    if group.output_exists {
        println!("{} {}", header.bold(), "[will overwrite]".yellow());
    } else {
        println!("{}", header.bold());
    }

    for source in &group.sources {
        if source.collides() {
            println!(
                "   {}",
                format!("⚠ {} (already in archive, will stay in place)", source.name).yellow()
            );
        } else if source.present {
            println!("   • {}", source.name);
        } else {
            println!("   {}", format!("✗ {} (missing)", source.name).bright_black());
        }
    }
}
