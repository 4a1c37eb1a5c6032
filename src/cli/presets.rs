use crate::models::Preset;
use crate::Result;
use colored::Colorize;

/// Print the groups and titles of one preset, or of all of them
pub fn run(preset: Option<Preset>) -> Result<()> {
    let presets = match preset {
        Some(preset) => vec![preset],
        None => Preset::all().to_vec(),
    };

    for preset in presets {
        let spec = preset.group_spec()?;
        let titles = preset.titles();

        println!(
            "\n{}",
            format!("{} ({} sources)", preset, spec.source_count())
                .green()
                .bold()
        );
        for group in spec.groups() {
            let title = titles.get(&group.output).unwrap_or("(no title)");
            println!("   {} {}", group.output.cyan(), format!("- {}", title).dimmed());
            for source in &group.sources {
                println!("      • {}", source);
            }
        }
    }

    Ok(())
}
