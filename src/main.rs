use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use levelmerge::{Preset, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "levelmerge")]
#[command(author = "Chris Cheng <chris.cheng@shopee.com>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Merge interview question files into level files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge source files into the five level files and archive them in old_format/
    Merge {
        /// Directory holding the source files (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Document set to merge
        #[arg(short, long, value_enum, default_value_t = Preset::Java)]
        preset: Preset,

        /// Print the merge report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show which source files would be merged, without changing anything
    Plan {
        /// Directory holding the source files (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Document set to inspect
        #[arg(short, long, value_enum, default_value_t = Preset::Java)]
        preset: Preset,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// List the built-in document sets
    Presets {
        /// Only show this preset
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Merge { dir, preset, json } => {
            let dir = levelmerge::cli::resolve_dir(dir)?;
            levelmerge::cli::merge::run(&dir, preset, json)?;
        }

        Commands::Plan { dir, preset, json } => {
            let dir = levelmerge::cli::resolve_dir(dir)?;
            levelmerge::cli::plan::run(&dir, preset, json)?;
        }

        Commands::Presets { preset } => {
            levelmerge::cli::presets::run(preset)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "levelmerge", &mut io::stdout());
        }
    }

    Ok(())
}
