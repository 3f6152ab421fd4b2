use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

use fitcalc::config::{AppConfig, OutputSettings};
use fitcalc::logging::init_logging;
use fitcalc::{sample_packages, Driver, ImportManager, OutputFormat, Package, WORKOUT_REGISTRY};

/// fitcalc - Workout statistics from raw sensor packages
///
/// Computes distance, mean speed and spent calories for running, sports
/// walking and swimming packages, printing one summary line per package.
#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(version)]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in sample packages
    Demo {
        /// Report format (text, json)
        #[arg(short, long)]
        output: Option<OutputFormat>,
    },

    /// Process packages from a CSV or JSON file
    Run {
        /// Input file path
        #[arg(short, long)]
        file: PathBuf,

        /// Input format (auto-detect from extension if not specified)
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Report format (text, json)
        #[arg(short, long)]
        output: Option<OutputFormat>,

        /// Compute packages in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Interpret a single package given on the command line
    Calc {
        /// Workout label (SWM, RUN, WLK)
        label: String,

        /// Positional readings for the workout type
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Report format (text, json)
        #[arg(short, long)]
        output: Option<OutputFormat>,
    },

    /// List supported workout labels and their fields
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };
    config.logging.level = config.logging.level.raised_by(cli.verbose);
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Demo { output } => {
            let settings = override_output(&config.output, output, false);
            run_batch(&sample_packages(), &settings, cli.verbose)?;
        }

        Commands::Run {
            file,
            format,
            output,
            parallel,
        } => {
            let packages = ImportManager::new()
                .import_file(&file, format.as_deref())
                .with_context(|| format!("Failed to import {}", file.display()))?;
            let settings = override_output(&config.output, output, parallel);
            run_batch(&packages, &settings, cli.verbose)?;
        }

        Commands::Calc {
            label,
            values,
            output,
        } => {
            let settings = override_output(&config.output, output, false);
            run_batch(&[Package::new(label, values)], &settings, cli.verbose)?;
        }

        Commands::Types => {
            for (label, kind) in WORKOUT_REGISTRY {
                println!(
                    "{}  {:<14} {}",
                    label.bold(),
                    kind.training_type(),
                    kind.fields().join(", ")
                );
            }
        }
    }

    Ok(())
}

fn override_output(
    settings: &OutputSettings,
    format: Option<OutputFormat>,
    parallel: bool,
) -> OutputSettings {
    OutputSettings {
        format: format.unwrap_or(settings.format),
        parallel: parallel || settings.parallel,
    }
}

fn run_batch(packages: &[Package], settings: &OutputSettings, verbose: u8) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = Driver::new(settings.format)
        .with_parallel(settings.parallel)
        .run(packages, &mut out)
        .context("Failed to write reports")?;
    out.flush()?;

    // Skipped packages already got their own line on stdout
    if verbose > 0 {
        let line = format!(
            "{} processed, {} skipped",
            summary.processed, summary.skipped
        );
        if summary.skipped > 0 {
            eprintln!("{}", format!("⚠ {}", line).yellow());
        } else {
            eprintln!("{}", format!("✓ {}", line).green());
        }
    }

    Ok(())
}
