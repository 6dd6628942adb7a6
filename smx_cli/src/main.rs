use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sm_schema::{ChartType, Dialect, Difficulty, SelectionWindow};

mod prompt;

#[derive(Debug, Parser)]
#[command(name = "smx")]
#[command(about = "StepMania simfile section extractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract a measure range from one chart into a new simfile
    Extract {
        /// Directory containing exactly one .sm file (defaults to the
        /// current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Chart type tag, e.g. dance-single
        #[arg(short = 't', long)]
        chart_type: Option<String>,
        /// Difficulty name or alias, e.g. Hard or heavy
        #[arg(short = 'D', long)]
        difficulty: Option<String>,
        /// First measure to keep (0-indexed, inclusive)
        #[arg(short, long)]
        start: Option<usize>,
        /// Last measure to keep (0-indexed, inclusive)
        #[arg(short, long)]
        end: Option<usize>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the charts found in a simfile
    List {
        /// Directory containing exactly one .sm file (defaults to the
        /// current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Emit the chart list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            dir,
            chart_type,
            difficulty,
            start,
            end,
            output,
        } => {
            let dir = resolve_dir(dir)?;
            let window = build_window(chart_type, difficulty, start, end)?;
            let dialect = Dialect::default();

            let (source, contents) = sm_extractor::source::read_source(&dir)?;
            let out_text = sm_extractor::extract_str(&contents, &window, &dialect)
                .with_context(|| format!("extract failed: {}", source.display()))?;

            let out_path = output
                .unwrap_or_else(|| PathBuf::from(sm_extractor::output_filename(&window)));
            fs::write(&out_path, out_text)
                .with_context(|| format!("failed to write: {}", out_path.display()))?;
            println!("wrote {}", out_path.display());
        }
        Command::List { dir, json } => {
            let dir = resolve_dir(dir)?;
            let (_source, contents) = sm_extractor::source::read_source(&dir)?;
            let charts = sm_extractor::locate::list_charts(&contents, &Dialect::default());
            if json {
                let text = serde_json::to_string_pretty(&charts)
                    .context("failed to serialize chart list")?;
                println!("{text}");
            } else {
                for chart in &charts {
                    println!(
                        "{} {} (meter {}) - {} measures",
                        chart.chart_type, chart.difficulty, chart.meter, chart.measures
                    );
                }
            }
        }
    }

    Ok(())
}

fn resolve_dir(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("failed to resolve current directory"),
    }
}

/// Selection flags left off the command line are prompted for, matching the
/// tool's original interactive workflow.
fn build_window(
    chart_type: Option<String>,
    difficulty: Option<String>,
    start: Option<usize>,
    end: Option<usize>,
) -> anyhow::Result<SelectionWindow> {
    let chart_type = match chart_type {
        Some(raw) => raw.parse::<ChartType>().map_err(anyhow::Error::msg)?,
        None => prompt::chart_type()?,
    };
    let difficulty = match difficulty {
        Some(raw) => raw.parse::<Difficulty>().map_err(anyhow::Error::msg)?,
        None => prompt::difficulty()?,
    };
    let measure_start = match start {
        Some(v) => v,
        None => prompt::number("Enter the starting (0-indexed, inclusive) measure: ")?,
    };
    let measure_end = match end {
        Some(v) => v,
        None => prompt::number("Enter the ending (0-indexed, inclusive) measure: ")?,
    };
    Ok(SelectionWindow {
        chart_type,
        difficulty,
        measure_start,
        measure_end,
    })
}
