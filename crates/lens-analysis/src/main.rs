//! CLI entry point for the exploratory data analysis tool.

use anyhow::Result;
use clap::Parser;
use lens_analysis::{charts, loader, report};
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis for CSV datasets",
    long_about = "Loads a CSV file, prints descriptive statistics, and derives\n\
                  chart data (histograms, correlation heatmap, count plots) for\n\
                  an external plotting tool.\n\n\
                  EXAMPLES:\n  \
                  # Analyze a file and print the report\n  \
                  lens-analysis data.csv\n\n  \
                  # Prompt for the path interactively\n  \
                  lens-analysis\n\n  \
                  # Write chart data next to the report\n  \
                  lens-analysis data.csv --emit-charts -o results/\n\n  \
                  # Machine-readable output\n  \
                  lens-analysis data.csv --json | jq .profile.shape"
)]
struct Args {
    /// Path to the CSV file to analyze
    ///
    /// When omitted, the path is prompted for on stdin.
    input: Option<String>,

    /// Output directory for chart data
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Write chart data as <input_name>_charts.json to the output directory
    #[arg(short = 'c', long)]
    emit_charts: bool,

    /// Output the full analysis as JSON to stdout instead of the report
    ///
    /// Disables all logs; only the JSON document is written.
    /// Useful for piping to other tools: `... --json | jq .charts`
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet, args.json);

    // Every failure surfaces as one plain message; no chart data is
    // emitted for a run that could not be analyzed.
    if let Err(e) = run(&args) {
        eprintln!("An error occurred: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let path = match &args.input {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };

    info!("Loading dataset from: {}", path);
    let df = loader::load_dataset(&path)?;
    info!("Dataset loaded successfully: {:?}", df.shape());

    let analysis = charts::analyze(&df)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print!("{}", report::render_report(&df, &analysis.profile));

    if args.emit_charts {
        if !Path::new(&args.output).exists() {
            std::fs::create_dir_all(&args.output)?;
            info!("Created output directory: {}", args.output);
        }

        let chart_path = format!("{}/{}_charts.json", args.output, extract_file_stem(&path));
        std::fs::write(&chart_path, serde_json::to_string_pretty(&analysis.charts)?)?;
        info!("Chart data written to: {}", chart_path);
    }

    Ok(())
}

/// Prompt for a CSV path on stdin (the no-argument interactive flow).
fn prompt_for_path() -> Result<String> {
    print!("Path to CSV file: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_stem() {
        assert_eq!(extract_file_stem("/tmp/data.csv"), "data");
        assert_eq!(extract_file_stem("weather.csv"), "weather");
        assert_eq!(extract_file_stem(""), "output");
    }
}
