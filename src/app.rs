use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::AnalysisConfig;
use crate::constants::{bootstrap, classify, report};
use crate::dataset::Dataset;
use crate::errors::AnalysisError;
use crate::report::{render_json, save_report};

#[derive(Debug, Parser)]
#[command(
    name = "datasum",
    disable_help_subcommand = true,
    about = "Flat-file dataset summary analysis",
    long_about = "Load numeric and categorical records from flat files, compute summary statistics, and write a text report.",
    after_help = "Missing input files are created with fixed sample content before the run."
)]
struct Cli {
    #[arg(
        long = "numerical-file",
        value_name = "PATH",
        default_value = bootstrap::DEFAULT_NUMERICAL_FILE,
        help = "Numeric input file (.csv rows, or one value per line otherwise)"
    )]
    numerical_file: PathBuf,
    #[arg(
        long = "categorical-file",
        value_name = "PATH",
        default_value = bootstrap::DEFAULT_CATEGORICAL_FILE,
        help = "Categorical input file, one label per line"
    )]
    categorical_file: PathBuf,
    #[arg(
        long,
        default_value_t = classify::DEFAULT_THRESHOLD,
        help = "Average at or above this is High Performance"
    )]
    threshold: f64,
    #[arg(
        long = "report",
        value_name = "PATH",
        default_value = bootstrap::DEFAULT_REPORT_FILE,
        help = "Report output path"
    )]
    report: PathBuf,
    #[arg(long, help = "Also print the results as pretty JSON")]
    json: bool,
}

/// Entry point for the `datasum` binary.
pub fn run() -> Result<(), AnalysisError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let config = AnalysisConfig {
        threshold: cli.threshold,
        report_path: cli.report,
    };
    run_pipeline(&cli.numerical_file, &cli.categorical_file, &config, cli.json)
}

/// Run the load, analyze, display, save pipeline.
///
/// Inputs that do not exist are created with sample content first, so a
/// bare invocation always produces a report.
pub fn run_pipeline(
    numerical_file: &Path,
    categorical_file: &Path,
    config: &AnalysisConfig,
    emit_json: bool,
) -> Result<(), AnalysisError> {
    let banner = "=".repeat(report::BANNER_WIDTH);
    println!("DATASET MANAGEMENT AND BASIC ANALYSIS SYSTEM");
    println!("{banner}");

    ensure_sample_inputs(numerical_file, categorical_file)?;

    let mut dataset = Dataset::new(
        Some(numerical_file.to_path_buf()),
        Some(categorical_file.to_path_buf()),
    );

    println!("\n1. LOADING DATA...");
    dataset.load()?;

    println!("\n2. CALCULATING STATISTICS...");
    dataset.calculate_statistics(config.threshold);

    println!("\n3. ANALYSIS RESULTS:");
    dataset.display_results();

    println!("\n4. SAVING REPORT...");
    if save_report(
        dataset.statistics(),
        dataset.unique_categories(),
        &config.report_path,
    ) {
        println!("Report saved to '{}'", config.report_path.display());
    } else {
        println!(
            "Report could not be saved to '{}'",
            config.report_path.display()
        );
    }

    if emit_json {
        match render_json(dataset.statistics(), dataset.unique_categories()) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("JSON rendering failed: {err}"),
        }
    }

    println!("\n{banner}");
    println!("ANALYSIS COMPLETED SUCCESSFULLY!");
    Ok(())
}

/// Create any missing input file with fixed sample content.
pub fn ensure_sample_inputs(
    numerical_file: &Path,
    categorical_file: &Path,
) -> Result<(), AnalysisError> {
    if !numerical_file.exists() {
        println!(
            "Creating sample numerical file: {}",
            numerical_file.display()
        );
        fs::write(numerical_file, bootstrap::SAMPLE_NUMERICAL_DATA)?;
    }
    if !categorical_file.exists() {
        println!(
            "Creating sample categorical file: {}",
            categorical_file.display()
        );
        fs::write(categorical_file, bootstrap::SAMPLE_CATEGORICAL_DATA)?;
    }
    Ok(())
}
