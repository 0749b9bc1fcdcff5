//! CLI entry point for the marks rater tool.
//!
//! Provides subcommands for running an interactive roster session and
//! for grading a single marks vector.

mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use marks_rater::grading::{grade, policy};
use marks_rater::roster::MAX_MARK;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "marks_rater")]
#[command(about = "Record student marks and display a ranked, graded roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive roster session in the terminal
    Session {
        /// Comma-separated subject names (prompted for when omitted)
        #[arg(short, long)]
        subjects: Option<String>,

        /// Number of subject names to prompt for when --subjects is not given
        #[arg(short = 'n', long, default_value_t = 6)]
        count: usize,

        /// Optional: CSV file to write the final ranked report to on exit
        #[arg(long)]
        export_csv: Option<String>,

        /// Optional: JSON file to write the final ranked report to on exit
        #[arg(long)]
        export_json: Option<String>,
    },
    /// Grade a single marks vector: print total, percentage, and grade
    Grade {
        /// Marks in the 0-100 range, one per subject
        #[arg(value_name = "MARK", required = true, num_args = 1..)]
        marks: Vec<f64>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/marks_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("marks_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Session {
            subjects,
            count,
            export_csv,
            export_json,
        } => {
            session::run(session::SessionOptions {
                subjects,
                count,
                export_csv,
                export_json,
            })?;
        }
        Commands::Grade { marks } => {
            grade_once(&marks)?;
        }
    }

    Ok(())
}

/// Grades one marks vector from the command line and prints the result.
fn grade_once(marks: &[f64]) -> Result<()> {
    for mark in marks {
        if !(0.0..=MAX_MARK).contains(mark) {
            anyhow::bail!("mark {mark} is outside the 0-100 range");
        }
    }

    let total = policy::total(marks);
    let pct = policy::percentage(marks);
    let letter = grade::grade(pct);

    info!(
        subjects = marks.len(),
        total,
        percentage = pct,
        grade = letter,
        "Marks graded"
    );
    println!("total: {total:.1}  percentage: {pct:.2}%  grade: {letter}");

    Ok(())
}
