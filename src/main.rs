//! SHM Analyzer - Main Entry Point
//!
//! Without arguments this opens the analyzer window. Given a spreadsheet it
//! runs headless: prints the analysis for one mode and optionally writes the
//! PDF report.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use shm_analyzer::{
    analysis::{AnalysisMode, Metrics},
    config::{AppConfig, Thresholds, APP_TITLE},
    frontend::ShmApp,
    session::Session,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "shm-analyzer", version, about = "Simple harmonic motion analysis of motion-sensor data")]
struct Cli {
    /// Spreadsheet to analyze headless (t, x, v, Ec, Ep columns); omit to open the window
    file: Option<PathBuf>,

    /// Analysis mode: position, velocity, energy or regression
    #[arg(short, long, default_value = "position")]
    mode: AnalysisMode,

    /// Print the analysis as JSON
    #[arg(long, requires = "file")]
    json: bool,

    /// Also write the chart and analysis to this PDF
    #[arg(short, long, value_name = "OUT.pdf", requires = "file")]
    report: Option<PathBuf>,
}

/// Headless JSON output
#[derive(Serialize)]
struct JsonOutput<'a> {
    file: &'a Path,
    samples: usize,
    mode: &'static str,
    metrics: &'a Metrics,
    is_shm: bool,
    explanation: Vec<String>,
    thresholds: &'a Thresholds,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shm_analyzer=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::default();

    match &cli.file {
        Some(path) => run_headless(&cli, path, config),
        None => run_gui(config),
    }
}

fn run_headless(cli: &Cli, path: &Path, config: AppConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config);
    let samples = session
        .load_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?
        .len();

    let verdict = session.show_chart(cli.mode)?.verdict.clone();

    if cli.json {
        let output = JsonOutput {
            file: path,
            samples,
            mode: verdict.mode.key(),
            metrics: &verdict.metrics,
            is_shm: verdict.is_shm,
            explanation: verdict.lines(),
            thresholds: &session.config().thresholds,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} ({} samples)", verdict.mode, samples);
        println!("Analysis:");
        println!("{}", verdict);
    }

    if let Some(out) = &cli.report {
        session
            .export_pdf(out)
            .with_context(|| format!("Failed to export report to {}", out.display()))?;
        eprintln!("Report written to {}", out.display());
    }

    Ok(())
}

fn run_gui(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting {}", APP_TITLE);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(ShmApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!("Shutting down...");
    Ok(())
}
