use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rubber_grading::upload::{SimulationStatus, Submitted, UploadWidget};
use rubber_grading::{assets, cli, config, display, scanner};
use rubber_grading_common::dashboard::{asset_requests, sample_uploads};
use rubber_grading_common::{AppState, GradingResult, LoginForm};
use cli::{Cli, Commands};
use config::Config;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GradedFile {
    file_name: String,
    result: GradingResult,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("  grading [{bar:30}] {pos:>3}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar
}

/// Follows the simulated run until it settles
async fn follow_simulation(widget: &UploadWidget, bar: &ProgressBar) -> Option<GradingResult> {
    if let Some(mut progress) = widget.progress() {
        loop {
            let status = progress.borrow_and_update().clone();
            match status {
                SimulationStatus::Running(percent) => bar.set_position(u64::from(percent)),
                SimulationStatus::Completed(_) | SimulationStatus::Cancelled => break,
            }
            if progress.changed().await.is_err() {
                break;
            }
        }
    }
    bar.finish_and_clear();
    widget.result().await
}

async fn grade(
    config: &Config,
    inputs: &[std::path::PathBuf],
    report_dir: Option<&Path>,
    json: bool,
    interval: Duration,
) -> anyhow::Result<()> {
    let images = scanner::scan_inputs(inputs)?;
    if images.is_empty() {
        let listed: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
        return Err(rubber_grading::error::GradingError::NoImagesFound(listed.join(", ")).into());
    }
    tracing::debug!(count = images.len(), "images to grade");

    let report_dir = report_dir.map(Path::to_path_buf).or_else(|| config.report_dir.clone());
    let mut widget = UploadWidget::new(interval);
    let mut graded = Vec::new();

    for image in &images {
        widget.reset();
        let submitted = widget
            .submit_image(image)
            .await
            .with_context(|| format!("failed to read {}", image.path.display()))?;

        let result = match submitted {
            Submitted::Graded(result) => Some(result),
            Submitted::Simulating => {
                if !json {
                    println!("{}: no grade in file name, simulating analysis", image.file_name);
                }
                follow_simulation(&widget, &progress_bar(json)).await
            }
        };
        let Some(result) = result else {
            tracing::warn!(file = %image.file_name, "no result");
            continue;
        };

        if !json {
            print!("{}", display::result_summary(&image.file_name, &result));
        }

        if let Some(dir) = report_dir.as_deref() {
            let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            if let Some(files) = widget.download_report(dir, &generated_at)? {
                if !json {
                    println!("  Report:   {}", files.report.display());
                    if let Some(image) = files.image {
                        println!("  Image:    {}", image.display());
                    }
                }
            }
        }

        graded.push(GradedFile {
            file_name: image.file_name.clone(),
            result,
        });
    }
    widget.reset();

    if json {
        println!("{}", serde_json::to_string_pretty(&graded)?);
    } else {
        println!("\n✔ {} file(s) graded", graded.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Grade { inputs, report_dir, json, interval_ms } => {
            let interval = interval_ms
                .map(|ms| Duration::from_millis(ms.max(1)))
                .unwrap_or_else(|| config.progress_interval());
            grade(&config, &inputs, report_dir.as_deref(), json, interval).await?;
        }

        Commands::Dashboard { tab, name, role } => {
            let mut state = AppState::new();
            if let Some(name) = name {
                let form = LoginForm {
                    role: Some(role),
                    name,
                    ..Default::default()
                };
                if state.login(&form).is_none() {
                    tracing::warn!("login ignored: name is empty");
                }
            }
            print!("{}", display::dashboard(&state, tab, &sample_uploads()));
        }

        Commands::Assets { base_url, output } => {
            let base_url = base_url.unwrap_or_else(|| config.asset_base_url());
            println!("Downloading dashboard files from {}", base_url);

            let client = assets::AssetClient::new(base_url)?;
            let summary = client
                .download_all(&asset_requests(&sample_uploads()), &output)
                .await
                .with_context(|| format!("cannot write to {}", output.display()))?;

            for path in &summary.saved {
                println!("✔ {}", path.display());
            }
            if !summary.failed.is_empty() {
                println!("{} file(s) skipped: {}", summary.failed.len(), summary.failed.join(", "));
            }
        }

        Commands::Grades => {
            print!("{}", display::grades_table());
        }

        Commands::Config { set_asset_url, set_interval_ms, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_asset_url {
                config.set_asset_base_url(url)?;
                changed = true;
            }
            if let Some(ms) = set_interval_ms {
                config.progress_interval_ms = ms;
                changed = true;
            }
            if changed {
                config.save().context("failed to save config")?;
                println!("✔ Settings saved");
            }

            if show || !changed {
                println!("Settings:");
                println!("  Asset URL:         {}", config.asset_base_url());
                println!("  Progress interval: {}ms", config.progress_interval().as_millis());
                println!(
                    "  Report folder:     {}",
                    config
                        .report_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(not set)".into())
                );
            }
        }
    }

    Ok(())
}
