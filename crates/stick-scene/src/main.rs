//! Stick figure scene builder entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stick_scene::{ConfigManager, ExportFormat, FigureDescription, SceneDescription, SceneError};

/// Build a stick figure and export its scene description
#[derive(Debug, Parser)]
#[command(name = "stick-scene", version, about)]
struct Args {
    /// Scene configuration file (RON); defaults to the OS config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Figure description file (RON); the built-in stick figure otherwise
    #[arg(long)]
    figure: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Ron)]
    format: ExportFormat,

    /// Output file; stdout otherwise
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stick_scene=info,stick_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SceneError> {
    let mut manager = match &args.config {
        Some(path) => ConfigManager::from_path(path),
        None => ConfigManager::new(),
    };

    if args.write_default_config {
        manager.reset_to_defaults();
        manager.save()?;
        tracing::info!("Wrote default config to {:?}", manager.config_file_path());
        return Ok(());
    }

    let description = match &args.figure {
        Some(path) => FigureDescription::load(path)?,
        None => FigureDescription::stick_figure(),
    };

    let config = manager.config();
    let figure = description.build(&config.figure)?;
    figure.validate().map_err(SceneError::Validation)?;

    let scene = SceneDescription::build(&figure, config);
    let text = scene.export(args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| SceneError::Io(e.to_string()))?;
            tracing::info!("Wrote scene to {:?}", path);
        }
        None => println!("{text}"),
    }

    Ok(())
}
