use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use tackleBox::app::settings::{load_settings, user_cache_dir, Settings};
use tackleBox::app::View;
use tackleBox::data::processor::{REEL_TYPES, ROD_TYPES};
use tackleBox::data::DataProcessor;
use tackleBox::runner::logging::{init_logging, LogTarget};
use tackleBox::ui::{colors, Theme};

#[derive(Parser)]
#[command(name = "tackleBox", version, about = "Browse fishing gear, fish and lakes from JSON fixtures")]
struct Cli {
    /// Settings file (defaults to settings.toml in the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with the raw fixtures
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory with processed_rods.json / processed_reels.json
    #[arg(long, global = true)]
    processed_dir: Option<PathBuf>,

    /// View shown at startup: fish, lakes, rods or reels
    #[arg(long)]
    view: Option<View>,

    /// Theme: dark, light or a path to a theme TOML file
    #[arg(long)]
    theme: Option<String>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize the raw rod and reel fixtures into the processed directory
    Process {
        /// Output directory (defaults to the processed dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(d) = &cli.data_dir {
        settings.data_dir = d.clone();
    }
    if let Some(d) = &cli.processed_dir {
        settings.processed_dir = d.clone();
    }
    if let Some(v) = cli.view {
        settings.default_view = v;
    }
    if let Some(t) = &cli.theme {
        settings.theme = t.clone();
    }
    settings.normalized()
}

fn process(settings: &Settings, out_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut paths = settings.data_paths();
    if let Some(out) = out_dir {
        paths.processed_dir = out;
    }

    let pb = ProgressBar::new((ROD_TYPES.len() + REEL_TYPES.len()) as u64);
    pb.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")?);
    let summary = DataProcessor::new(&paths)
        .process_all(|file| {
            pb.set_message(file.to_string());
            pb.inc(1);
        })
        .with_context(|| format!("processing fixtures in {}", paths.raw_dir.display()))?;
    pb.finish_and_clear();

    println!("{} rods -> {}", summary.rods, summary.rods_path.display());
    println!("{} reels -> {}", summary.reels, summary.reels_path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let target = match cli.command {
        Some(Command::Process { .. }) => LogTarget::Stderr,
        None => LogTarget::File(user_cache_dir()),
    };
    let _guard = init_logging(target, cli.verbose)?;

    let settings = apply_overrides(load_settings(cli.config.as_deref()), &cli);

    match cli.command {
        Some(Command::Process { out_dir }) => process(&settings, out_dir),
        None => {
            let theme = Theme::resolve(&settings.theme).unwrap_or_else(|e| {
                tracing::warn!("theme `{}` unavailable ({}), using dark", settings.theme, e);
                Theme::dark()
            });
            colors::set_from_theme(&theme);
            tackleBox::runner::run_app(settings)
        }
    }
}
