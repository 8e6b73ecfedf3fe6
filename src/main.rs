//! Early Warning System CLI
//!
//! Developer tooling for the landing site:
//! - Print the page outline
//! - Export the chart datasets
//! - Run the decorative scene headless
//! - Generate a config file

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use early_warning::config::{generate_default_config, Config, LoggingConfig};
use early_warning::export::{self, ExportFormat};
use early_warning::page::{outline, outline_text};
use early_warning::scene::{mount_scene, FrameScheduler, ManualScheduler, RecordingRenderer, SceneGuard};
use early_warning::{ChartKind, FeatureTab};

#[derive(Parser)]
#[command(name = "ews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Developer tools for the Early Warning System landing site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./ews.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the page sections top to bottom
    Outline {
        /// Features tab to show (teacher, counsellor)
        #[arg(short, long, default_value = "teacher")]
        tab: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export chart datasets
    Datasets {
        /// Chart to export (pie, bar, area, all)
        #[arg(short, long, default_value = "all")]
        chart: String,
        /// Output format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the decorative scene without a browser
    Scene {
        /// Frames to run after the initial one
        #[arg(short = 'n', long, default_value = "120")]
        frames: usize,
        /// Simulated display refresh rate
        #[arg(long, default_value = "60")]
        fps: f64,
        /// Container edge in pixels
        #[arg(short, long, default_value = "600")]
        size: f64,
        /// Placement seed (default: from config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Outline { tab, json } => {
            let tab: FeatureTab = tab.parse()?;
            let sections = outline(tab);
            if json {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            } else {
                print!("{}", outline_text(&sections));
            }
        }

        Commands::Datasets {
            chart,
            format,
            output,
        } => {
            let chart = match chart.as_str() {
                "all" => None,
                name => Some(name.parse::<ChartKind>()?),
            };
            let format: ExportFormat = format.parse()?;

            let body = match (format, chart) {
                (ExportFormat::Json, chart) => export::to_json(chart)?,
                (ExportFormat::Csv, Some(chart)) => export::to_csv(chart)?,
                (ExportFormat::Csv, None) => {
                    anyhow::bail!("CSV export needs a single chart (--chart pie|bar|area)")
                }
            };
            write_output(output, &body)?;
        }

        Commands::Scene {
            frames,
            fps,
            size,
            seed,
        } => {
            anyhow::ensure!(fps > 0.0, "fps must be positive");
            let mut scene_config = config.scene.clone();
            if let Some(seed) = seed {
                scene_config.seed = seed;
            }
            run_scene(&scene_config, frames, fps, size)?;
        }

        Commands::Config { output } => {
            write_output(output, &generate_default_config())?;
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("early_warning={},ews={}", logging.level, logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_output(output: Option<PathBuf>, body: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, body)?;
            println!("Written to {:?}", path);
        }
        None => print!("{}", body),
    }
    Ok(())
}

fn run_scene(
    config: &early_warning::config::SceneConfig,
    frames: usize,
    fps: f64,
    size: f64,
) -> anyhow::Result<()> {
    let guard = SceneGuard::new();
    let manual = Rc::new(ManualScheduler::new());
    let scheduler: Rc<dyn FrameScheduler> = manual.clone();
    let renderer = RecordingRenderer::new();
    let stats = renderer.stats();

    let scene = mount_scene(&guard, scheduler, Rc::new(RefCell::new(renderer)), size, size, config)
        .context("scene did not mount (is --size positive?)")?;

    let step_ms = 1000.0 / fps;
    for _ in 0..frames {
        manual.tick(step_ms);
    }

    {
        let stats = stats.borrow();
        println!("Scene {} at {}px, seed {}", scene.id(), scene.size(), config.seed);
        println!("Frames rendered: {}", stats.frames);
        println!("Animated time:   {:.2}s", scene.elapsed());
        if let (Some(min), Some(max)) = (
            stats.command_counts.iter().min(),
            stats.command_counts.iter().max(),
        ) {
            println!("Draw commands:   {}..{} per frame", min, max);
        }
    }

    scene.unmount();
    let leftover = manual.tick(step_ms);
    let stats = stats.borrow();
    anyhow::ensure!(
        leftover == 0 && stats.late_renders == 0 && stats.disposed && !guard.has_instance(),
        "scene teardown left work behind"
    );
    println!("Teardown clean: no pending frames, renderer disposed");
    Ok(())
}
