use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filterplay::models::{GalleryConfig, Pipeline, CONFIG_ENV_VAR};
use filterplay::rendering::{load_png, render_gallery, save_png};
use pixel_engine::{DitherAlgorithm, Filter, GrayTone};

#[derive(Parser)]
#[command(name = "filterplay")]
#[command(about = "FilterPlay - parametric image filters and error diffusion dithering")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a pipeline of steps over one PNG
    Apply {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Step to run, e.g. "sepia:level=0.34" or "dither:atkinson" (repeatable, in order)
        #[arg(short, long = "step", value_name = "STEP")]
        steps: Vec<String>,

        /// Run a named preset instead of explicit steps
        #[arg(short, long, conflicts_with = "steps")]
        preset: Option<String>,

        /// Presets file (defaults to $FILTERPLAY_CONFIG, then built-in presets)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render every preset of a gallery into a directory
    Gallery {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory, created if missing
        #[arg(short, long)]
        output: PathBuf,

        /// Presets file (defaults to $FILTERPLAY_CONFIG, then built-in presets)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List filters, gray tones, dither algorithms and presets
    List {
        /// Presets file (defaults to $FILTERPLAY_CONFIG, then built-in presets)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filterplay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Apply {
            input,
            output,
            steps,
            preset,
            config,
        }) => run_apply_command(&input, &output, &steps, preset.as_deref(), config.as_deref()),
        Some(Commands::Gallery {
            input,
            output,
            config,
        }) => run_gallery_command(&input, &output, config.as_deref()),
        Some(Commands::List { config }) => {
            run_list_command(config.as_deref());
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run explicit steps (or one preset) over a single image
fn run_apply_command(
    input: &Path,
    output: &Path,
    steps: &[String],
    preset: Option<&str>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let pipeline = match preset {
        Some(name) => {
            let config = GalleryConfig::load(config);
            let preset = config
                .preset(name)
                .with_context(|| format!("Unknown preset `{name}`"))?;
            preset
                .pipeline()
                .with_context(|| format!("Invalid preset `{}`", preset.name))?
        }
        None => Pipeline::parse(steps)?,
    };
    if pipeline.is_empty() {
        tracing::warn!("No steps given, output will be a re-encoded copy of the input");
    }

    let image = load_png(input).with_context(|| format!("Failed to load {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );

    let result = pipeline.run(&image);
    save_png(output, &result).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {} ({pipeline})", output.display());
    Ok(())
}

/// Render each preset to `<output>/<preset>.png`
fn run_gallery_command(input: &Path, output: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let config = GalleryConfig::load(config);
    let image = load_png(input).with_context(|| format!("Failed to load {}", input.display()))?;

    let report = render_gallery(&image, &config, output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    println!(
        "Rendered {} presets into {}",
        report.written.len(),
        output.display()
    );
    for (name, e) in &report.failed {
        eprintln!("  ! {name}: {e}");
    }
    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} presets failed",
            report.failed.len(),
            config.presets.len()
        );
    }
    Ok(())
}

/// Print everything a step string can name
fn run_list_command(config: Option<&Path>) {
    println!("Filters:");
    for name in Filter::NAMES {
        println!("  {name}");
    }

    println!("\nGray tones:");
    for tone in GrayTone::ALL {
        println!("  {tone}");
    }

    println!("\nDither algorithms:");
    for algorithm in DitherAlgorithm::ALL {
        if algorithm == DitherAlgorithm::default() {
            println!("  {algorithm} (default)");
        } else {
            println!("  {algorithm}");
        }
    }
    println!("  {}", DitherAlgorithm::Threshold);

    println!("\nPresets:");
    for preset in &GalleryConfig::load(config).presets {
        println!("  {:<12} {}", preset.name, preset.steps.join(" | "));
    }
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV_VAR).ok();

    println!("FilterPlay v{VERSION}");
    println!("Parametric image filters and error diffusion dithering\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let presets_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "built-in (file not found)".to_string(),
        None => "built-in".to_string(),
    };
    println!("\nPresets: {presets_source}");

    println!("\nCommands:");
    println!("  filterplay apply     Run steps or a preset over one PNG");
    println!("  filterplay gallery   Render every preset into a directory");
    println!("  filterplay list      List filters, dither algorithms and presets");
    println!("\nRun 'filterplay --help' for more details.");
}
