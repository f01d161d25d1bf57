//! Hover tooltip demo
//!
//! Usage:
//!   tooltip-demo                              # Open the demo window
//!   tooltip-demo run --pixels-per-unit 48     # Override the configured world scale
//!   tooltip-demo measure --body "Hi" --title "T"  # Print the shown state as JSON

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use hover_tooltip::preview::{preview, to_json, PreviewRequest};
use hover_tooltip::render::{FixedAdvanceMeasure, FontMeasure, TextMeasure};
use hover_tooltip::{Error, TooltipConfig, Vec2, Vec3};

#[derive(Parser)]
#[command(name = "tooltip-demo")]
#[command(about = "Hover tooltip demo and measurement tool")]
struct Cli {
    /// Config file (defaults to the per-user data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// TTF font to measure with (overrides the config)
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the demo window
    Run {
        /// Canvas pixels per world unit (defaults to the config value)
        #[arg(long)]
        pixels_per_unit: Option<f32>,
    },

    /// Show a tooltip once, headless, and print its state as JSON
    Measure {
        /// Body text (may be empty)
        #[arg(long, default_value = "")]
        body: String,

        /// Title text; omit to hide the title row
        #[arg(long)]
        title: Option<String>,

        /// Target x in world units
        #[arg(long, default_value_t = 0.0)]
        x: f32,

        /// Target y in world units
        #[arg(long, default_value_t = 0.0)]
        y: f32,

        #[arg(long, default_value_t = 1024.0)]
        canvas_width: f32,

        #[arg(long, default_value_t = 768.0)]
        canvas_height: f32,

        /// Use the fixed-advance measurer instead of real fonts
        #[arg(long)]
        fixed: bool,
    },
}

/// Load the config and apply command-line overrides on top of it.
fn load_config(cli: &Cli) -> hover_tooltip::Result<TooltipConfig> {
    let mut config = match &cli.config {
        Some(path) => TooltipConfig::load_from(path)?,
        None => TooltipConfig::load(),
    };
    if let Some(font) = &cli.font {
        config.font = Some(font.clone());
    }
    if let Some(Commands::Run { pixels_per_unit: Some(ppu) }) = &cli.command {
        config.pixels_per_unit = *ppu;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Run { pixels_per_unit: None }) {
        Commands::Run { .. } => {
            hover_tooltip::iced_app::run_iced_ui(config)?;
        }
        Commands::Measure { body, title, x, y, canvas_width, canvas_height, fixed } => {
            let measurer: Box<dyn TextMeasure> = if fixed {
                Box::new(FixedAdvanceMeasure::default())
            } else {
                Box::new(FontMeasure::from_optional_file(config.font.as_deref()))
            };
            let request = PreviewRequest {
                target: Vec3::new(x, y, 0.0),
                body,
                title,
                canvas: Vec2::new(canvas_width, canvas_height),
            };
            let state = preview(&config, measurer, &request)
                .ok_or_else(|| Error::Other("tooltip has no panel".to_string()))?;
            println!("{}", to_json(&state)?);
        }
    }

    Ok(())
}
