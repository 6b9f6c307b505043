// File: crates/latent-demo/src/main.rs
// Summary: CLI that records latent canvases and spreads for a toy VAE and assembles them into GIFs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use latent_core::{resolve_output_dir, DataProvider, EpochRecorder, VizConfig};
use latent_demo::{CsvProvider, RingProvider, ToyVae};

#[derive(Parser)]
#[command(
    name = "latent-demo",
    about = "Latent-space canvases, spreads and training GIFs for a 2-D VAE",
    version
)]
struct Cli {
    /// JSON file with visualization settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file and LATENT_ATLAS_OUT).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record canvas and spread frames for a range of epochs, then write both GIFs.
    Train {
        /// Number of epochs to record.
        #[arg(long, default_value_t = 20)]
        epochs: u32,

        /// CSV with `label,f0,f1,...` rows; synthetic rings when omitted.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Skip GIF assembly.
        #[arg(long)]
        no_gif: bool,
    },

    /// Record a single latent canvas frame.
    Canvas {
        #[arg(long, default_value_t = 0)]
        epoch: u32,
    },

    /// Record a single latent spread frame.
    Spread {
        #[arg(long, default_value_t = 0)]
        epoch: u32,

        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Assemble GIFs from frames already on disk.
    Gif,

    /// Print the effective configuration as JSON.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let num_classes = config.spread.num_classes as u32;
    let recorder = EpochRecorder::new(config).context("invalid configuration")?;
    tracing::info!(output = %recorder.config().output_dir.display(), "latent demo");

    match cli.command {
        Commands::Train { epochs, data, no_gif } => {
            let mut provider = open_provider(data, num_classes)?;
            for epoch in 0..epochs {
                let model = ToyVae::new(epoch);
                let (canvas, spread) = recorder
                    .record_epoch(&model, provider.as_mut(), epoch)
                    .with_context(|| format!("recording epoch {epoch}"))?;
                println!("Wrote {} and {}", canvas.display(), spread.display());
            }
            if !no_gif {
                write_gifs(&recorder)?;
            }
        }
        Commands::Canvas { epoch } => {
            let path = recorder.record_canvas(&ToyVae::new(epoch), epoch)?;
            println!("Wrote {}", path.display());
        }
        Commands::Spread { epoch, data } => {
            let mut provider = open_provider(data, num_classes)?;
            let path = recorder.record_spread(&ToyVae::new(epoch), provider.as_mut(), epoch)?;
            println!("Wrote {}", path.display());
        }
        Commands::Gif => write_gifs(&recorder)?,
        Commands::Config => println!("{}", recorder.config().to_json_pretty()?),
    }

    Ok(())
}

/// Config file (or defaults), with the output directory resolved from CLI > file > env > default.
fn load_config(cli: &Cli) -> Result<VizConfig> {
    let mut config = match &cli.config {
        Some(path) => VizConfig::from_json_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => {
            let mut c = VizConfig::default();
            c.output_dir = resolve_output_dir(None);
            c
        }
    };
    if let Some(out) = &cli.out {
        config.output_dir = resolve_output_dir(Some(out.as_path()));
    }
    Ok(config)
}

fn open_provider(data: Option<PathBuf>, num_classes: u32) -> Result<Box<dyn DataProvider>> {
    Ok(match data {
        Some(path) => {
            let provider = CsvProvider::from_path(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} samples from {}", provider.len(), path.display());
            Box::new(provider)
        }
        None => Box::new(RingProvider::new(num_classes)),
    })
}

fn write_gifs(recorder: &EpochRecorder) -> Result<()> {
    let canvas = recorder.write_canvas_gif().context("assembling canvas GIF")?;
    println!("Wrote {}", canvas.display());
    let spread = recorder.write_spread_gif().context("assembling spread GIF")?;
    println!("Wrote {}", spread.display());
    Ok(())
}
