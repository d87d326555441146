//! Field Layout Generator
//!
//! Draws a random, rule-valid layout for one round, prints it and optionally
//! paints it to a PNG file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use field_randomizer::catalog::catalog;
use field_randomizer::core::error::Result;
use field_randomizer::core::{config, set_config, Direction, RenderConfig, RoundKind};
use field_randomizer::generation::{generate, LayoutScheme};
use field_randomizer::render::{paint_layout, RasterCanvas};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Field Layout Generator - random start, walls and traffic signs
#[derive(Parser, Debug)]
#[command(name = "field_gen")]
#[command(about = "Generate a random field layout for the open or obstacle round")]
struct Args {
    /// Round to generate
    #[arg(long, value_enum, default_value_t = RoundArg::Open)]
    round: RoundArg,

    /// Driving direction: cw, ccw or random
    #[arg(long, default_value = "random")]
    direction: String,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the painted field to this PNG file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// TOML file overriding colors and stroke sizes
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoundArg {
    Open,
    OpenFixed,
    Obstacle,
}

impl From<RoundArg> for RoundKind {
    fn from(round: RoundArg) -> Self {
        match round {
            RoundArg::Open => RoundKind::Open,
            RoundArg::OpenFixed => RoundKind::OpenFixedCenter,
            RoundArg::Obstacle => RoundKind::Obstacle,
        }
    }
}

/// JSON output structure
#[derive(Serialize)]
struct GenerationOutput<'a> {
    seed: u64,
    #[serde(flatten)]
    scheme: &'a LayoutScheme,
    image: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let direction = match args.direction.as_str() {
        "random" => Direction::random(&mut rng),
        name => name.parse()?,
    };

    if let Some(path) = &args.config {
        let loaded = RenderConfig::load(path)?;
        if set_config(loaded).is_err() {
            tracing::warn!("Render config already initialized, ignoring {}", path.display());
        }
    }

    let scheme = generate(args.round.into(), direction, &mut rng)?;

    if let Some(path) = &args.output {
        let mut canvas = RasterCanvas::for_field();
        paint_layout(&mut canvas, &scheme, catalog(), config())?;
        canvas.save_png(path)?;
        tracing::info!("Wrote {}x{} field to {}", canvas.width(), canvas.height(), path.display());
    }

    let output = GenerationOutput {
        seed,
        scheme: &scheme,
        image: args.output.as_ref().map(|p| p.display().to_string()),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&output)?),
        "text" => print_text(&output),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_text(output: &GenerationOutput<'_>) {
    let scheme = output.scheme;
    println!("Field Layout");
    println!("============");
    println!("Round: {:?}", scheme.round);
    println!("Direction: {}", scheme.direction);
    println!("Start: {} in section {}", scheme.start_zone, scheme.start_section);

    let pulled = scheme.inner_walls.pulled_sides();
    if pulled.is_empty() {
        println!("Inner walls: fixed center");
    } else {
        let names: Vec<&str> = pulled.iter().map(|s| s.name()).collect();
        println!("Inner walls pulled: {}", names.join(", "));
    }

    for placement in &scheme.obstacles {
        println!("Obstacle set {:>2} -> {}", placement.set, placement.section);
    }
    if let Some(section) = scheme.parking_section {
        println!("Parking: {}", section);
    }
    if let Some(image) = &output.image {
        println!("Image: {}", image);
    }
    println!("Seed: {}", output.seed);
}
