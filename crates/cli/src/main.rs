#![deny(unsafe_code)]
//! CLI binary for gradient-noise.
//!
//! Subcommands:
//! - `render <engine>`: run an engine N steps, write PNG
//! - `sample x y`: print one noise or fBm value
//! - `list`: print available engines and ramps

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use gradient_noise_core::{Engine, NoiseSeed, Recipe};
use gradient_noise_engines::{EngineKind, Ramp};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gradient-noise", about = "Seeded gradient noise and fBm")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an engine for N steps and write a PNG snapshot.
    Render {
        /// Engine name ("noise" or "fbm").
        #[arg(required_unless_present = "recipe")]
        engine: Option<String>,

        /// Field width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Field height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Number of drift steps before the snapshot.
        #[arg(short, long, default_value_t = 0)]
        steps: usize,

        /// Run seed; the noise tables are drawn from it.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Colour ramp (gray, ink, ember, tide).
        #[arg(short, long, default_value = "gray")]
        ramp: String,

        /// Custom ramp as two hex colours, e.g. "#101820,#f4efe6".
        #[arg(long, value_name = "LOW,HIGH", conflicts_with = "ramp")]
        ramp_hex: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Recipe JSON file; replaces engine, size, seed, steps and params.
        #[arg(long)]
        recipe: Option<PathBuf>,
    },
    /// Print the noise value at one point.
    #[command(allow_negative_numbers = true)]
    Sample {
        /// Noise seed, used as given.
        #[arg(long, default_value_t = 0.0)]
        seed: f64,

        /// Number of fBm layers.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        octaves: u32,

        /// Amplitude multiplier between octaves.
        #[arg(long, default_value_t = 0.5)]
        falloff: f64,

        x: f64,
        y: f64,
    },
    /// List available engines and ramps.
    List,
}

/// Reads and validates a recipe file.
fn load_recipe(path: &Path) -> Result<Recipe, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    Recipe::from_json_str(&text).map_err(|e| CliError::Input(format!("invalid recipe: {e}")))
}

/// Builds the recipe described by the render flags.
fn recipe_from_flags(
    engine: Option<String>,
    width: usize,
    height: usize,
    seed: u64,
    steps: usize,
    params: &str,
) -> Result<Recipe, CliError> {
    let engine = engine.ok_or_else(|| CliError::Input("missing engine name".into()))?;
    let mut recipe = Recipe::new(&engine, width, height, seed);
    recipe.steps = steps;
    recipe.params = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    if !recipe.params.is_object() {
        return Err(CliError::Input("--params must be a JSON object".into()));
    }
    Ok(recipe)
}

/// Resolves the ramp from `--ramp-hex` when given, else from the preset name.
fn resolve_ramp(name: &str, hex: Option<&str>) -> Result<Ramp, CliError> {
    let ramp = match hex {
        Some(pair) => {
            let (low, high) = pair.split_once(',').ok_or_else(|| {
                CliError::Input(format!("--ramp-hex expects LOW,HIGH, got '{pair}'"))
            })?;
            Ramp::from_hex(low.trim(), high.trim())
        }
        None => Ramp::from_name(name),
    };
    ramp.map_err(|e| CliError::Input(e.to_string()))
}

/// Runs the recipe and writes the final field to `output`.
fn render(recipe: &Recipe, ramp: &Ramp, output: &Path) -> Result<EngineKind, CliError> {
    let mut eng = EngineKind::from_name(
        &recipe.engine,
        recipe.width,
        recipe.height,
        recipe.seed,
        &recipe.params,
    )?;
    (0..recipe.steps).try_for_each(|_| eng.step())?;
    gradient_noise_engines::snapshot::write_png(eng.field(), ramp, output)?;
    Ok(eng)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            let ramps = Ramp::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "engines": engines,
                    "ramps": ramps,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
                println!("Ramps:");
                println!("  {}", ramps.join(", "));
            }
        }
        Command::Sample {
            seed,
            octaves,
            falloff,
            x,
            y,
        } => {
            let value = NoiseSeed::new(seed).fractal_sample(x, y, octaves, falloff);
            if cli.json {
                let info = serde_json::json!({
                    "seed": seed,
                    "x": x,
                    "y": y,
                    "octaves": octaves,
                    "falloff": falloff,
                    "value": value,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{value}");
            }
        }
        Command::Render {
            engine,
            width,
            height,
            steps,
            seed,
            ramp,
            ramp_hex,
            output,
            params,
            recipe,
        } => {
            let recipe = match recipe {
                Some(path) => load_recipe(&path)?,
                None => recipe_from_flags(engine, width, height, seed, steps, &params)?,
            };
            let ramp = resolve_ramp(&ramp, ramp_hex.as_deref())?;

            let eng = render(&recipe, &ramp, &output)?;
            info!(
                engine = %recipe.engine,
                width = recipe.width,
                height = recipe.height,
                steps = recipe.steps,
                seed = recipe.seed,
                output = %output.display(),
                "render complete"
            );

            if cli.json {
                let info = serde_json::json!({
                    "recipe": recipe,
                    "params": eng.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, {} steps, seed {}) -> {}",
                    recipe.engine,
                    recipe.width,
                    recipe.height,
                    recipe.steps,
                    recipe.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
