#![deny(unsafe_code)]
//! CLI binary for the magnet-sketch field synthesis system.
//!
//! Subcommands:
//! - `field <scene>` - synthesize (Bx, By) and write the grids as JSON
//! - `render <scene>` - write a magnitude heatmap PNG
//! - `list` - print available engines and palettes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process;

use magnet_sketch_core::{FieldEngine, Palette, SampleGrid, VectorField};
use magnet_sketch_dipole::scene::Scene;
use magnet_sketch_dipole::{DISPLAY_RESOLUTION, DOMAIN_HALF_EXTENT};
use magnet_sketch_engines::EngineKind;

#[derive(Parser)]
#[command(name = "magnet-sketch", about = "Magnetic field sketching CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize the field for a scene and dump Bx/By as JSON.
    Field {
        /// Scene file: {"magnets": [...], "intensity": ...}.
        scene: PathBuf,

        /// Engine name (e.g. "dipole").
        #[arg(long, default_value = "dipole")]
        engine: String,

        /// Grid points per row.
        #[arg(long, default_value_t = DISPLAY_RESOLUTION)]
        nx: usize,

        /// Grid points per column.
        #[arg(long, default_value_t = DISPLAY_RESOLUTION)]
        ny: usize,

        /// Half-extent of the centered square domain.
        #[arg(long, default_value_t = DOMAIN_HALF_EXTENT)]
        half_extent: f64,

        /// Override the scene's intensity.
        #[arg(long)]
        intensity: Option<f64>,

        /// Output file path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the field magnitude as a PNG heatmap.
    Render {
        /// Scene file: {"magnets": [...], "intensity": ...}.
        scene: PathBuf,

        /// Engine name (e.g. "dipole").
        #[arg(long, default_value = "dipole")]
        engine: String,

        /// Grid points per row.
        #[arg(long, default_value_t = DISPLAY_RESOLUTION)]
        nx: usize,

        /// Grid points per column.
        #[arg(long, default_value_t = DISPLAY_RESOLUTION)]
        ny: usize,

        /// Half-extent of the centered square domain.
        #[arg(long, default_value_t = DOMAIN_HALF_EXTENT)]
        half_extent: f64,

        /// Override the scene's intensity.
        #[arg(long)]
        intensity: Option<f64>,

        /// Palette name (plasma, viridis, monochrome).
        #[arg(short, long, default_value = "plasma")]
        palette: String,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,
    },
    /// List available engines and palettes.
    List,
}

/// Reads a scene file and builds the named engine over it.
fn build_engine(
    scene_path: &Path,
    engine: &str,
    intensity: Option<f64>,
) -> Result<EngineKind, CliError> {
    let text = std::fs::read_to_string(scene_path)
        .map_err(|e| CliError::Io(format!("{}: {e}", scene_path.display())))?;
    let scene = Scene::from_json_str(&text)?;
    let params = json!({
        "magnets": scene.magnets,
        "intensity": intensity.unwrap_or(scene.intensity),
    });
    Ok(EngineKind::from_name(engine, &params)?)
}

/// Encodes one field component with NaN cells as JSON nulls.
fn component_to_json(values: &[f64]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|&v| if v.is_finite() { json!(v) } else { Value::Null })
            .collect(),
    )
}

/// The full grid dump handed to external streamline renderers.
fn field_dump(field: &VectorField, grid: &SampleGrid) -> Value {
    let ((x_min, x_max), (y_min, y_max)) = grid.extent();
    json!({
        "nx": field.nx(),
        "ny": field.ny(),
        "x_min": x_min,
        "x_max": x_max,
        "y_min": y_min,
        "y_max": y_max,
        "bx": component_to_json(field.bx()),
        "by": component_to_json(field.by()),
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            let palettes = Palette::list_names();
            if cli.json {
                let info = json!({
                    "engines": engines,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Field {
            scene,
            engine,
            nx,
            ny,
            half_extent,
            intensity,
            output,
        } => {
            let eng = build_engine(&scene, &engine, intensity)?;
            let grid = SampleGrid::new(
                nx,
                ny,
                (-half_extent, half_extent),
                (-half_extent, half_extent),
            )?;
            let field = eng.synthesize(&grid)?;
            let dump = serde_json::to_string_pretty(&field_dump(&field, &grid))?;

            match &output {
                Some(path) => std::fs::write(path, dump)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?,
                None => println!("{dump}"),
            }

            if cli.json {
                let info = json!({
                    "engine": engine,
                    "nx": nx,
                    "ny": ny,
                    "defined_cells": field.finite_count(),
                    "output": output.as_ref().map(|p| p.display().to_string()),
                });
                eprintln!("{}", serde_json::to_string_pretty(&info)?);
            } else if let Some(path) = &output {
                eprintln!(
                    "synthesized {engine} field ({nx}x{ny}, {} defined cells) -> {}",
                    field.finite_count(),
                    path.display()
                );
            }
        }
        Command::Render {
            scene,
            engine,
            nx,
            ny,
            half_extent,
            intensity,
            palette,
            output,
        } => {
            let palette =
                Palette::from_name(&palette).map_err(|e| CliError::Input(e.to_string()))?;
            let eng = build_engine(&scene, &engine, intensity)?;
            let grid = SampleGrid::new(
                nx,
                ny,
                (-half_extent, half_extent),
                (-half_extent, half_extent),
            )?;
            let field = eng.synthesize(&grid)?;

            magnet_sketch_engines::snapshot::write_png(&field, &palette, &output)?;

            if cli.json {
                let info = json!({
                    "engine": engine,
                    "nx": nx,
                    "ny": ny,
                    "defined_cells": field.finite_count(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {engine} field ({nx}x{ny}, {} defined cells) -> {}",
                    field.finite_count(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
