//! `vantage` command-line tool: frame a bounding box from the shell and dump
//! the options schema.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use vantage::options::Options;
use vantage::{BoundingBox, ViewFitter, ViewRequest};

#[derive(Parser)]
#[command(name = "vantage", about = "Camera auto-framing tools")]
struct Cli {
    /// TOML options file; built-in defaults when omitted.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the camera placement that frames a box.
    Fit {
        /// Minimum corner.
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        min: Vec<f32>,
        /// Maximum corner.
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
        max: Vec<f32>,
        /// Vertical field of view in degrees (default: camera.fovy).
        #[arg(long, allow_negative_numbers = true)]
        fov: Option<f32>,
        /// Pitch in degrees (default: framing.object_pitch).
        #[arg(long, allow_negative_numbers = true)]
        pitch: Option<f32>,
    },
    /// Print the options JSON schema.
    Schema,
}

fn corner(values: &[f32]) -> anyhow::Result<glam::Vec3> {
    match values {
        [x, y, z] => Ok(glam::Vec3::new(*x, *y, *z)),
        _ => anyhow::bail!("expected three coordinates, got {}", values.len()),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = match &cli.options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Fit {
            min,
            max,
            fov,
            pitch,
        } => {
            let request = ViewRequest {
                bounds: BoundingBox::new(corner(&min)?, corner(&max)?),
                vertical_fov_degrees: fov.unwrap_or(options.camera.fovy),
                pitch_degrees: pitch.unwrap_or(options.framing.object_pitch),
            };
            log::info!("framing {request:?}");
            let view = ViewFitter::from_options(&options.framing)
                .frame(&request)
                .context("framing failed")?;
            let p = view.camera_position;
            let t = view.look_at_target;
            writeln!(out, "camera   {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
            writeln!(out, "target   {:.6} {:.6} {:.6}", t.x, t.y, t.z)?;
            writeln!(out, "distance {:.6}", view.distance())?;
        }
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            writeln!(out, "{schema}")?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
