/// Command-line front end for rotating OBJ files
use clap::Parser;
use objrot_core::{parse_angle, transcode, Axis, MeshDocument, RotateResult, Rotation};
use std::path::PathBuf;
use tracing::info;

pub mod report;

pub use report::Report;

const EXAMPLES: &str = "\
Examples:
  objrot bunny.obj bunny_rot.obj x 90
  objrot top.obj top_rot.obj y -30
  objrot leg.obj leg_rot.obj z 45";

/// Rotate the vertices and normals of an OBJ file about the X, Y or Z axis
/// (right-hand rule). All other lines are copied unchanged.
#[derive(Debug, Parser)]
#[command(name = "objrot", version, about, after_help = EXAMPLES)]
pub struct Cli {
    /// Input OBJ file
    pub input: PathBuf,

    /// Output OBJ file (may be the same as the input)
    pub output: PathBuf,

    /// Rotation axis: x, y, or z
    pub axis: String,

    /// Rotation angle in degrees
    #[arg(allow_hyphen_values = true)]
    pub angle: String,
}

/// Rotate `cli.input` into `cli.output`.
///
/// Arguments are validated before any file is touched, and the input is read
/// in full before the output is opened.
pub fn run(cli: &Cli) -> RotateResult<Report> {
    let angle = parse_angle(&cli.angle)?;
    let axis: Axis = cli.axis.parse()?;
    let rotation = Rotation::new(axis, angle);

    info!(input = %cli.input.display(), %axis, angle, "rotating");

    let document = MeshDocument::read(&cli.input)?;
    let transcoded = transcode(&document, &rotation)?;
    drop(document);
    transcoded.write(&cli.output)?;

    info!(output = %cli.output.display(), "done");

    Ok(Report {
        input: cli.input.clone(),
        output: cli.output.clone(),
        rotation,
        stats: transcoded.stats,
    })
}
