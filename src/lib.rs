//! Gridwarp: randomized grid-mesh image distortion.
//!
//! An image is split into a coarse grid, every grid vertex is nudged by a
//! bounded random offset, and the resulting vertex correspondence drives a
//! piecewise mesh transform.
//!
//! # Modules
//!
//! - [`geom`]: Rectangles, quadrilaterals and vertex lattices
//! - [`distort`]: Bounded random vertex displacement
//! - [`mesh`]: Per-cell (destination rectangle, source quad) assembly
//! - [`warp`]: Orchestration from image size to mesh
//! - [`render`]: Reference mesh-transform renderer
//! - [`imageio`]: Image decode/encode and the end-to-end pipeline
//! - [`error`]: Error types for gridwarp operations
//!
//! # Example
//!
//! ```
//! use gridwarp::warp::{compute_distortion_mesh_seeded, WarpParams};
//!
//! let params = WarpParams { max_shift: 20, subdivisions: 4, seed: Some(69) };
//! let mesh = compute_distortion_mesh_seeded(640, 480, &params).unwrap();
//! assert_eq!(mesh.len(), 16);
//! ```

pub mod distort;
pub mod error;
pub mod geom;
pub mod imageio;
pub mod mesh;
pub mod render;
pub mod warp;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use error::WarpError;

/// The gridwarp CLI application.
#[derive(Parser)]
#[command(name = "gridwarp")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Distort an image and write the result.
    Warp(WarpArgs),
    /// Print the distortion mesh for an image size without rendering.
    Mesh(MeshArgs),
}

/// Distortion knobs shared by every subcommand.
#[derive(clap::Args)]
struct DistortionArgs {
    /// Maximum vertex displacement in pixels.
    #[arg(long, default_value_t = warp::DEFAULT_MAX_SHIFT, allow_negative_numbers = true)]
    max_shift: i64,

    /// Number of grid cells per axis.
    #[arg(long, default_value_t = warp::DEFAULT_SUBDIVISIONS, allow_negative_numbers = true)]
    subdivisions: i64,

    /// Random seed for reproducible output.
    #[arg(long, env = "GRIDWARP_SEED")]
    seed: Option<u64>,
}

impl DistortionArgs {
    fn params(&self) -> warp::WarpParams {
        warp::WarpParams {
            max_shift: self.max_shift,
            subdivisions: self.subdivisions,
            seed: self.seed,
        }
    }
}

/// Arguments for the warp subcommand.
#[derive(clap::Args)]
struct WarpArgs {
    /// Input image.
    input: PathBuf,

    /// Output image; '.jpg' is appended when the extension is not an image format.
    #[arg(short, long, default_value = "result.jpg")]
    output: PathBuf,

    #[command(flatten)]
    distortion: DistortionArgs,
}

/// Output format for printed meshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MeshFormat {
    Text,
    Json,
}

/// Arguments for the mesh subcommand.
#[derive(clap::Args)]
struct MeshArgs {
    /// Image width in pixels.
    #[arg(long, allow_negative_numbers = true)]
    width: i64,

    /// Image height in pixels.
    #[arg(long, allow_negative_numbers = true)]
    height: i64,

    #[command(flatten)]
    distortion: DistortionArgs,

    /// Output format for the mesh.
    #[arg(long, value_enum, default_value_t = MeshFormat::Text)]
    output_format: MeshFormat,
}

/// Run the gridwarp CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), WarpError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Warp(args)) => run_warp(args),
        Some(Commands::Mesh(args)) => run_mesh(args),
        None => {
            println!("gridwarp {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Randomized grid-mesh image distortion.");
            println!();
            println!("Run 'gridwarp --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the warp subcommand.
fn run_warp(args: WarpArgs) -> Result<(), WarpError> {
    let params = args.distortion.params();
    let written = imageio::distort_image(&args.input, &args.output, &params)?;
    println!("Wrote {}", written.display());
    Ok(())
}

/// Execute the mesh subcommand.
fn run_mesh(args: MeshArgs) -> Result<(), WarpError> {
    let params = args.distortion.params();
    let mesh = warp::compute_distortion_mesh_seeded(args.width, args.height, &params)?;

    match args.output_format {
        MeshFormat::Json => println!("{}", serde_json::to_string_pretty(&mesh)?),
        MeshFormat::Text => print!("{}", mesh),
    }

    Ok(())
}
