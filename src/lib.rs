//! Ucrs: the unified coordinate reference system adapter.
//!
//! Ucrs wraps CRS objects from several geospatial libraries behind one
//! type. Any supported input (EPSG code, `EPSG:n` string, WKT document,
//! proj string, parameter mapping, or a backend's native object) is
//! normalized once into a canonical representation, and conversions to
//! each backend's native object are derived lazily and cached.
//!
//! The primary backend (`proj4rs`) is always available. The `proj` and
//! `gdal` backends are optional, behind the `backend-proj` and
//! `backend-gdal` cargo features.
//!
//! # Modules
//!
//! - [`crs`]: Canonical representation types (CanonicalCrs, CrsInput, etc.)
//! - [`backends`]: Backend identifiers, availability, and view builders
//! - [`describe`]: CRS description reports
//! - [`error`]: Error types for ucrs operations

pub mod backends;
pub mod crs;
pub mod describe;
pub mod error;

mod adapter;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use adapter::Ucrs;
pub use backends::{Availability, Backend};
pub use crs::{CanonicalCrs, CrsInput, CrsKind, ProjParams};
pub use error::{BackendError, UcrsError};

/// The ucrs CLI application.
#[derive(Parser)]
#[command(name = "ucrs")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Describe a CRS: identity, kind, definition, backend availability.
    Describe(DescribeArgs),
    /// Print one representation of a CRS.
    Convert(ConvertArgs),
}

/// Arguments for the describe subcommand.
#[derive(clap::Args)]
struct DescribeArgs {
    /// CRS input: EPSG code, 'EPSG:n', WKT, or proj string.
    input: Option<String>,

    /// Read the CRS input from a file instead (e.g. a WKT document).
    #[arg(long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Include the full WKT text in the report.
    #[arg(long)]
    wkt: bool,
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// CRS input: EPSG code, 'EPSG:n', WKT, or proj string.
    input: Option<String>,

    /// Read the CRS input from a file instead.
    #[arg(long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Target representation ('proj4', 'wkt', or 'epsg').
    #[arg(long)]
    to: String,
}

/// Run the ucrs CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), UcrsError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Describe(args)) => run_describe(args),
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // No subcommand: print a short banner and exit successfully
            println!("ucrs {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("The unified coordinate reference system adapter.");
            println!();
            println!("Run 'ucrs --help' for usage information.");
            Ok(())
        }
    }
}

/// Resolves the CRS text from either the inline argument or a file.
fn resolve_input(input: Option<String>, file: Option<PathBuf>) -> Result<String, UcrsError> {
    match (input, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        _ => Err(UcrsError::invalid(
            "expected a CRS input argument or --file",
        )),
    }
}

/// Execute the describe subcommand.
fn run_describe(args: DescribeArgs) -> Result<(), UcrsError> {
    let text = resolve_input(args.input, args.file)?;
    let crs = Ucrs::new(text)?;

    let opts = describe::DescribeOptions {
        include_wkt: args.wkt,
    };
    let report = describe::describe(&crs, &opts);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{report}"),
    }
    Ok(())
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), UcrsError> {
    let text = resolve_input(args.input, args.file)?;
    let crs = Ucrs::new(text)?;

    match args.to.as_str() {
        "proj4" | "proj" => println!("{}", crs.to_proj_string()),
        "wkt" => match crs.wkt() {
            Some(wkt) => println!("{wkt}"),
            None => return Err(UcrsError::NoWkt),
        },
        "epsg" => match crs.epsg() {
            Some(code) => println!("EPSG:{code}"),
            None => return Err(UcrsError::NoRegistryCode),
        },
        other => return Err(UcrsError::UnsupportedTarget(other.to_string())),
    }
    Ok(())
}
