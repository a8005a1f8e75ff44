//! ALICE-Noise CLI
//!
//! Command-line front end: parse a field request, generate, write the
//! image through the PPM sink.
//!
//! Author: Moroya Sakamoto

#[cfg(feature = "cli")]
use alice_noise::prelude::*;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "alice-noise")]
#[command(author = "Moroya Sakamoto")]
#[command(version = alice_noise::VERSION)]
#[command(about = "ALICE-Noise: deterministic 2D noise fields", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    White,
    Perlin,
    Voronoi,
}

#[cfg(feature = "cli")]
impl From<KindArg> for NoiseKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::White => NoiseKind::White,
            KindArg::Perlin => NoiseKind::Perlin,
            KindArg::Voronoi => NoiseKind::Voronoi,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate a noise field and write it as PPM
    Generate {
        /// Output file
        #[arg(short, long, default_value = "noise.ppm")]
        output: PathBuf,
        /// Noise kind
        #[arg(short, long, value_enum, default_value = "perlin")]
        kind: KindArg,
        /// Field width in pixels
        #[arg(long, default_value = "256")]
        width: u32,
        /// Field height in pixels
        #[arg(long, default_value = "256")]
        height: u32,
        /// Random seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
        /// Fractal octaves
        #[arg(long, default_value = "1")]
        octaves: u32,
        /// Base frequency (inverse of feature size)
        #[arg(short, long, default_value = "0.05")]
        frequency: f32,
        /// Write ASCII (P3) instead of binary (P6)
        #[arg(long)]
        ascii: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            kind,
            width,
            height,
            seed,
            octaves,
            frequency,
            ascii,
        } => cmd_generate(output, kind, width, height, seed, octaves, frequency, ascii),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    output: PathBuf,
    kind: KindArg,
    width: u32,
    height: u32,
    seed: u64,
    octaves: u32,
    frequency: f32,
    ascii: bool,
) {
    let request = FieldRequest::new(width, height, seed, octaves, frequency, kind.into());

    let field = match generate(&request) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = if ascii {
        export_ppm_ascii(&field, &output)
    } else {
        export_ppm(&field, &output)
    };

    match result {
        Ok(()) => println!(
            "Wrote {}x{} {:?} field (seed {}) to {}",
            width,
            height,
            request.kind,
            seed,
            output.display()
        ),
        Err(e) => {
            eprintln!("Write error: {}", e);
            std::process::exit(1);
        }
    }
}
