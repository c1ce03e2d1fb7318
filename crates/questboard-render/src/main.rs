//! questboard-render: CLI tool rendering reference outlines to files.
//!
//! Renders the heart, circle, and star reference outlines exactly as a
//! challenge attempt displays them, writing PNG rasters (and optionally
//! SVG vectors) into an output directory. Useful for checking geometry
//! changes visually and for producing printable practice sheets.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin questboard-render -- --out-dir out [--shape circle] [--svg]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use questboard_challenge::{ChallengeConfig, ShapeKind, Surface, render_reference};

/// Render questboard reference outlines to PNG (and optionally SVG) files.
#[derive(Parser)]
#[command(name = "questboard-render", version)]
struct Cli {
    /// Directory to write output files into (created if missing).
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Which shape to render.
    #[arg(long, value_enum, default_value_t = Shape::All)]
    shape: Shape,

    /// Also write an SVG of each outline.
    #[arg(long)]
    svg: bool,

    /// Surface edge length in pixels (square surface).
    #[arg(long, default_value_t = ChallengeConfig::DEFAULT_SURFACE_SIZE)]
    size: u32,
}

/// Shape selection.
#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    /// Parametric heart curve.
    Heart,
    /// Circle of fixed radius.
    Circle,
    /// Five-pointed star.
    Star,
    /// All three shapes.
    All,
}

impl Shape {
    fn kinds(self) -> Vec<ShapeKind> {
        match self {
            Self::Heart => vec![ShapeKind::Heart],
            Self::Circle => vec![ShapeKind::Circle],
            Self::Star => vec![ShapeKind::Star],
            Self::All => vec![ShapeKind::Heart, ShapeKind::Circle, ShapeKind::Star],
        }
    }
}

const fn kind_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Heart => "heart",
        ShapeKind::Circle => "circle",
        ShapeKind::Star => "star",
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = ChallengeConfig {
        surface: questboard_challenge::Dimensions {
            width: cli.size,
            height: cli.size,
        },
        ..ChallengeConfig::default()
    };

    if let Err(e) = std::fs::create_dir_all(&cli.out_dir) {
        eprintln!("Error creating {}: {e}", cli.out_dir.display());
        return ExitCode::FAILURE;
    }

    for kind in cli.shape.kinds() {
        let mut surface = match Surface::new(config.surface) {
            Ok(surface) => surface,
            Err(e) => {
                eprintln!("Error creating surface: {e}");
                return ExitCode::FAILURE;
            }
        };
        render_reference(&mut surface, kind, &config);

        let png_path = cli.out_dir.join(format!("{}.png", kind_name(kind)));
        let png_bytes = match questboard_export::snapshot_png(&surface) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error encoding {}: {e}", png_path.display());
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(&png_path, &png_bytes) {
            eprintln!("Error writing {}: {e}", png_path.display());
            return ExitCode::FAILURE;
        }
        println!("{} ({} bytes)", png_path.display(), png_bytes.len());

        if cli.svg {
            let svg_path = cli.out_dir.join(format!("{}.svg", kind_name(kind)));
            let svg = questboard_export::outline_svg(kind, config.surface, &config);
            if let Err(e) = std::fs::write(&svg_path, &svg) {
                eprintln!("Error writing {}: {e}", svg_path.display());
                return ExitCode::FAILURE;
            }
            println!("{} ({} bytes)", svg_path.display(), svg.len());
        }
    }

    ExitCode::SUCCESS
}
